use approx::assert_relative_eq;
use geopred::geometry::{Circle, Plane3, Segment2, Segment3};
use geopred::math::circle_2d::{circle_circle_intersection_points, circles_intersect};
use geopred::math::intersect_2d::{intersection_point, segments_intersect};
use geopred::math::intersect_3d::{plane_intersection, segments_intersect_inclusive};
use geopred::math::orient_2d::collinear;
use geopred::math::polygon_2d::{is_convex, point_in_polygon, segment_in_polygon};
use geopred::math::relation_3d::{parallel_lines, perpendicular_lines};
use geopred::math::{Point2, Point3};

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

fn p2(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

fn p3(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

fn seg2(a: (f64, f64), b: (f64, f64)) -> Segment2 {
    Segment2::new(p2(a.0, a.1), p2(b.0, b.1))
}

#[test]
fn collinearity_examples() {
    assert!(collinear(&p2(0.0, 0.0), &p2(1.0, 1.0), &p2(2.0, 2.0)));
    assert!(!collinear(&p2(0.0, 0.0), &p2(1.0, 0.0), &p2(0.0, 1.0)));
}

#[test]
fn crossing_segments_meet_at_center() {
    init_tracing();
    let s1 = seg2((0.0, 0.0), (2.0, 2.0));
    let s2 = seg2((0.0, 2.0), (2.0, 0.0));
    assert!(segments_intersect(&s1, &s2));
    let pt = intersection_point(&s1, &s2).expect("segments are not parallel");
    assert_relative_eq!(pt.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(pt.y, 1.0, epsilon = 1e-12);
}

#[test]
fn parallel_segments_report_no_point() {
    init_tracing();
    let s1 = seg2((0.0, 0.0), (2.0, 0.0));
    let s2 = seg2((0.0, 1.0), (2.0, 1.0));
    assert!(!segments_intersect(&s1, &s2));
    assert!(intersection_point(&s1, &s2).is_none());
}

#[test]
fn square_and_arrow_polygons() {
    let square = [p2(0.0, 0.0), p2(2.0, 0.0), p2(2.0, 2.0), p2(0.0, 2.0)];
    let arrow = [p2(0.0, 0.0), p2(1.0, 1.0), p2(2.0, 0.0), p2(2.0, 3.0), p2(0.0, 3.0)];
    assert!(is_convex(&square));
    assert!(!is_convex(&arrow));
    assert!(point_in_polygon(&p2(1.0, 1.0), &square));
    assert!(!point_in_polygon(&p2(3.0, 3.0), &square));
    // The arrow's notch apex sits between these endpoints.
    assert!(!segment_in_polygon(&seg2((0.5, 0.8), (1.5, 0.8)), &arrow));
    assert!(segment_in_polygon(&seg2((0.5, 2.0), (1.5, 2.0)), &arrow));
}

#[test]
fn circle_tangency_and_separation() {
    init_tracing();
    let c = |x: f64, r: f64| Circle::new(p2(x, 0.0), r).expect("valid radius");
    assert!(circles_intersect(&c(0.0, 2.0), &c(3.0, 2.0)));
    assert!(!circles_intersect(&c(0.0, 1.0), &c(3.0, 1.0)));
    let [a, b] = circle_circle_intersection_points(&c(0.0, 2.0), &c(3.0, 2.0))
        .expect("circles overlap");
    assert_relative_eq!(a.x, 1.5, epsilon = 1e-12);
    assert_relative_eq!(b.x, 1.5, epsilon = 1e-12);
    assert_relative_eq!(a.y, -b.y, epsilon = 1e-12);
}

#[test]
fn parallel_and_perpendicular_directions() {
    let from_origin = |x: f64, y: f64, z: f64| Segment3::new(Point3::origin(), p3(x, y, z));
    assert!(parallel_lines(&from_origin(1.0, 1.0, 1.0), &from_origin(2.0, 2.0, 2.0)));
    assert!(perpendicular_lines(&from_origin(1.0, 0.0, 0.0), &from_origin(0.0, 1.0, 0.0)));
}

#[test]
fn xy_and_xz_planes_meet_along_x_axis() {
    init_tracing();
    let xy = Plane3::new(p3(0.0, 0.0, 0.0), p3(1.0, 0.0, 0.0), p3(0.0, 1.0, 0.0))
        .expect("non-collinear");
    let xz = Plane3::new(p3(0.0, 0.0, 0.0), p3(1.0, 0.0, 0.0), p3(0.0, 0.0, 1.0))
        .expect("non-collinear");
    let line = plane_intersection(&xy, &xz).expect("planes are not parallel");
    for q in [line.a, line.b] {
        assert_relative_eq!(q.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(q.z, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn skew_segments_are_disjoint() {
    // Their shadows on z = 0 cross at (1, 1), but the segments are a unit apart.
    let u = Segment3::new(p3(0.0, 0.0, 0.0), p3(2.0, 2.0, 0.0));
    let v = Segment3::new(p3(0.0, 2.0, 1.0), p3(2.0, 0.0, 1.0));
    assert!(!segments_intersect_inclusive(&u, &v));
}
