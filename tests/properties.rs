use geopred::geometry::Segment2;
use geopred::math::distance_2d::closest_point_on_segment;
use geopred::math::orient_2d::{
    cross, distance, point_on_segment_exclusive, point_on_segment_inclusive,
};
use geopred::math::polygon_2d::{point_in_convex_polygon, point_in_polygon};
use geopred::math::Point2;
use proptest::prelude::*;

fn point() -> impl Strategy<Value = Point2> {
    (-100.0..100.0_f64, -100.0..100.0_f64).prop_map(|(x, y)| Point2::new(x, y))
}

proptest! {
    #[test]
    fn cross_is_antisymmetric(a in point(), b in point(), o in point()) {
        prop_assert!((cross(&a, &b, &o) + cross(&b, &a, &o)).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric_and_reflexive(a in point(), b in point()) {
        prop_assert!(distance(&a, &a).abs() < f64::EPSILON);
        prop_assert!((distance(&a, &b) - distance(&b, &a)).abs() < 1e-12);
    }

    #[test]
    fn endpoints_and_midpoint_lie_on_segment(a in point(), b in point()) {
        prop_assume!(distance(&a, &b) > 1e-3);
        let seg = Segment2::new(a, b);
        let mid = seg.midpoint();
        prop_assert!(point_on_segment_inclusive(&a, &seg));
        prop_assert!(point_on_segment_inclusive(&b, &seg));
        prop_assert!(point_on_segment_inclusive(&mid, &seg));
        prop_assert!(!point_on_segment_exclusive(&a, &seg));
        prop_assert!(!point_on_segment_exclusive(&b, &seg));
        prop_assert!(point_on_segment_exclusive(&mid, &seg));
    }

    #[test]
    fn closest_point_lies_on_segment(p in point(), a in point(), b in point()) {
        let seg = Segment2::new(a, b);
        let c = closest_point_on_segment(&p, &seg);
        prop_assert!(point_on_segment_inclusive(&c, &seg), "p={} c={}", p, c);
        // Never farther than either endpoint.
        let d = distance(&p, &c);
        prop_assert!(d <= distance(&p, &a) + 1e-9);
        prop_assert!(d <= distance(&p, &b) + 1e-9);
    }

    #[test]
    fn general_and_convex_containment_agree_off_boundary(
        x in -1.0..3.0_f64,
        y in -1.0..3.0_f64,
    ) {
        let square = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        prop_assume!([x, y].iter().all(|v| v.abs() > 1e-6 && (v - 2.0).abs() > 1e-6));
        let q = Point2::new(x, y);
        prop_assert_eq!(point_in_polygon(&q, &square), point_in_convex_polygon(&q, &square));
    }
}
