use crate::geometry::Segment2;

use super::intersect_2d::intersection_point;
use super::orient_2d::{distance, same_point, same_side};
use super::{Point2, Vector2};

/// Line through `p` perpendicular to `line`.
fn perpendicular_through(p: &Point2, line: &Segment2) -> Segment2 {
    let d = line.direction();
    Segment2::new(*p, p + Vector2::new(-d.y, d.x))
}

/// Orthogonal projection of `p` onto the infinite line through `line`.
///
/// Built as the intersection of `line` with the perpendicular through `p`.
/// Returns `None` if `line` is degenerate.
#[must_use]
pub fn project_point_to_line(p: &Point2, line: &Segment2) -> Option<Point2> {
    intersection_point(line, &perpendicular_through(p, line))
}

/// Distance from `p` to the infinite line through `line`.
///
/// A degenerate line is treated as the single point `line.a`.
#[must_use]
pub fn distance_point_to_line(p: &Point2, line: &Segment2) -> f64 {
    match project_point_to_line(p, line) {
        Some(foot) => distance(p, &foot),
        None => distance(p, &line.a),
    }
}

/// Point of `seg` nearest to `p`.
///
/// When both endpoints lie strictly on one side of the perpendicular through
/// `p`, the projection falls outside the segment and the nearer endpoint is
/// returned. Otherwise the projection itself is returned.
#[must_use]
pub fn closest_point_on_segment(p: &Point2, seg: &Segment2) -> Point2 {
    if same_point(&seg.a, &seg.b) {
        return seg.a;
    }
    if same_side(&seg.a, &seg.b, &perpendicular_through(p, seg)) {
        return nearer_endpoint(p, seg);
    }
    project_point_to_line(p, seg).unwrap_or_else(|| nearer_endpoint(p, seg))
}

fn nearer_endpoint(p: &Point2, seg: &Segment2) -> Point2 {
    if distance(p, &seg.a) <= distance(p, &seg.b) {
        seg.a
    } else {
        seg.b
    }
}

/// Minimum distance from `p` to the segment `seg`.
#[must_use]
pub fn distance_point_to_segment(p: &Point2, seg: &Segment2) -> f64 {
    distance(p, &closest_point_on_segment(p, seg))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::orient_2d::point_on_segment_inclusive;
    use crate::math::EPS;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Segment2 {
        Segment2::new(p(ax, ay), p(bx, by))
    }

    // ── projection ──

    #[test]
    fn projection_onto_horizontal_line() {
        let foot = project_point_to_line(&p(3.0, 7.0), &seg(0.0, 1.0, 1.0, 1.0)).unwrap();
        assert!((foot.x - 3.0).abs() < EPS && (foot.y - 1.0).abs() < EPS, "foot={foot}");
    }

    #[test]
    fn projection_onto_slanted_line() {
        let foot = project_point_to_line(&p(0.0, 2.0), &seg(0.0, 0.0, 1.0, 1.0)).unwrap();
        assert!((foot.x - 1.0).abs() < EPS && (foot.y - 1.0).abs() < EPS, "foot={foot}");
    }

    #[test]
    fn projection_onto_degenerate_line() {
        assert!(project_point_to_line(&p(0.0, 2.0), &seg(1.0, 1.0, 1.0, 1.0)).is_none());
    }

    // ── distance to line ──

    #[test]
    fn distance_to_line_basic() {
        let d = distance_point_to_line(&p(1.0, 1.0), &seg(0.0, 0.0, 2.0, 0.0));
        assert!((d - 1.0).abs() < EPS, "d={d}");
        // The line is infinite: a far-away foot still counts.
        let d = distance_point_to_line(&p(10.0, -2.0), &seg(0.0, 0.0, 2.0, 0.0));
        assert!((d - 2.0).abs() < EPS, "d={d}");
    }

    #[test]
    fn distance_to_degenerate_line_is_point_distance() {
        let d = distance_point_to_line(&p(3.0, 4.0), &seg(0.0, 0.0, 0.0, 0.0));
        assert!((d - 5.0).abs() < EPS, "d={d}");
    }

    // ── closest point on segment ──

    #[test]
    fn closest_is_projection_inside() {
        let c = closest_point_on_segment(&p(1.0, 1.0), &seg(0.0, 0.0, 2.0, 0.0));
        assert!(same_point(&c, &p(1.0, 0.0)), "c={c}");
    }

    #[test]
    fn closest_is_nearer_endpoint_outside() {
        let s = seg(0.0, 0.0, 2.0, 0.0);
        assert_eq!(closest_point_on_segment(&p(-1.0, 0.0), &s), s.a);
        assert_eq!(closest_point_on_segment(&p(5.0, 3.0), &s), s.b);
    }

    #[test]
    fn closest_on_degenerate_segment() {
        let s = seg(1.0, 1.0, 1.0, 1.0);
        assert_eq!(closest_point_on_segment(&p(4.0, 5.0), &s), s.a);
    }

    #[test]
    fn closest_on_very_short_segment_is_nearer_endpoint() {
        // Too short for the projection to be constructed within EPS.
        let s = seg(0.0, 0.0, 1e-5, 0.0);
        assert_eq!(closest_point_on_segment(&p(5e-4, 0.0), &s), s.b);
        assert_eq!(closest_point_on_segment(&p(-5e-4, 0.0), &s), s.a);
    }

    #[test]
    fn closest_lies_on_segment() {
        let s = seg(-1.0, 2.0, 3.0, -4.0);
        for q in [p(0.0, 0.0), p(10.0, 10.0), p(-5.0, 3.0), p(3.0, -4.0)] {
            let c = closest_point_on_segment(&q, &s);
            assert!(point_on_segment_inclusive(&c, &s), "q={q} c={c}");
        }
    }

    // ── distance to segment ──

    #[test]
    fn segment_distance_perpendicular_and_endpoint() {
        let s = seg(0.0, 0.0, 2.0, 0.0);
        assert!((distance_point_to_segment(&p(1.0, 1.0), &s) - 1.0).abs() < EPS);
        assert!((distance_point_to_segment(&p(-1.0, 0.0), &s) - 1.0).abs() < EPS);
        assert!(distance_point_to_segment(&p(1.0, 0.0), &s).abs() < EPS);
    }

    #[test]
    fn segment_distance_degenerate() {
        let d = distance_point_to_segment(&p(3.0, 4.0), &seg(0.0, 0.0, 0.0, 0.0));
        assert!((d - 5.0).abs() < EPS, "d={d}");
    }
}
