use tracing::trace;

use crate::geometry::Segment2;

use super::orient_2d::{opposite_side, side};
use super::{is_zero, sign, Point2, Sign};

/// Returns `true` if the bounding boxes of the two segments overlap on both
/// axes. Touching boxes overlap.
fn bounding_boxes_overlap(s1: &Segment2, s2: &Segment2) -> bool {
    let overlap = |a0: f64, a1: f64, b0: f64, b1: f64| {
        sign(a0.max(a1) - b0.min(b1)) != Sign::Negative
            && sign(b0.max(b1) - a0.min(a1)) != Sign::Negative
    };
    overlap(s1.a.x, s1.b.x, s2.a.x, s2.b.x) && overlap(s1.a.y, s1.b.y, s2.a.y, s2.b.y)
}

/// Returns `true` if the endpoints of `s` straddle or touch the line through
/// `line`.
fn straddles(s: &Segment2, line: &Segment2) -> bool {
    side(&s.a, line).product(side(&s.b, line)) != Sign::Positive
}

/// Returns `true` if two segments share at least one point.
///
/// Touching at an endpoint and collinear overlap both count. The bounding
/// box test is required as well as the straddle tests: collinear disjoint
/// segments pass the latter.
#[must_use]
pub fn segments_intersect(s1: &Segment2, s2: &Segment2) -> bool {
    bounding_boxes_overlap(s1, s2) && straddles(s1, s2) && straddles(s2, s1)
}

/// Returns `true` if two segments cross at a single interior point of both.
///
/// Touching at an endpoint, or a segment endpoint resting on the other
/// segment, does not count.
#[must_use]
pub fn segments_intersect_exclusive(s1: &Segment2, s2: &Segment2) -> bool {
    opposite_side(&s1.a, &s1.b, s2) && opposite_side(&s2.a, &s2.b, s1)
}

/// Intersection point of the infinite lines through `s1` and `s2`.
///
/// Solves `s1.a + t * (s1.b - s1.a)` against the second line with
/// `t = t1 / t2` in determinant form. Returns `None` when the lines are
/// parallel (or either is degenerate), i.e. when `t2` is zero.
#[must_use]
pub fn intersection_point(s1: &Segment2, s2: &Segment2) -> Option<Point2> {
    let d1 = s1.direction();
    let d2 = s2.direction();
    let t2 = d1.x * d2.y - d1.y * d2.x;
    if is_zero(t2) {
        trace!(?s1, ?s2, "lines are parallel; no unique intersection point");
        return None;
    }
    let w = s2.a - s1.a;
    let t1 = w.x * d2.y - w.y * d2.x;
    Some(s1.a + d1 * (t1 / t2))
}
