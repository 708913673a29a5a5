use crate::geometry::Segment2;

use super::distance_2d::project_point_to_line;
use super::{is_zero, sign, Point2, Sign};

/// Cross product `(p1 - origin) x (p2 - origin)`.
///
/// Positive when `p1 -> p2` turns counter-clockwise about `origin`, negative
/// when it turns clockwise, zero (within [`EPS`](super::EPS)) when the three
/// points are collinear.
#[must_use]
#[inline]
pub fn cross(p1: &Point2, p2: &Point2, origin: &Point2) -> f64 {
    let u = p1 - origin;
    let v = p2 - origin;
    u.x * v.y - u.y * v.x
}

/// Dot product `(p1 - origin) . (p2 - origin)`.
#[must_use]
#[inline]
pub fn dot(p1: &Point2, p2: &Point2, origin: &Point2) -> f64 {
    (p1 - origin).dot(&(p2 - origin))
}

/// Euclidean distance between two points.
#[must_use]
#[inline]
pub fn distance(p1: &Point2, p2: &Point2) -> f64 {
    (p1 - p2).norm()
}

/// Returns `true` if both coordinate differences are zero.
#[must_use]
pub fn same_point(p1: &Point2, p2: &Point2) -> bool {
    is_zero(p1.x - p2.x) && is_zero(p1.y - p2.y)
}

/// Returns `true` if the three points lie on one line.
#[must_use]
pub fn collinear(p1: &Point2, p2: &Point2, p3: &Point2) -> bool {
    is_zero(cross(p1, p2, p3))
}

/// Side of `p` relative to the directed line `line.a -> line.b`.
///
/// `Positive` means left (counter-clockwise), `Negative` right.
#[must_use]
pub fn side(p: &Point2, line: &Segment2) -> Sign {
    sign(cross(&line.b, p, &line.a))
}

/// Returns `true` if `p` lies on `seg`, endpoints included.
#[must_use]
pub fn point_on_segment_inclusive(p: &Point2, seg: &Segment2) -> bool {
    collinear(p, &seg.a, &seg.b)
        && sign((seg.a.x - p.x) * (seg.b.x - p.x)) != Sign::Positive
        && sign((seg.a.y - p.y) * (seg.b.y - p.y)) != Sign::Positive
}

/// Returns `true` if `p` lies on `seg` but is neither endpoint.
#[must_use]
pub fn point_on_segment_exclusive(p: &Point2, seg: &Segment2) -> bool {
    point_on_segment_inclusive(p, seg) && !same_point(p, &seg.a) && !same_point(p, &seg.b)
}

/// Returns `true` if `p1` and `p2` are strictly on the same side of the line
/// through `line`. A point on the line is on neither side.
#[must_use]
pub fn same_side(p1: &Point2, p2: &Point2, line: &Segment2) -> bool {
    side(p1, line).product(side(p2, line)) == Sign::Positive
}

/// Returns `true` if `p1` and `p2` are strictly on opposite sides of the
/// line through `line`.
#[must_use]
pub fn opposite_side(p1: &Point2, p2: &Point2, line: &Segment2) -> bool {
    side(p1, line).product(side(p2, line)) == Sign::Negative
}

/// Mirror image of `p` across the infinite line through `line`.
///
/// Returns `None` if the line is degenerate (coincident endpoints).
#[must_use]
pub fn reflect(p: &Point2, line: &Segment2) -> Option<Point2> {
    let foot = project_point_to_line(p, line)?;
    Some(foot + (foot - p))
}
