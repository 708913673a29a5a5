use crate::geometry::Segment2;

use super::orient_2d::{cross, opposite_side, point_on_segment_inclusive, side};
use super::{sign, Point2, Sign, Vector2};

/// Tracks which non-zero signs have been observed.
///
/// Shared by the convexity and convex containment tests so that both are
/// independent of the polygon's winding.
#[derive(Debug, Default, Clone, Copy)]
struct SignAccumulator {
    positive: bool,
    negative: bool,
}

impl SignAccumulator {
    /// Records `s` and returns `true` while the observed signs still agree.
    fn push(&mut self, s: Sign) -> bool {
        match s {
            Sign::Positive => self.positive = true,
            Sign::Negative => self.negative = true,
            Sign::Zero => {}
        }
        !(self.positive && self.negative)
    }
}

/// Iterates over the closed polygon's edges `v[i] -> v[(i + 1) % n]`.
fn edges(polygon: &[Point2]) -> impl Iterator<Item = Segment2> + '_ {
    let n = polygon.len();
    (0..n).map(move |i| Segment2::new(polygon[i], polygon[(i + 1) % n]))
}

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(polygon: &[Point2]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let sum: f64 = edges(polygon).map(|e| e.a.x * e.b.y - e.b.x * e.a.y).sum();
    sum * 0.5
}

/// Returns `true` if the polygon is convex, in either winding.
///
/// Collinear consecutive vertices are tolerated. Polygons with fewer than
/// three vertices are not convex.
#[must_use]
pub fn is_convex(polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut acc = SignAccumulator::default();
    (0..n).all(|i| {
        let s = sign(cross(
            &polygon[(i + 1) % n],
            &polygon[(i + 2) % n],
            &polygon[i],
        ));
        acc.push(s)
    })
}

/// Returns `true` if `q` is strictly inside the convex polygon.
///
/// Points on an edge line, including the boundary, are outside.
#[must_use]
pub fn point_in_convex_polygon(q: &Point2, polygon: &[Point2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut acc = SignAccumulator::default();
    edges(polygon).all(|edge| {
        let s = side(q, &edge);
        s != Sign::Zero && acc.push(s)
    })
}

/// Returns `true` if `q` is inside the (possibly non-convex) polygon.
///
/// Points on the boundary are inside. Otherwise counts crossings of the ray
/// from `q` through `q + (1, 0)`. Edges lying on the ray line are skipped,
/// and an edge counts only when it straddles the ray line (half-open, so a
/// vertex resting on the ray is counted once) and `q` lies on the side of
/// the edge line facing away from the ray direction.
#[must_use]
pub fn point_in_polygon(q: &Point2, polygon: &[Point2]) -> bool {
    if polygon.is_empty() {
        return false;
    }
    let ray = Segment2::new(*q, q + Vector2::new(1.0, 0.0));
    let mut crossings = 0usize;
    for edge in edges(polygon) {
        if point_on_segment_inclusive(q, &edge) {
            return true;
        }
        let sa = side(&edge.a, &ray);
        let sb = side(&edge.b, &ray);
        if sa == Sign::Zero && sb == Sign::Zero {
            continue;
        }
        let a_above = sa == Sign::Positive;
        let b_above = sb == Sign::Positive;
        if a_above == b_above {
            continue;
        }
        // Upward edges cross to the right of q when q is on their left.
        let q_side = side(q, &edge);
        if (b_above && q_side == Sign::Positive) || (a_above && q_side == Sign::Negative) {
            crossings += 1;
        }
    }
    crossings % 2 == 1
}

/// Returns `true` if the segment lies entirely inside the polygon, boundary
/// included.
///
/// Both endpoints must be inside and no edge may properly cross the segment.
/// Points where the segment touches the boundary are then collected, and the
/// midpoint of every pair of them must be inside too; this catches segments
/// that leave the polygon through a reflex vertex without a proper crossing.
#[must_use]
pub fn segment_in_polygon(seg: &Segment2, polygon: &[Point2]) -> bool {
    if !point_in_polygon(&seg.a, polygon) || !point_in_polygon(&seg.b, polygon) {
        return false;
    }
    let mut touches: Vec<Point2> = Vec::new();
    for edge in edges(polygon) {
        if opposite_side(&seg.a, &seg.b, &edge) && opposite_side(&edge.a, &edge.b, seg) {
            return false;
        }
        if point_on_segment_inclusive(&seg.a, &edge) {
            touches.push(seg.a);
        }
        if point_on_segment_inclusive(&seg.b, &edge) {
            touches.push(seg.b);
        }
        if point_on_segment_inclusive(&edge.a, seg) {
            touches.push(edge.a);
        }
    }
    touches.iter().enumerate().all(|(i, u)| {
        touches[i + 1..]
            .iter()
            .all(|v| point_in_polygon(&nalgebra::center(u, v), polygon))
    })
}
