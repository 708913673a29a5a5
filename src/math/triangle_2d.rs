use crate::geometry::{Segment2, Triangle2};

use super::intersect_2d::intersection_point;
use super::orient_2d::{collinear, distance};
use super::{Point2, Vector2};

/// Line through `p` with direction perpendicular to `a -> b`.
fn perpendicular(p: Point2, a: &Point2, b: &Point2) -> Segment2 {
    let d = b - a;
    Segment2::new(p, p + Vector2::new(-d.y, d.x))
}

/// Center of the circle through the triangle's vertices.
///
/// Intersection of the perpendicular bisectors of `ab` and `bc`. Returns
/// `None` for a degenerate (collinear) triangle.
#[must_use]
pub fn circumcenter(tri: &Triangle2) -> Option<Point2> {
    let ab = perpendicular(nalgebra::center(&tri.a, &tri.b), &tri.a, &tri.b);
    let bc = perpendicular(nalgebra::center(&tri.b, &tri.c), &tri.b, &tri.c);
    intersection_point(&ab, &bc)
}

/// Center of the inscribed circle, the side-length-weighted vertex average.
///
/// Returns `None` for a degenerate triangle.
#[must_use]
pub fn incenter(tri: &Triangle2) -> Option<Point2> {
    if collinear(&tri.a, &tri.b, &tri.c) {
        return None;
    }
    let la = distance(&tri.b, &tri.c);
    let lb = distance(&tri.c, &tri.a);
    let lc = distance(&tri.a, &tri.b);
    let weighted = tri.a.coords * la + tri.b.coords * lb + tri.c.coords * lc;
    Some(Point2::from(weighted / (la + lb + lc)))
}

/// Intersection of the triangle's altitudes.
///
/// Returns `None` for a degenerate triangle.
#[must_use]
pub fn orthocenter(tri: &Triangle2) -> Option<Point2> {
    let from_a = perpendicular(tri.a, &tri.b, &tri.c);
    let from_b = perpendicular(tri.b, &tri.c, &tri.a);
    intersection_point(&from_a, &from_b)
}

/// Average of the three vertices.
#[must_use]
pub fn centroid(tri: &Triangle2) -> Point2 {
    Point2::from((tri.a.coords + tri.b.coords + tri.c.coords) / 3.0)
}
