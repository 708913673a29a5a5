use crate::geometry::{Segment3, Triangle3};

use super::{is_zero, sign, Point3, Sign, Vector3, EPS};

/// Cross product `u x v`.
#[must_use]
#[inline]
pub fn cross(u: &Vector3, v: &Vector3) -> Vector3 {
    u.cross(v)
}

/// Dot product `u . v`.
#[must_use]
#[inline]
pub fn dot(u: &Vector3, v: &Vector3) -> f64 {
    u.dot(v)
}

/// Vector from `p2` to `p1`.
#[must_use]
#[inline]
pub fn sub(p1: &Point3, p2: &Point3) -> Vector3 {
    p1 - p2
}

/// Euclidean distance between two points.
#[must_use]
#[inline]
pub fn distance(p1: &Point3, p2: &Point3) -> f64 {
    sub(p1, p2).norm()
}

/// Normal of the plane through `a`, `b`, `c`: `(b - a) x (c - a)`.
///
/// Zero when the points are collinear.
#[must_use]
pub fn plane_normal(a: &Point3, b: &Point3, c: &Point3) -> Vector3 {
    cross(&sub(b, a), &sub(c, a))
}

/// Returns `true` if every coordinate difference is zero.
#[must_use]
pub fn same_point(p1: &Point3, p2: &Point3) -> bool {
    is_zero(p1.x - p2.x) && is_zero(p1.y - p2.y) && is_zero(p1.z - p2.z)
}

/// Returns `true` if the three points lie on one line.
#[must_use]
pub fn collinear(p1: &Point3, p2: &Point3, p3: &Point3) -> bool {
    cross(&sub(p1, p2), &sub(p2, p3)).norm() < EPS
}

/// Returns `true` if `d` lies in the plane through `a`, `b`, `c`.
///
/// Trivially true when `a`, `b`, `c` are collinear.
#[must_use]
pub fn coplanar(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> bool {
    is_zero(dot(&plane_normal(a, b, c), &sub(d, a)))
}

/// Returns `true` if `p` lies on `seg`, endpoints included.
#[must_use]
pub fn point_on_segment_inclusive(p: &Point3, seg: &Segment3) -> bool {
    let (a, b) = (&seg.a, &seg.b);
    collinear(p, a, b)
        && sign((a.x - p.x) * (b.x - p.x)) != Sign::Positive
        && sign((a.y - p.y) * (b.y - p.y)) != Sign::Positive
        && sign((a.z - p.z) * (b.z - p.z)) != Sign::Positive
}

/// Returns `true` if `p` lies on `seg` but is neither endpoint.
#[must_use]
pub fn point_on_segment_exclusive(p: &Point3, seg: &Segment3) -> bool {
    point_on_segment_inclusive(p, seg) && !same_point(p, &seg.a) && !same_point(p, &seg.b)
}

/// Returns `true` if `p` lies in the triangle, boundary included.
///
/// Compares the triangle's area with the sum of the three sub-triangles
/// formed with `p`; a point off the triangle's plane fails the test.
#[must_use]
pub fn point_in_triangle_inclusive(p: &Point3, tri: &Triangle3) -> bool {
    let whole = plane_normal(&tri.a, &tri.b, &tri.c).norm();
    let parts = plane_normal(p, &tri.a, &tri.b).norm()
        + plane_normal(p, &tri.b, &tri.c).norm()
        + plane_normal(p, &tri.c, &tri.a).norm();
    is_zero(whole - parts)
}

/// Returns `true` if `p` lies strictly inside the triangle.
#[must_use]
pub fn point_in_triangle_exclusive(p: &Point3, tri: &Triangle3) -> bool {
    point_in_triangle_inclusive(p, tri)
        && [
            plane_normal(p, &tri.a, &tri.b),
            plane_normal(p, &tri.b, &tri.c),
            plane_normal(p, &tri.c, &tri.a),
        ]
        .iter()
        .all(|n| !is_zero(n.norm()))
}
