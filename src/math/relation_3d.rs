use crate::geometry::{Plane3, Segment3};

use super::vector_3d::{cross, dot, plane_normal, sub};
use super::{is_zero, sign, Point3, Sign, EPS};

// ── parallel / perpendicular ──

/// Returns `true` if the two lines have parallel directions.
#[must_use]
pub fn parallel_lines(u: &Segment3, v: &Segment3) -> bool {
    cross(&u.direction(), &v.direction()).norm() < EPS
}

/// Returns `true` if the line is parallel to the plane (or lies in it).
#[must_use]
pub fn parallel_line_plane(line: &Segment3, plane: &Plane3) -> bool {
    is_zero(dot(&line.direction(), &plane.normal()))
}

/// Returns `true` if the two planes are parallel or coincident.
#[must_use]
pub fn parallel_planes(p1: &Plane3, p2: &Plane3) -> bool {
    cross(&p1.normal(), &p2.normal()).norm() < EPS
}

/// Returns `true` if the two line directions are perpendicular.
#[must_use]
pub fn perpendicular_lines(u: &Segment3, v: &Segment3) -> bool {
    is_zero(dot(&u.direction(), &v.direction()))
}

/// Returns `true` if the line is perpendicular to the plane.
#[must_use]
pub fn perpendicular_line_plane(line: &Segment3, plane: &Plane3) -> bool {
    cross(&line.direction(), &plane.normal()).norm() < EPS
}

/// Returns `true` if the two planes are perpendicular.
#[must_use]
pub fn perpendicular_planes(p1: &Plane3, p2: &Plane3) -> bool {
    is_zero(dot(&p1.normal(), &p2.normal()))
}

// ── sides of a line ──

/// Classifies `p1` and `p2` relative to the line through `line`.
///
/// Meant for points coplanar with the line: the sign compares the
/// directions of `d x (p - a)` for both points.
fn line_side_product(p1: &Point3, p2: &Point3, line: &Segment3) -> Sign {
    let d = line.direction();
    let c1 = cross(&d, &sub(p1, &line.a));
    let c2 = cross(&d, &sub(p2, &line.a));
    sign(dot(&c1, &c2))
}

/// Returns `true` if `p1` and `p2` are strictly on the same side of the line
/// through `line`, within their common plane.
#[must_use]
pub fn same_side_of_line(p1: &Point3, p2: &Point3, line: &Segment3) -> bool {
    line_side_product(p1, p2, line) == Sign::Positive
}

/// Returns `true` if `p1` and `p2` are strictly on opposite sides of the line
/// through `line`, within their common plane.
#[must_use]
pub fn opposite_side_of_line(p1: &Point3, p2: &Point3, line: &Segment3) -> bool {
    line_side_product(p1, p2, line) == Sign::Negative
}

// ── sides of a plane ──

/// Side of `p` relative to the plane through `a`, `b`, `c`.
///
/// `Positive` is the side the normal `(b - a) x (c - a)` points to.
#[must_use]
pub fn side_of_points(p: &Point3, a: &Point3, b: &Point3, c: &Point3) -> Sign {
    sign(dot(&plane_normal(a, b, c), &sub(p, a)))
}

/// Side of `p` relative to `plane`.
#[must_use]
pub fn side_of_plane(p: &Point3, plane: &Plane3) -> Sign {
    side_of_points(p, plane.a(), plane.b(), plane.c())
}

/// Returns `true` if `p1` and `p2` are strictly on the same side of the
/// plane through `a`, `b`, `c`. The caller guarantees the three points are
/// not collinear.
#[must_use]
pub fn same_side_of_points(p1: &Point3, p2: &Point3, a: &Point3, b: &Point3, c: &Point3) -> bool {
    side_of_points(p1, a, b, c).product(side_of_points(p2, a, b, c)) == Sign::Positive
}

/// Returns `true` if `p1` and `p2` are strictly on opposite sides of the
/// plane through `a`, `b`, `c`.
#[must_use]
pub fn opposite_side_of_points(
    p1: &Point3,
    p2: &Point3,
    a: &Point3,
    b: &Point3,
    c: &Point3,
) -> bool {
    side_of_points(p1, a, b, c).product(side_of_points(p2, a, b, c)) == Sign::Negative
}

/// Returns `true` if `p1` and `p2` are strictly on the same side of `plane`.
#[must_use]
pub fn same_side_of_plane(p1: &Point3, p2: &Point3, plane: &Plane3) -> bool {
    same_side_of_points(p1, p2, plane.a(), plane.b(), plane.c())
}

/// Returns `true` if `p1` and `p2` are strictly on opposite sides of `plane`.
#[must_use]
pub fn opposite_side_of_plane(p1: &Point3, p2: &Point3, plane: &Plane3) -> bool {
    opposite_side_of_points(p1, p2, plane.a(), plane.b(), plane.c())
}
