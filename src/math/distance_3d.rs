use crate::geometry::{Plane3, Segment3};

use super::vector_3d::{cross, distance, dot, sub};
use super::{Point3, EPS};

/// Distance from `p` to `plane`: `|n . (p - a)| / |n|`.
#[must_use]
pub fn point_to_plane_distance(p: &Point3, plane: &Plane3) -> f64 {
    let n = plane.normal();
    dot(&n, &sub(p, plane.a())).abs() / n.norm()
}

/// Distance from `p` to the infinite line through `line`.
///
/// A degenerate line is treated as the single point `line.a`.
#[must_use]
pub fn point_to_line_distance(p: &Point3, line: &Segment3) -> f64 {
    let d = line.direction();
    let len = d.norm();
    if len < EPS {
        return distance(p, &line.a);
    }
    cross(&d, &sub(p, &line.a)).norm() / len
}

/// Distance between the infinite lines through `u` and `v`.
///
/// Measured along the common perpendicular `du x dv`. Parallel lines have
/// no unique common perpendicular and fall back to the distance from `u.a`
/// to `v`.
#[must_use]
pub fn line_to_line_distance(u: &Segment3, v: &Segment3) -> f64 {
    let n = cross(&u.direction(), &v.direction());
    let len = n.norm();
    if len < EPS {
        return point_to_line_distance(&u.a, v);
    }
    dot(&sub(&u.a, &v.a), &n).abs() / len
}

// Angle quantities are left un-normalized: callers divide by the product of
// the two vector lengths when they need a true cosine or sine.

/// Angle cosine between two lines as `du . dv`.
#[must_use]
pub fn angle_cos_lines(u: &Segment3, v: &Segment3) -> f64 {
    dot(&u.direction(), &v.direction())
}

/// Angle sine between two lines as `|du x dv|`.
#[must_use]
pub fn angle_sin_lines(u: &Segment3, v: &Segment3) -> f64 {
    cross(&u.direction(), &v.direction()).norm()
}

/// Angle sine between a line and a plane as `d . n`.
///
/// Signed by the plane's normal orientation: positive when the line's
/// direction points to the normal's side.
#[must_use]
pub fn angle_sin_line_plane(line: &Segment3, plane: &Plane3) -> f64 {
    dot(&line.direction(), &plane.normal())
}

/// Angle cosine between a line and a plane as `|d x n|`.
#[must_use]
pub fn angle_cos_line_plane(line: &Segment3, plane: &Plane3) -> f64 {
    cross(&line.direction(), &plane.normal()).norm()
}

/// Dihedral angle cosine between two planes as `n1 . n2`.
#[must_use]
pub fn angle_cos_planes(p1: &Plane3, p2: &Plane3) -> f64 {
    dot(&p1.normal(), &p2.normal())
}
