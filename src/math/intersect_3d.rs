use tracing::trace;

use crate::geometry::{Plane3, Segment3, Triangle3};

use super::relation_3d::{
    opposite_side_of_line, opposite_side_of_points, parallel_line_plane, parallel_planes,
    same_side_of_line, same_side_of_points,
};
use super::vector_3d::{
    collinear, coplanar, cross, dot, point_on_segment_inclusive, same_point, sub,
};
use super::{is_zero, Point3, EPS};

/// Intersection point of two coplanar, non-parallel lines.
///
/// Solves `u.a + t * du` against the second line by parametric
/// substitution. For skew lines the result is the point of `u` nearest to
/// `v`. Returns `None` when the lines are parallel.
#[must_use]
pub fn line_intersection(u: &Segment3, v: &Segment3) -> Option<Point3> {
    let du = u.direction();
    let dv = v.direction();
    let n = cross(&du, &dv);
    if n.norm() < EPS {
        trace!(?u, ?v, "lines are parallel; no unique intersection point");
        return None;
    }
    let t = dot(&cross(&sub(&v.a, &u.a), &dv), &n) / n.norm_squared();
    Some(u.a + du * t)
}

/// Intersection point of the infinite line through `line` with `plane`.
///
/// Returns `None` when the line is parallel to the plane (including lying
/// in it).
#[must_use]
pub fn line_plane_intersection(line: &Segment3, plane: &Plane3) -> Option<Point3> {
    let normal = plane.normal();
    let dir = line.direction();
    let denom = dot(&normal, &dir);
    if is_zero(denom) {
        trace!(?line, ?plane, "line is parallel to plane; no intersection point");
        return None;
    }
    let t = dot(&normal, &sub(plane.a(), &line.a)) / denom;
    Some(line.a + dir * t)
}

/// Line of intersection of two planes, returned as two distinct points on it.
///
/// The edges of `p2`'s defining triangle are intersected with `p1`, skipping
/// edges parallel to `p1`, and the first two distinct hits are connected.
/// Returns `None` when the planes are parallel.
#[must_use]
pub fn plane_intersection(p1: &Plane3, p2: &Plane3) -> Option<Segment3> {
    if parallel_planes(p1, p2) {
        trace!(?p1, ?p2, "planes are parallel; no intersection line");
        return None;
    }
    let edges = [
        Segment3::new(*p2.a(), *p2.b()),
        Segment3::new(*p2.b(), *p2.c()),
        Segment3::new(*p2.c(), *p2.a()),
    ];
    let mut first: Option<Point3> = None;
    for edge in edges.iter().filter(|e| !parallel_line_plane(e, p1)) {
        let Some(hit) = line_plane_intersection(edge, p1) else {
            continue;
        };
        match first {
            None => first = Some(hit),
            Some(a) if !same_point(&a, &hit) => return Some(Segment3::new(a, hit)),
            Some(_) => {}
        }
    }
    trace!(?p1, ?p2, "plane intersection collapsed to a single point");
    None
}

/// Returns `true` if two segments share at least one point, endpoints and
/// collinear overlap included.
///
/// Segments that are not coplanar never intersect.
#[must_use]
pub fn segments_intersect_inclusive(u: &Segment3, v: &Segment3) -> bool {
    if !coplanar(&u.a, &u.b, &v.a, &v.b) {
        return false;
    }
    if !collinear(&u.a, &u.b, &v.a) || !collinear(&u.a, &u.b, &v.b) {
        return !same_side_of_line(&u.a, &u.b, v) && !same_side_of_line(&v.a, &v.b, u);
    }
    point_on_segment_inclusive(&u.a, v)
        || point_on_segment_inclusive(&u.b, v)
        || point_on_segment_inclusive(&v.a, u)
        || point_on_segment_inclusive(&v.b, u)
}

/// Returns `true` if two coplanar segments cross at a single interior point
/// of both.
#[must_use]
pub fn segments_intersect_exclusive(u: &Segment3, v: &Segment3) -> bool {
    coplanar(&u.a, &u.b, &v.a, &v.b)
        && opposite_side_of_line(&u.a, &u.b, v)
        && opposite_side_of_line(&v.a, &v.b, u)
}

/// Returns `true` if the segment meets the triangle, boundary contact
/// included.
///
/// The endpoints must not be strictly on one side of the triangle's plane,
/// and for each triangle edge, its two vertices must not be strictly on one
/// side of the plane spanned by the segment and the remaining vertex.
#[must_use]
pub fn segment_triangle_intersect_inclusive(seg: &Segment3, tri: &Triangle3) -> bool {
    let (l0, l1) = (&seg.a, &seg.b);
    !same_side_of_points(l0, l1, &tri.a, &tri.b, &tri.c)
        && !same_side_of_points(&tri.a, &tri.b, l0, l1, &tri.c)
        && !same_side_of_points(&tri.b, &tri.c, l0, l1, &tri.a)
        && !same_side_of_points(&tri.c, &tri.a, l0, l1, &tri.b)
}

/// Returns `true` if the segment crosses the triangle's interior, with both
/// endpoints strictly off the triangle's plane.
#[must_use]
pub fn segment_triangle_intersect_exclusive(seg: &Segment3, tri: &Triangle3) -> bool {
    let (l0, l1) = (&seg.a, &seg.b);
    opposite_side_of_points(l0, l1, &tri.a, &tri.b, &tri.c)
        && opposite_side_of_points(&tri.a, &tri.b, l0, l1, &tri.c)
        && opposite_side_of_points(&tri.b, &tri.c, l0, l1, &tri.a)
        && opposite_side_of_points(&tri.c, &tri.a, l0, l1, &tri.b)
}
