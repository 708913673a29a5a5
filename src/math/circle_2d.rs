use tracing::trace;

use crate::geometry::{Circle, Segment2};

use super::distance_2d::{distance_point_to_line, distance_point_to_segment, project_point_to_line};
use super::orient_2d::{distance, point_on_segment_inclusive, same_point};
use super::{is_zero, sign, Point2, Sign, Vector2};

/// Returns `true` if the infinite line through `line` meets the circle.
#[must_use]
pub fn line_intersects_circle(circle: &Circle, line: &Segment2) -> bool {
    let d = distance_point_to_line(circle.center(), line);
    sign(d - circle.radius()) != Sign::Positive
}

/// Returns `true` if the segment meets the circumference of the circle.
///
/// The nearest point of the segment must be within the radius and the
/// farther endpoint must be at least the radius away. A segment strictly
/// inside the disk does not touch the circle.
#[must_use]
pub fn segment_intersects_circle(circle: &Circle, seg: &Segment2) -> bool {
    let r = circle.radius();
    let near = distance_point_to_segment(circle.center(), seg);
    let far = distance(circle.center(), &seg.a).max(distance(circle.center(), &seg.b));
    sign(near - r) != Sign::Positive && sign(far - r) != Sign::Negative
}

/// Returns `true` if the two circumferences share at least one point.
///
/// Tangency, internal or external, counts.
#[must_use]
pub fn circles_intersect(c1: &Circle, c2: &Circle) -> bool {
    let d = distance(c1.center(), c2.center());
    let (r1, r2) = (c1.radius(), c2.radius());
    sign(d - (r1 + r2)) != Sign::Positive && sign(d - (r1 - r2).abs()) != Sign::Negative
}

/// Point on the circle nearest to `p`.
///
/// When `p` coincides with the center every circle point is equally near
/// and the center itself is returned.
#[must_use]
pub fn closest_point_on_circle(circle: &Circle, p: &Point2) -> Point2 {
    let center = circle.center();
    if same_point(p, center) {
        return *center;
    }
    let offset = (p - center) * (circle.radius() / distance(p, center));
    let near = center + offset;
    let far = center - offset;
    if distance(&near, p) <= distance(&far, p) {
        near
    } else {
        far
    }
}

/// Points where the infinite line through `line` meets the circle.
///
/// Returns `None` if the line misses the circle or is degenerate. For a
/// tangent line both returned points coincide.
#[must_use]
pub fn line_circle_intersection_points(circle: &Circle, line: &Segment2) -> Option<[Point2; 2]> {
    let r = circle.radius();
    let foot = project_point_to_line(circle.center(), line)?;
    let dist = distance(circle.center(), &foot);
    if sign(dist - r) == Sign::Positive {
        return None;
    }
    let dir = line.direction();
    let dir: Vector2 = dir / dir.norm();
    let half_chord = (r * r - dist * dist).max(0.0).sqrt();
    Some([foot - dir * half_chord, foot + dir * half_chord])
}

/// Points where the segment meets the circle, in order along the segment.
///
/// Returns between zero and two points; a tangent segment yields one.
#[must_use]
pub fn segment_circle_intersection_points(circle: &Circle, seg: &Segment2) -> Vec<Point2> {
    let Some([p0, p1]) = line_circle_intersection_points(circle, seg) else {
        return Vec::new();
    };
    let mut hits = Vec::with_capacity(2);
    if point_on_segment_inclusive(&p0, seg) {
        hits.push(p0);
    }
    if point_on_segment_inclusive(&p1, seg) && !hits.iter().any(|h| same_point(h, &p1)) {
        hits.push(p1);
    }
    hits
}

/// Points where the two circles meet.
///
/// Builds the radical line (a point on the center line at the chord's foot,
/// plus a second point displaced perpendicular to the center line) and
/// intersects it with `c1`. Returns `None` if the circles do not meet or
/// are concentric.
#[must_use]
pub fn circle_circle_intersection_points(c1: &Circle, c2: &Circle) -> Option<[Point2; 2]> {
    let axis = c2.center() - c1.center();
    let d2 = axis.norm_squared();
    if is_zero(d2) {
        trace!(?c1, ?c2, "concentric circles; no isolated intersection points");
        return None;
    }
    if !circles_intersect(c1, c2) {
        return None;
    }
    let (r1, r2) = (c1.radius(), c2.radius());
    let along = (r1 * r1 - r2 * r2 + d2) / (2.0 * d2);
    let foot = c1.center() + axis * along;
    let radical = Segment2::new(foot, foot + Vector2::new(-axis.y, axis.x));
    let points = line_circle_intersection_points(c1, &radical);
    if points.is_none() {
        // Tangent circles can land the radical line a hair outside c1.
        let tangent = closest_point_on_circle(c1, &foot);
        return Some([tangent, tangent]);
    }
    points
}
