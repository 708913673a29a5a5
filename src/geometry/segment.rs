use crate::math::{Point2, Point3, Vector2, Vector3};

/// An ordered pair of 2D points.
///
/// Depending on the operation this is read either as the bounded segment
/// `a -> b` or as the infinite line through `a` and `b`. Endpoint order
/// matters for orientation (the sign of a cross product flips when the
/// endpoints are swapped) but not for same-side/opposite-side tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    /// Start point.
    pub a: Point2,
    /// End point.
    pub b: Point2,
}

impl Segment2 {
    /// Creates a segment from its two endpoints.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self { a, b }
    }

    /// Returns `b - a`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.b - self.a
    }

    /// Returns the midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.a, &self.b)
    }
}

/// An ordered pair of 3D points, read as a bounded segment or an infinite
/// line depending on the operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment3 {
    /// Start point.
    pub a: Point3,
    /// End point.
    pub b: Point3,
}

impl Segment3 {
    /// Creates a segment from its two endpoints.
    #[must_use]
    pub fn new(a: Point3, b: Point3) -> Self {
        Self { a, b }
    }

    /// Returns `b - a`.
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        self.b - self.a
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::EPS;

    #[test]
    fn direction_and_midpoint() {
        let s = Segment2::new(Point2::new(1.0, 1.0), Point2::new(3.0, 5.0));
        let d = s.direction();
        assert!((d.x - 2.0).abs() < EPS && (d.y - 4.0).abs() < EPS);
        let m = s.midpoint();
        assert!((m.x - 2.0).abs() < EPS && (m.y - 3.0).abs() < EPS);
    }

    #[test]
    fn direction_3d() {
        let s = Segment3::new(Point3::new(1.0, 2.0, 3.0), Point3::new(2.0, 2.0, 1.0));
        assert_eq!(s.direction(), Vector3::new(1.0, 0.0, -2.0));
    }
}
