use crate::error::Result;
use crate::math::{Point2, Point3};

use super::Plane3;

/// A triangle in the plane. No non-degeneracy is enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle2 {
    pub a: Point2,
    pub b: Point2,
    pub c: Point2,
}

impl Triangle2 {
    /// Creates a triangle from its three vertices.
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self { a, b, c }
    }
}

/// A triangle in space. No non-degeneracy is enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle3 {
    pub a: Point3,
    pub b: Point3,
    pub c: Point3,
}

impl Triangle3 {
    /// Creates a triangle from its three vertices.
    #[must_use]
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self { a, b, c }
    }

    /// Returns the supporting plane of the triangle.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertices are collinear.
    pub fn plane(&self) -> Result<Plane3> {
        Plane3::new(self.a, self.b, self.c)
    }
}
