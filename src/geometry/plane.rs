use crate::error::{GeometryError, Result};
use crate::math::vector_3d::plane_normal;
use crate::math::{Point3, Vector3, EPS};

/// A plane through three non-collinear points.
///
/// The normal is derived, not stored: `(b - a) x (c - a)`. It is not
/// normalized, so its length is twice the area of triangle `abc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane3 {
    a: Point3,
    b: Point3,
    c: Point3,
}

impl Plane3 {
    /// Creates a plane through `a`, `b` and `c`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the three points are
    /// collinear (within [`EPS`]).
    pub fn new(a: Point3, b: Point3, c: Point3) -> Result<Self> {
        if plane_normal(&a, &b, &c).norm() < EPS {
            return Err(GeometryError::Degenerate(format!(
                "plane points ({}, {}, {}), ({}, {}, {}), ({}, {}, {}) are collinear",
                a.x, a.y, a.z, b.x, b.y, b.z, c.x, c.y, c.z
            ))
            .into());
        }
        Ok(Self { a, b, c })
    }

    /// Returns the first defining point.
    #[must_use]
    pub fn a(&self) -> &Point3 {
        &self.a
    }

    /// Returns the second defining point.
    #[must_use]
    pub fn b(&self) -> &Point3 {
        &self.b
    }

    /// Returns the third defining point.
    #[must_use]
    pub fn c(&self) -> &Point3 {
        &self.c
    }

    /// Returns the (non-normalized) normal `(b - a) x (c - a)`.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        plane_normal(&self.a, &self.b, &self.c)
    }
}
