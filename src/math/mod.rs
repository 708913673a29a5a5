pub mod circle_2d;
pub mod distance_2d;
pub mod distance_3d;
pub mod intersect_2d;
pub mod intersect_3d;
pub mod orient_2d;
pub mod polygon_2d;
pub mod relation_3d;
pub mod sphere;
pub mod triangle_2d;
pub mod vector_3d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global absolute tolerance. Every comparison against zero goes through
/// [`is_zero`] or [`sign`], which both use this value.
pub const EPS: f64 = 1e-8;

/// Returns `true` when `v` is within [`EPS`] of zero.
#[must_use]
#[inline]
pub fn is_zero(v: f64) -> bool {
    v.abs() < EPS
}

/// Three-way classification of a scalar against [`EPS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Sign of the product of two classified quantities.
    ///
    /// `Zero` absorbs, so a product is nonzero exactly when both factors are.
    #[must_use]
    pub fn product(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

/// Classifies `v` as negative, zero, or positive using [`EPS`].
#[must_use]
#[inline]
pub fn sign(v: f64) -> Sign {
    if v >= EPS {
        Sign::Positive
    } else if v <= -EPS {
        Sign::Negative
    } else {
        Sign::Zero
    }
}
