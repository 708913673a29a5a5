use thiserror::Error;

/// Top-level error type for the geopred library.
#[derive(Debug, Error)]
pub enum GeopredError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised when constructing geometric entities.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("invalid radius {radius}: must be finite and non-negative")]
    InvalidRadius { radius: f64 },
}

/// Convenience type alias for results using [`GeopredError`].
pub type Result<T> = std::result::Result<T, GeopredError>;
