use thiserror::Error;

/// Top-level error type for the Affinis geometry kernel.
#[derive(Debug, Error)]
pub enum AffinisError {
    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Point(#[from] PointError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Errors related to affine transformation matrices.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("matrix is not affine: last row [{r0}, {r1}, {r2}] must be [0, 0, 1]")]
    NotAffine { r0: f64, r1: f64, r2: f64 },

    #[error("matrix is singular: affine determinant {det} is within tolerance of zero")]
    Singular { det: f64 },

    #[error("division by zero while inverting {factory}")]
    DivideByZero { factory: &'static str },
}

/// Errors related to homogeneous points.
#[derive(Debug, Error)]
pub enum PointError {
    #[error("point at infinity: homogeneous coordinate {w} is within tolerance of zero")]
    Infinite { w: f64 },

    #[error("malformed point string: {0:?}")]
    Parse(String),
}

/// Errors related to shape construction.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("regular polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },
}

/// Convenience type alias for results using [`AffinisError`].
pub type Result<T> = std::result::Result<T, AffinisError>;
