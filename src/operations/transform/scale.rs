use crate::error::{Result, TransformError};
use crate::geometry::{Point, Transform};
use crate::math::approx_eq;

use super::centered;

/// Builds a scaling of the plane.
///
/// ```text
///     |x   0   0|            |1/x  0   0|
/// T = |0   y   0|,  inv(T) = | 0  1/y  0|
///     |0   0   1|            | 0   0   1|
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    sx: f64,
    sy: f64,
    pivot: Option<Point>,
    invert: bool,
}

impl Scale {
    /// Creates a scaling by factors `(sx, sy)`.
    #[must_use]
    pub fn new(sx: f64, sy: f64) -> Self {
        Self {
            sx,
            sy,
            pivot: None,
            invert: false,
        }
    }

    /// Scales about `pivot` instead of the origin.
    #[must_use]
    pub fn about(mut self, pivot: Point) -> Self {
        self.pivot = Some(pivot);
        self
    }

    /// Builds the inverse scaling instead.
    #[must_use]
    pub fn inverted(mut self) -> Self {
        self.invert = true;
        self
    }

    /// Builds the transform.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::DivideByZero`] when inverting with a factor
    /// within tolerance of zero.
    pub fn build(self) -> Result<Transform> {
        let (mut sx, mut sy) = (self.sx, self.sy);

        if self.invert {
            if approx_eq(sx, 0.0) || approx_eq(sy, 0.0) {
                return Err(TransformError::DivideByZero { factory: "scaling" }.into());
            }
            sx = 1.0 / sx;
            sy = 1.0 / sy;
        }

        let raw = Transform::from_affine([[sx, 0.0, 0.0], [0.0, sy, 0.0]]);
        Ok(centered(raw, self.pivot))
    }
}
