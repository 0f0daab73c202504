use crate::error::{Result, TransformError};
use crate::geometry::{Point, Transform};
use crate::math::approx_eq;

use super::centered;

/// Builds a shear of the plane.
///
/// The inverse negates the factors and rescales by a corrective factor:
///
/// ```text
///     |1   x   0|                       | 1  -x   0|
/// T = |y   1   0|,  inv(T) = 1/(1-xy) * |-y   1   0|
///     |0   0   1|                       | 0   0   1|
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Shear {
    sx: f64,
    sy: f64,
    pivot: Option<Point>,
    invert: bool,
}

impl Shear {
    /// Creates a shear by factors `(sx, sy)`.
    #[must_use]
    pub fn new(sx: f64, sy: f64) -> Self {
        Self {
            sx,
            sy,
            pivot: None,
            invert: false,
        }
    }

    /// Shears about `pivot` instead of the origin.
    #[must_use]
    pub fn about(mut self, pivot: Point) -> Self {
        self.pivot = Some(pivot);
        self
    }

    /// Builds the inverse shear instead.
    #[must_use]
    pub fn inverted(mut self) -> Self {
        self.invert = true;
        self
    }

    /// Builds the transform.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::DivideByZero`] when inverting with
    /// `sx * sy` within tolerance of one, where the corrective factor
    /// diverges.
    pub fn build(self) -> Result<Transform> {
        let (mut sx, mut sy) = (self.sx, self.sy);
        let mut factor = 1.0;

        if self.invert {
            if approx_eq(sx * sy, 1.0) {
                return Err(TransformError::DivideByZero { factory: "shear" }.into());
            }
            factor = 1.0 / (1.0 - sx * sy);
            sx = -sx;
            sy = -sy;
        }

        let raw = Transform::from_affine([
            [factor, factor * sx, 0.0],
            [factor * sy, factor, 0.0],
        ]);
        Ok(centered(raw, self.pivot))
    }
}
