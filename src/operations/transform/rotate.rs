use crate::geometry::{Point, Transform};
use crate::math::deg_to_rad;

use super::centered;

/// Builds a rotation of the plane. The angle is in degrees.
///
/// ```text
///     |cos(u)  -sin(u)   0|            | cos(u)   sin(u)   0|
/// T = |sin(u)   cos(u)   0|,  inv(T) = |-sin(u)   cos(u)   0|
///     |  0        0      1|            |   0        0      1|
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Rotate {
    angle_deg: f64,
    pivot: Option<Point>,
    invert: bool,
}

impl Rotate {
    /// Creates a rotation by `angle_deg` degrees, counter-clockwise.
    #[must_use]
    pub fn new(angle_deg: f64) -> Self {
        Self {
            angle_deg,
            pivot: None,
            invert: false,
        }
    }

    /// Rotates about `pivot` instead of the origin.
    #[must_use]
    pub fn about(mut self, pivot: Point) -> Self {
        self.pivot = Some(pivot);
        self
    }

    /// Builds the inverse rotation instead.
    #[must_use]
    pub fn inverted(mut self) -> Self {
        self.invert = true;
        self
    }

    /// Builds the transform.
    #[must_use]
    pub fn build(self) -> Transform {
        let angle = if self.invert {
            -self.angle_deg
        } else {
            self.angle_deg
        };
        let (sin, cos) = deg_to_rad(angle).sin_cos();

        let raw = Transform::from_affine([[cos, -sin, 0.0], [sin, cos, 0.0]]);
        centered(raw, self.pivot)
    }
}
