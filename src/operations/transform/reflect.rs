use crate::geometry::{Point, Transform};
use crate::math::deg_to_rad;

use super::centered;

/// Builds a reflection of the plane about the line through the pivot at the
/// given angle. The angle is in degrees.
///
/// ```text
///     |cos(2u)   sin(2u)   0|
/// T = |sin(2u)  -cos(2u)   0|,  inv(T) = T
///     |  0         0       1|
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Reflect {
    angle_deg: f64,
    pivot: Option<Point>,
}

impl Reflect {
    /// Creates a reflection about the line at `angle_deg` degrees through
    /// the origin.
    #[must_use]
    pub fn new(angle_deg: f64) -> Self {
        Self {
            angle_deg,
            pivot: None,
        }
    }

    /// Reflects about the line through `pivot` instead of the origin.
    #[must_use]
    pub fn about(mut self, pivot: Point) -> Self {
        self.pivot = Some(pivot);
        self
    }

    /// Accepts the inversion flag for symmetry with the other factories;
    /// a reflection is its own inverse, so the flag has no effect.
    #[must_use]
    pub fn inverted(self) -> Self {
        self
    }

    /// Builds the transform.
    #[must_use]
    pub fn build(self) -> Transform {
        let (sin, cos) = deg_to_rad(2.0 * self.angle_deg).sin_cos();

        let raw = Transform::from_affine([[cos, sin, 0.0], [sin, -cos, 0.0]]);
        centered(raw, self.pivot)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn reflects_across_the_x_axis() {
        let t = Reflect::new(0.0).build();
        assert_eq!(t.apply(&Point::new(1.0, 2.0)).unwrap(), Point::new(1.0, -2.0));
    }

    #[test]
    fn reflects_across_the_y_axis() {
        let t = Reflect::new(90.0).build();
        assert_eq!(t.apply(&Point::new(1.0, 2.0)).unwrap(), Point::new(-1.0, 2.0));
    }

    #[test]
    fn reflects_across_the_diagonal() {
        let t = Reflect::new(45.0).build();
        assert_eq!(t.apply(&Point::new(1.0, 2.0)).unwrap(), Point::new(2.0, 1.0));
    }

    #[test]
    fn reflection_is_self_inverse() {
        let t = Reflect::new(30.0).build();
        assert_eq!(t * t, Transform::identity());
        assert_eq!(Reflect::new(30.0).inverted().build(), t);
    }

    #[test]
    fn reflects_about_a_shifted_axis() {
        // The line at 0 degrees through (0, 1) is y = 1.
        let t = Reflect::new(0.0).about(Point::new(0.0, 1.0)).build();
        assert_eq!(t.apply(&Point::new(3.0, 0.0)).unwrap(), Point::new(3.0, 2.0));
    }
}
