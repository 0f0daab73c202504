use crate::geometry::{Point, Transform};

/// Builds a translation of the plane.
///
/// ```text
///     |1   0   x|            |1   0  -x|
/// T = |0   1   y|,  inv(T) = |0   1  -y|
///     |0   0   1|            |0   0   1|
/// ```
///
/// Translations take no pivot: conjugating a translation with translations
/// leaves it unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Translate {
    dx: f64,
    dy: f64,
    invert: bool,
}

impl Translate {
    /// Creates a translation by `(dx, dy)`.
    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self {
            dx,
            dy,
            invert: false,
        }
    }

    /// Creates a translation by the coordinates of `offset`.
    #[must_use]
    pub fn by(offset: Point) -> Self {
        Self::new(offset.x(), offset.y())
    }

    /// Builds the inverse translation instead.
    #[must_use]
    pub fn inverted(mut self) -> Self {
        self.invert = true;
        self
    }

    /// Builds the transform.
    #[must_use]
    pub fn build(self) -> Transform {
        let (dx, dy) = if self.invert {
            (-self.dx, -self.dy)
        } else {
            (self.dx, self.dy)
        };
        Transform::from_affine([[1.0, 0.0, dx], [0.0, 1.0, dy]])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn translates_a_point() {
        let t = Translate::new(2.0, 3.0).build();
        let image = t.apply(&Point::new(2.0, 1.0)).unwrap();
        assert_eq!(image, Point::new(4.0, 4.0));
    }

    #[test]
    fn by_point_matches_coordinates() {
        let offset = Point::new(-1.0, 2.5);
        assert_eq!(Translate::by(offset).build(), Translate::new(-1.0, 2.5).build());
    }

    #[test]
    fn inverted_negates_the_offset() {
        assert_eq!(
            Translate::new(2.0, 3.0).inverted().build(),
            Translate::new(-2.0, -3.0).build()
        );
    }

    #[test]
    fn inverted_cancels_the_forward_translation() {
        let forward = Translate::new(4.0, -7.0).build();
        let back = Translate::new(4.0, -7.0).inverted().build();
        assert_eq!(forward * back, Transform::identity());
    }
}
