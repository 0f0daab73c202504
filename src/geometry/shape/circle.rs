use crate::error::Result;
use crate::geometry::{Point, Transform};

use super::Shape;

/// A circle, stored as its two defining points: the center and one point
/// on the circumference.
#[derive(Debug, Clone)]
pub struct Circle {
    points: [Point; 2],
}

impl Circle {
    /// Creates a circle from its center and radius.
    #[must_use]
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            points: [center, Point::new(center.x() + radius, center.y())],
        }
    }

    /// Creates a circle directly from its two defining points.
    #[must_use]
    pub fn from_points(center: Point, rim: Point) -> Self {
        Self {
            points: [center, rim],
        }
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Point {
        self.points[0]
    }
}

impl Shape for Circle {
    fn points(&self) -> &[Point] {
        &self.points
    }

    fn transform(&mut self, transform: &Transform) -> Result<()> {
        for point in &mut self.points {
            point.apply(transform)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::transform::Scale;

    #[test]
    fn stores_center_and_rim() {
        let circle = Circle::new(Point::new(0.0, 0.0), 5.0);
        assert_eq!(circle.points(), &[Point::new(0.0, 0.0), Point::new(5.0, 0.0)]);
        assert_eq!(circle.center(), Point::new(0.0, 0.0));
    }

    #[test]
    fn from_points_preserves_order() {
        let circle = Circle::from_points(Point::new(1.0, 1.0), Point::new(1.0, 4.0));
        assert_eq!(circle.points(), &[Point::new(1.0, 1.0), Point::new(1.0, 4.0)]);
    }

    #[test]
    fn scaling_stretches_the_rim_point() {
        let mut circle = Circle::new(Point::new(0.0, 0.0), 5.0);
        circle
            .transform(&Scale::new(2.0, 1.0).build().unwrap())
            .unwrap();
        assert_eq!(
            circle.points(),
            &[Point::new(0.0, 0.0), Point::new(10.0, 0.0)]
        );
    }
}
