use crate::error::Result;
use crate::geometry::{Point, Transform};

use super::Shape;

/// An ellipse, stored as its three defining points: the center and one
/// point on each semi-axis.
///
/// An affine map sends ellipses to ellipses, and the image ellipse is
/// determined by the images of these three points, so transforming the
/// defining points transforms the ellipse exactly, without sampling the
/// curve.
#[derive(Debug, Clone)]
pub struct Ellipse {
    points: [Point; 3],
}

impl Ellipse {
    /// Creates an ellipse from its center and the two semi-axis lengths.
    #[must_use]
    pub fn new(center: Point, semi_axis_x: f64, semi_axis_y: f64) -> Self {
        Self {
            points: [
                center,
                Point::new(center.x() + semi_axis_x, center.y()),
                Point::new(center.x(), center.y() + semi_axis_y),
            ],
        }
    }

    /// Creates an ellipse directly from its three defining points.
    #[must_use]
    pub fn from_points(center: Point, x_axis: Point, y_axis: Point) -> Self {
        Self {
            points: [center, x_axis, y_axis],
        }
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Point {
        self.points[0]
    }
}

impl Shape for Ellipse {
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
