use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::error::{Result, ShapeError};
use crate::geometry::{Point, Transform};

use super::Shape;

/// A regular polygon, generated once at construction.
///
/// Vertices lie on the circumscribed circle of radius
/// `side_length / (2 * sin(pi / n))` at uniform angular spacing. The first
/// vertex sits at angle `pi/2` for an odd vertex count and `pi/n` for an
/// even one, which places the polygon symmetrically about the vertical axis
/// through the center.
#[derive(Debug, Clone)]
pub struct RegularPolygon {
    points: Vec<Point>,
}

impl RegularPolygon {
    /// Creates a regular polygon from its center, vertex count and side
    /// length.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::TooFewVertices`] if `vertex_count < 3`.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(center: Point, vertex_count: usize, side_length: f64) -> Result<Self> {
        if vertex_count < 3 {
            return Err(ShapeError::TooFewVertices {
                count: vertex_count,
            }
            .into());
        }

        let n = vertex_count as f64;
        let circumradius = side_length / (2.0 * (PI / n).sin());
        let start = if vertex_count % 2 == 1 {
            FRAC_PI_2
        } else {
            PI / n
        };
        let step = TAU / n;

        let points = (0..vertex_count)
            .map(|i| {
                let angle = start + step * i as f64;
                Point::new(
                    center.x() + circumradius * angle.cos(),
                    center.y() + circumradius * angle.sin(),
                )
            })
            .collect();

        Ok(Self { points })
    }
}

impl Shape for RegularPolygon {
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
