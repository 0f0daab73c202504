use crate::error::Result;
use crate::geometry::{Point, Transform};
use crate::math::hull_2d;

use super::Shape;

/// A polygon or open polygonal line.
///
/// Points are kept in insertion order; when the polygon is closed, an
/// implicit edge connects the last point back to the first.
#[derive(Debug, Clone, Default)]
pub struct Polygon {
    points: Vec<Point>,
    closed: bool,
}

impl Polygon {
    /// Creates an open polygon from an ordered point sequence.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    /// Appends a point to the sequence.
    pub fn add(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Returns whether the polygon is closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Closes the polygon. Idempotent.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Opens the polygon. Idempotent.
    pub fn open(&mut self) {
        self.closed = false;
    }

    /// Replaces the point sequence with its convex hull. Irreversible.
    pub fn hull(&mut self) {
        self.points = hull_2d::convex_hull(&self.points);
    }
}

impl Shape for Polygon {
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
