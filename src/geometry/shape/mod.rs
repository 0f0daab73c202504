mod circle;
mod ellipse;
mod polygon;
mod regular;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use polygon::Polygon;
pub use regular::RegularPolygon;

use crate::error::Result;

use super::{Point, Transform};

/// Trait for shapes represented by their ordered defining points.
///
/// The point sequence is owned exclusively by the shape and its order is
/// meaningful: it defines edges for polygons and the defining-point roles
/// for ellipses and circles.
pub trait Shape {
    /// Returns a read-only view of the ordered point sequence.
    fn points(&self) -> &[Point];

    /// Replaces every owned point with its image under `transform`, in place.
    ///
    /// # Errors
    ///
    /// Returns an error only if the transform maps a point to infinity,
    /// which cannot happen for a validated affine transform.
    fn transform(&mut self, transform: &Transform) -> Result<()>;
}
