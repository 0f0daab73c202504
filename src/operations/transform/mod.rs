mod reflect;
mod rotate;
mod scale;
mod shear;
mod translate;

pub use reflect::Reflect;
pub use rotate::Rotate;
pub use scale::Scale;
pub use shear::Shear;
pub use translate::Translate;

use crate::geometry::{Point, Transform};

/// Conjugates a freshly built matrix about the factory's pivot, if one was
/// given. Centering happens after the raw (possibly inverted) matrix is
/// assembled.
fn centered(raw: Transform, pivot: Option<Point>) -> Transform {
    match pivot {
        Some(p) => raw.center(p.x(), p.y()),
        None => raw,
    }
}
