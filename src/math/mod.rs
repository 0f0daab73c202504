pub mod hull_2d;

/// 3x3 transformation matrix over homogeneous plane coordinates.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Homogeneous coordinate triple.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-5;

/// Returns whether two scalars are equal within [`TOLERANCE`].
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

/// Returns whether two matrices are elementwise equal within [`TOLERANCE`].
#[must_use]
pub fn matrix_approx_eq(a: &Matrix3, b: &Matrix3) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| approx_eq(*x, *y))
}

/// Converts an angle in degrees to radians.
#[must_use]
pub fn deg_to_rad(angle: f64) -> f64 {
    angle.to_radians()
}

/// Converts an angle in radians to degrees.
#[must_use]
pub fn rad_to_deg(angle: f64) -> f64 {
    angle.to_degrees()
}
