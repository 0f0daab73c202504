use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::error::{AffinisError, PointError, Result};
use crate::math::{approx_eq, Vector3};

use super::Transform;

/// A point of the affine plane, stored in normalized homogeneous form.
///
/// Construction normalizes the homogeneous triple so that `w = 1`; a point
/// at infinity (`w` within tolerance of zero) is rejected, so every live
/// value is a finite plane point. Equality and ordering are tolerance-based:
/// coordinates closer than the global tolerance compare equal, and ordering
/// is lexicographic over `(x, y)`.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point from affine coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a point from a homogeneous triple, normalizing so `w = 1`.
    ///
    /// # Errors
    ///
    /// Returns [`PointError::Infinite`] if `w` is within tolerance of zero.
    pub fn from_homogeneous(x: f64, y: f64, w: f64) -> Result<Self> {
        if approx_eq(w, 0.0) {
            return Err(PointError::Infinite { w }.into());
        }
        Ok(Self { x: x / w, y: y / w })
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns the homogeneous coordinate triple `[x, y, 1]`.
    #[must_use]
    pub fn homogeneous(&self) -> Vector3 {
        Vector3::new(self.x, self.y, 1.0)
    }

    /// Applies a transformation to this point in place.
    ///
    /// # Errors
    ///
    /// Returns [`PointError::Infinite`] if the image is a point at infinity;
    /// this cannot happen for a validated affine transform.
    pub fn apply(&mut self, transform: &Transform) -> Result<()> {
        *self = transform.apply(self)?;
        Ok(())
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !approx_eq(self.x, other.x) {
            return self.x.partial_cmp(&other.x);
        }
        if !approx_eq(self.y, other.y) {
            return self.y.partial_cmp(&other.y);
        }
        Some(Ordering::Equal)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<f64> for Point {
    type Output = Self;

    fn add(self, rhs: f64) -> Self {
        Self::new(self.x + rhs, self.y + rhs)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl AddAssign<f64> for Point {
    fn add_assign(&mut self, rhs: f64) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<f64> for Point {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self {
        Self::new(self.x - rhs, self.y - rhs)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl SubAssign<f64> for Point {
    fn sub_assign(&mut self, rhs: f64) {
        *self = *self - rhs;
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<f64> for Point {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Div<f64> for Point {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl DivAssign<f64> for Point {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl fmt::Display for Point {
    /// Formats the point as `[x, y, w]` with two decimal digits,
    /// e.g. `[1.00, 2.00, 1.00]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2}, {:.2}, {:.2}]", self.x, self.y, 1.0)
    }
}

impl FromStr for Point {
    type Err = AffinisError;

    /// Parses the bracketed grammar produced by [`Display`](fmt::Display):
    /// two or three comma-separated numbers, two meaning `w = 1`.
    fn from_str(s: &str) -> Result<Self> {
        let body = s
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| PointError::Parse(s.to_owned()))?;

        let coords = body
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| PointError::Parse(s.to_owned()))?;

        match coords[..] {
            [x, y] => Ok(Self::new(x, y)),
            [x, y, w] => Self::from_homogeneous(x, y, w),
            _ => Err(PointError::Parse(s.to_owned()).into()),
        }
    }
}
