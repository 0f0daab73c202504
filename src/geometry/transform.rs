use std::fmt;
use std::ops::{Mul, MulAssign};

use crate::error::{Result, TransformError};
use crate::math::{approx_eq, matrix_approx_eq, Matrix3};

use super::Point;

/// An affine transformation of the plane in homogeneous coordinates.
///
/// The matrix is 3x3 with the last row held at `[0, 0, 1]` within tolerance;
/// the invariant is checked at construction, before the value is observable.
/// Composition follows the matrix-vector convention: applying `A * B` to a
/// point applies `B` first, then `A`.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    mat: Matrix3,
}

impl Transform {
    /// Creates a transform from a full 3x3 matrix.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::NotAffine`] if the last row is not
    /// `[0, 0, 1]` within tolerance.
    pub fn new(mat: Matrix3) -> Result<Self> {
        let (r0, r1, r2) = (mat[(2, 0)], mat[(2, 1)], mat[(2, 2)]);
        if !approx_eq(r0, 0.0) || !approx_eq(r1, 0.0) || !approx_eq(r2, 1.0) {
            return Err(TransformError::NotAffine { r0, r1, r2 }.into());
        }
        Ok(Self { mat })
    }

    /// Creates a transform from three row vectors.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::NotAffine`] if the last row is not
    /// `[0, 0, 1]` within tolerance.
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Result<Self> {
        let [r0, r1, r2] = rows;
        Self::new(Matrix3::new(
            r0[0], r0[1], r0[2], r1[0], r1[1], r1[2], r2[0], r2[1], r2[2],
        ))
    }

    /// Creates a transform from the two affine rows, appending the
    /// homogeneous row `[0, 0, 1]` itself.
    #[must_use]
    pub fn from_affine(rows: [[f64; 3]; 2]) -> Self {
        let [r0, r1] = rows;
        Self {
            mat: Matrix3::new(r0[0], r0[1], r0[2], r1[0], r1[1], r1[2], 0.0, 0.0, 1.0),
        }
    }

    /// Returns the identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Returns the underlying matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix3 {
        &self.mat
    }

    /// Computes the inverse transform in closed form.
    ///
    /// The fixed last row reduces inversion to the 2x2 cofactors of the
    /// affine part:
    ///
    /// ```text
    ///     |a   b   c|                        | e  -b   bf-ce|
    /// T = |d   e   f|,  inv(T) = 1/(ae-bd) * |-d   a   cd-af|
    ///     |0   0   1|                        | 0   0     1  |
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Singular`] if `a*e - b*d` is within
    /// tolerance of zero.
    #[allow(clippy::many_single_char_names)]
    pub fn inverse(&self) -> Result<Self> {
        let (a, b, c) = (self.mat[(0, 0)], self.mat[(0, 1)], self.mat[(0, 2)]);
        let (d, e, f) = (self.mat[(1, 0)], self.mat[(1, 1)], self.mat[(1, 2)]);

        let det = a * e - b * d;
        if approx_eq(det, 0.0) {
            return Err(TransformError::Singular { det }.into());
        }

        let k = 1.0 / det;
        Ok(Self {
            mat: Matrix3::new(
                k * e,
                k * -b,
                k * (b * f - c * e),
                k * -d,
                k * a,
                k * (c * d - a * f),
                0.0,
                0.0,
                1.0,
            ),
        })
    }

    /// Inverts this transform in place.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Singular`] if the transform has no inverse;
    /// the receiver is left unchanged in that case.
    pub fn invert_in_place(&mut self) -> Result<()> {
        *self = self.inverse()?;
        Ok(())
    }

    /// Raises the transform to an integer power by repeated squaring.
    ///
    /// A zero exponent yields the identity; a negative exponent inverts the
    /// base first and exponentiates by the absolute value.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Singular`] if the exponent is negative and
    /// the base is singular.
    pub fn powi(&self, exponent: i32) -> Result<Self> {
        let mut base = if exponent < 0 { self.inverse()? } else { *self };
        let mut result = Self::identity();
        let mut remaining = exponent.unsigned_abs();

        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            remaining >>= 1;
        }

        Ok(result)
    }

    /// Conjugates the transform so it acts about the pivot `(x, y)` instead
    /// of the origin: `T(x, y) * self * T(-x, -y)`.
    ///
    /// A pivot at the origin (within tolerance) returns the transform
    /// unchanged, skipping the composition.
    #[must_use]
    pub fn center(&self, x: f64, y: f64) -> Self {
        if approx_eq(x, 0.0) && approx_eq(y, 0.0) {
            return *self;
        }
        let forward = Self {
            mat: translation(x, y),
        };
        let back = Self {
            mat: translation(-x, -y),
        };
        forward * *self * back
    }

    /// Applies the transform to a point: matrix-vector product in
    /// homogeneous coordinates followed by re-normalization.
    ///
    /// # Errors
    ///
    /// Returns [`PointError::Infinite`](crate::error::PointError::Infinite)
    /// if the image is a point at infinity; this cannot happen for a
    /// validated affine transform.
    pub fn apply(&self, point: &Point) -> Result<Point> {
        let image = self.mat * point.homogeneous();
        Point::from_homogeneous(image.x, image.y, image.z)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            mat: Matrix3::identity(),
        }
    }
}

/// Translation matrix for the centering conjugation.
fn translation(dx: f64, dy: f64) -> Matrix3 {
    Matrix3::new(1.0, 0.0, dx, 0.0, 1.0, dy, 0.0, 0.0, 1.0)
}

impl Mul for Transform {
    type Output = Self;

    /// Standard 3x3 matrix product; the affine invariant is closed under
    /// composition, so the result needs no revalidation.
    fn mul(self, rhs: Self) -> Self {
        Self {
            mat: self.mat * rhs.mat,
        }
    }
}

impl MulAssign for Transform {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl PartialEq for Transform {
    fn eq(&self, other: &Self) -> bool {
        matrix_approx_eq(&self.mat, &other.mat)
    }
}

impl fmt::Display for Transform {
    /// Formats the matrix as bracketed rows, one per line, with two decimal
    /// digits. Diagnostic output only, never persisted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..3 {
            if row != 0 {
                write!(f, "\n ")?;
            }
            write!(
                f,
                "[{:.2}, {:.2}, {:.2}]",
                self.mat[(row, 0)],
                self.mat[(row, 1)],
                self.mat[(row, 2)]
            )?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::AffinisError;

    fn sample() -> Transform {
        Transform::from_affine([[2.0, 1.0, 3.0], [0.0, 4.0, -2.0]])
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Transform::default(), Transform::identity());
        let p = Point::new(3.0, -7.0);
        assert_eq!(Transform::identity().apply(&p).unwrap(), p);
    }

    #[test]
    fn identity_composes_to_identity() {
        assert_eq!(
            Transform::identity() * Transform::identity(),
            Transform::identity()
        );
    }

    #[test]
    fn last_row_is_validated() {
        let bad = Matrix3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.5, 0.0, 1.0);
        assert!(matches!(
            Transform::new(bad),
            Err(AffinisError::Transform(TransformError::NotAffine { .. }))
        ));

        let good = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 0.0, 0.0, 1.0);
        assert!(Transform::new(good).is_ok());
    }

    #[test]
    fn last_row_tolerates_rounding() {
        assert!(Transform::from_rows([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [1e-6, -1e-6, 1.0 + 1e-6],
        ])
        .is_ok());
    }

    #[test]
    fn from_affine_appends_homogeneous_row() {
        let t = sample();
        let explicit =
            Transform::from_rows([[2.0, 1.0, 3.0], [0.0, 4.0, -2.0], [0.0, 0.0, 1.0]]).unwrap();
        assert_eq!(t, explicit);
    }

    #[test]
    fn inverse_involution() {
        let t = sample();
        assert_eq!(t.inverse().unwrap().inverse().unwrap(), t);
    }

    #[test]
    fn inverse_cancellation() {
        let t = sample();
        let inv = t.inverse().unwrap();
        assert_eq!(t * inv, Transform::identity());
        assert_eq!(inv * t, Transform::identity());
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let t = Transform::from_affine([[1.0, 2.0, 0.0], [2.0, 4.0, 0.0]]);
        assert!(matches!(
            t.inverse(),
            Err(AffinisError::Transform(TransformError::Singular { .. }))
        ));
    }

    #[test]
    fn invert_in_place_replaces_receiver() {
        let mut t = sample();
        t.invert_in_place().unwrap();
        assert_eq!(t, sample().inverse().unwrap());
    }

    #[test]
    fn power_zero_is_identity() {
        assert_eq!(sample().powi(0).unwrap(), Transform::identity());
    }

    #[test]
    fn power_one_is_the_base() {
        assert_eq!(sample().powi(1).unwrap(), sample());
    }

    #[test]
    fn powers_compose_additively() {
        let t = Transform::from_affine([[1.0, 0.5, 1.0], [0.0, 1.0, -2.0]]);
        let product = t.powi(2).unwrap() * t.powi(3).unwrap();
        assert_eq!(product, t.powi(5).unwrap());
    }

    #[test]
    fn negative_power_is_power_of_inverse() {
        let t = sample();
        let direct = t.powi(-2).unwrap();
        let via_inverse = t.inverse().unwrap().powi(2).unwrap();
        assert_eq!(direct, via_inverse);
    }

    #[test]
    fn negative_power_of_singular_fails() {
        let t = Transform::from_affine([[1.0, 2.0, 0.0], [2.0, 4.0, 0.0]]);
        assert!(t.powi(-1).is_err());
        assert!(t.powi(2).is_ok());
    }

    #[test]
    fn equality_is_tolerant() {
        let t = sample();
        let mut close = *t.matrix();
        close[(0, 2)] += 1e-6;
        assert_eq!(t, Transform::new(close).unwrap());

        let mut far = *t.matrix();
        far[(0, 2)] += 1e-4;
        assert_ne!(t, Transform::new(far).unwrap());
    }

    #[test]
    fn center_at_origin_is_a_no_op() {
        let t = sample();
        assert_eq!(t.center(0.0, 0.0), t);
        assert_eq!(t.center(1e-6, -1e-6), t);
    }

    #[test]
    fn center_conjugates_with_translations() {
        let t = sample();
        let expected = Transform::from_affine([[1.0, 0.0, 2.0], [0.0, 1.0, 5.0]])
            * t
            * Transform::from_affine([[1.0, 0.0, -2.0], [0.0, 1.0, -5.0]]);
        assert_eq!(t.center(2.0, 5.0), expected);
    }

    #[test]
    fn apply_follows_composition_order() {
        let rotate = Transform::from_affine([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0]]);
        let translate = Transform::from_affine([[1.0, 0.0, 1.0], [0.0, 1.0, 0.0]]);
        let p = Point::new(1.0, 0.0);

        // A * B applies B first, then A.
        let composed = (rotate * translate).apply(&p).unwrap();
        let stepwise = rotate
            .apply(&translate.apply(&p).unwrap())
            .unwrap();
        assert_eq!(composed, stepwise);
        assert_eq!(composed, Point::new(0.0, 2.0));
    }

    #[test]
    fn display_uses_bracketed_rows() {
        let rendered = Transform::identity().to_string();
        assert_eq!(
            rendered,
            "[[1.00, 0.00, 0.00]\n [0.00, 1.00, 0.00]\n [0.00, 0.00, 1.00]]"
        );
    }
}
