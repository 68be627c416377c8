//! Fixed 3x3 matrix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use super::Vector3;
use crate::dense::Matrix;
use crate::error::{MatrizError, Result};

/// A 3x3 real matrix stored as three [`Vector3`] rows.
///
/// Renders as `[[a, b, c], [d, e, f], [g, h, i]]`. Converts to and from the
/// dense [`Matrix`] core, and delegates its inverse to it.
///
/// # Examples
///
/// ```
/// use matriz::Matrix3;
///
/// let m = Matrix3::IDENTITY;
/// assert_eq!(m.det(), 1.0);
/// assert_eq!(m.to_string(), "[[1, 0, 0], [0, 1, 0], [0, 0, 1]]");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Matrix3 {
    rows: [Vector3; 3],
}

impl Matrix3 {
    /// The identity matrix.
    pub const IDENTITY: Matrix3 = Matrix3::from_rows(Vector3::UNIT_X, Vector3::UNIT_Y, Vector3::UNIT_Z);
    /// The all-zeros matrix.
    pub const ZERO: Matrix3 = Matrix3::from_rows(Vector3::ZERO, Vector3::ZERO, Vector3::ZERO);
    /// The all-ones matrix.
    pub const ONES: Matrix3 = Matrix3::from_rows(
        Vector3::new(1.0, 1.0, 1.0),
        Vector3::new(1.0, 1.0, 1.0),
        Vector3::new(1.0, 1.0, 1.0),
    );

    /// Creates a matrix from three row vectors.
    #[must_use]
    pub const fn from_rows(r0: Vector3, r1: Vector3, r2: Vector3) -> Self {
        Self { rows: [r0, r1, r2] }
    }

    /// Creates a matrix from nine values in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub const fn new(
        m00: f64,
        m01: f64,
        m02: f64,
        m10: f64,
        m11: f64,
        m12: f64,
        m20: f64,
        m21: f64,
        m22: f64,
    ) -> Self {
        Self::from_rows(
            Vector3::new(m00, m01, m02),
            Vector3::new(m10, m11, m12),
            Vector3::new(m20, m21, m22),
        )
    }

    /// Returns row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > 2`.
    #[must_use]
    pub fn row(&self, index: usize) -> Vector3 {
        self.rows[index]
    }

    /// Returns column `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > 2`.
    #[must_use]
    pub fn col(&self, index: usize) -> Vector3 {
        Vector3::new(self.rows[0][index], self.rows[1][index], self.rows[2][index])
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_rows(self.col(0), self.col(1), self.col(2))
    }

    /// Determinant, by the closed-form rule of Sarrus.
    #[must_use]
    pub fn det(&self) -> f64 {
        let [r0, r1, r2] = self.rows;
        r0.x() * r1.y() * r2.z() + r0.y() * r1.z() * r2.x() + r0.z() * r1.x() * r2.y()
            - r0.z() * r1.y() * r2.x()
            - r0.x() * r1.z() * r2.y()
            - r0.y() * r1.x() * r2.z()
    }

    /// Inverse, delegated to the dense core's adjugate formula.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::Singular`] if the determinant is zero.
    pub fn inverse(&self) -> Result<Self> {
        let inverse = Matrix::from(*self).inv()?;
        Ok(Self::from_dense(&inverse))
    }

    fn from_dense(m: &Matrix) -> Self {
        let mut out = Self::ZERO;
        for row in 0..3 {
            for col in 0..3 {
                out[row][col] = m[(row, col)];
            }
        }
        out
    }
}

impl From<Matrix3> for Matrix {
    fn from(m: Matrix3) -> Self {
        let mut out = Matrix::zeros(3, 3);
        for row in 0..3 {
            for col in 0..3 {
                out[(row, col)] = m[row][col];
            }
        }
        out
    }
}

impl TryFrom<&Matrix> for Matrix3 {
    type Error = MatrizError;

    fn try_from(m: &Matrix) -> Result<Self> {
        if m.shape() != (3, 3) {
            return Err(MatrizError::shape_mismatch((3, 3), m.shape()));
        }
        Ok(Self::from_dense(m))
    }
}

impl Index<usize> for Matrix3 {
    type Output = Vector3;

    fn index(&self, index: usize) -> &Vector3 {
        &self.rows[index]
    }
}

impl IndexMut<usize> for Matrix3 {
    fn index_mut(&mut self, index: usize) -> &mut Vector3 {
        &mut self.rows[index]
    }
}

impl Add for Matrix3 {
    type Output = Matrix3;

    fn add(self, rhs: Self) -> Self {
        Self::from_rows(
            self.rows[0] + rhs.rows[0],
            self.rows[1] + rhs.rows[1],
            self.rows[2] + rhs.rows[2],
        )
    }
}

impl Sub for Matrix3 {
    type Output = Matrix3;

    fn sub(self, rhs: Self) -> Self {
        Self::from_rows(
            self.rows[0] - rhs.rows[0],
            self.rows[1] - rhs.rows[1],
            self.rows[2] - rhs.rows[2],
        )
    }
}

/// Matrix product.
impl Mul for Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        for i in 0..3 {
            let row = self.row(i);
            for j in 0..3 {
                out[i][j] = row.dot(&rhs.col(j));
            }
        }
        out
    }
}

/// Matrix-vector product.
impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        Vector3::new(
            self.rows[0].dot(&rhs),
            self.rows[1].dot(&rhs),
            self.rows[2].dot(&rhs),
        )
    }
}

impl Mul<f64> for Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: f64) -> Self {
        Self::from_rows(self.rows[0] * rhs, self.rows[1] * rhs, self.rows[2] * rhs)
    }
}

impl Mul<Matrix3> for f64 {
    type Output = Matrix3;

    fn mul(self, rhs: Matrix3) -> Matrix3 {
        rhs * self
    }
}

impl Div<f64> for Matrix3 {
    type Output = Matrix3;

    fn div(self, rhs: f64) -> Self {
        Self::from_rows(self.rows[0] / rhs, self.rows[1] / rhs, self.rows[2] / rhs)
    }
}

impl AddAssign for Matrix3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Matrix3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Matrix3 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl DivAssign<f64> for Matrix3 {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[[{}, {}, {}], [{}, {}, {}], [{}, {}, {}]]",
            self.rows[0][0],
            self.rows[0][1],
            self.rows[0][2],
            self.rows[1][0],
            self.rows[1][1],
            self.rows[1][2],
            self.rows[2][0],
            self.rows[2][1],
            self.rows[2][2],
        )
    }
}

#[cfg(test)]
#[path = "matrix3_tests.rs"]
mod tests;
