//! Dense matrix type over f64.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use crate::error::{MatrizError, Result};

/// A dense real-valued matrix (row-major storage).
///
/// Instances have value semantics: every matrix owns its backing storage and
/// copies are independent. The 0x0 "null" matrix is a valid state and is what
/// [`Matrix::new`] and [`Default`] produce.
///
/// # Examples
///
/// ```
/// use matriz::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
///     .expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates the null (0x0) matrix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an n x n matrix of zeros.
    #[must_use]
    pub fn zero(n: usize) -> Self {
        Self::zeros(n, n)
    }

    /// Creates a rows x cols matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an n x n identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zero(n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Creates a matrix from a flat buffer of values in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidSize`] if the buffer length does not
    /// equal `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrizError::InvalidSize {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns true if the matrix has as many rows as columns.
    ///
    /// The null matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrizError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Reads the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::OutOfRange`] if either index is outside the
    /// matrix bounds.
    pub fn elem(&self, row: usize, col: usize) -> Result<f64> {
        self.check_bounds(row, col)?;
        Ok(self.data[self.offset(row, col)])
    }

    /// Returns a mutable reference to the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::OutOfRange`] if either index is outside the
    /// matrix bounds.
    pub fn elem_mut(&mut self, row: usize, col: usize) -> Result<&mut f64> {
        self.check_bounds(row, col)?;
        let offset = self.offset(row, col);
        Ok(&mut self.data[offset])
    }

    /// Transposes the matrix.
    ///
    /// Works on rectangular and null matrices alike; the transpose of the
    /// null matrix is the null matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for row in 0..self.rows {
            for col in 0..self.cols {
                data[col * self.rows + row] = self.data[self.offset(row, col)];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if the shapes differ.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        if self.shape() != rhs.shape() {
            return Err(MatrizError::shape_mismatch(self.shape(), rhs.shape()));
        }
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if the shapes differ.
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        if self.shape() != rhs.shape() {
            return Err(MatrizError::shape_mismatch(self.shape(), rhs.shape()));
        }
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(a, b)| a - b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Matrix product.
    ///
    /// The full result buffer is materialized before any state is replaced,
    /// so `a.matmul(&a)` is sound.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] unless
    /// `self.cols() == rhs.rows()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::Matrix;
    ///
    /// let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let b = Matrix::from_vec(3, 2, vec![-1.0, 2.0, -3.0, 4.0, -5.0, 6.0]).unwrap();
    /// let c = a.matmul(&b).unwrap();
    /// assert_eq!(c.as_slice(), &[-22.0, 28.0, -49.0, 64.0]);
    /// ```
    pub fn matmul(&self, rhs: &Self) -> Result<Self> {
        if self.cols != rhs.rows {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{}x_", self.cols),
                actual: format!("{}x{}", rhs.rows, rhs.cols),
            });
        }
        let mut data = vec![0.0; self.rows * rhs.cols];
        for row in 0..self.rows {
            for col in 0..rhs.cols {
                let mut sum = 0.0;
                for i in 0..self.cols {
                    sum += self.data[self.offset(row, i)] * rhs.data[rhs.offset(i, col)];
                }
                data[row * rhs.cols + col] = sum;
            }
        }
        Ok(Self {
            data,
            rows: self.rows,
            cols: rhs.cols,
        })
    }

    /// In-place element-wise addition.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if the shapes differ;
    /// `self` is left unmodified in that case.
    pub fn add_assign(&mut self, rhs: &Self) -> Result<()> {
        if self.shape() != rhs.shape() {
            return Err(MatrizError::shape_mismatch(self.shape(), rhs.shape()));
        }
        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a += b;
        }
        Ok(())
    }

    /// In-place element-wise subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if the shapes differ;
    /// `self` is left unmodified in that case.
    pub fn sub_assign(&mut self, rhs: &Self) -> Result<()> {
        if self.shape() != rhs.shape() {
            return Err(MatrizError::shape_mismatch(self.shape(), rhs.shape()));
        }
        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a -= b;
        }
        Ok(())
    }

    /// In-place matrix product: replaces `self` with `self * rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] unless
    /// `self.cols() == rhs.rows()`; `self` is left unmodified in that case.
    pub fn matmul_assign(&mut self, rhs: &Self) -> Result<()> {
        *self = self.matmul(rhs)?;
        Ok(())
    }

    /// Minor of the cell (row, col): the determinant of the submatrix formed
    /// by deleting that row and column.
    ///
    /// For a 1x1 matrix the minor of the single cell is 1 by the
    /// cofactor-expansion convention.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NotSquare`] if the matrix is not square.
    pub fn cminor(&self, row: usize, col: usize) -> Result<f64> {
        if !self.is_square() {
            return Err(MatrizError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows == 1 {
            return Ok(1.0);
        }
        let n = self.rows - 1;
        let mut minor = Self::zeros(n, n);
        for minor_row in 0..n {
            let src_row = if minor_row < row { minor_row } else { minor_row + 1 };
            for minor_col in 0..n {
                let src_col = if minor_col < col { minor_col } else { minor_col + 1 };
                minor.data[minor_row * n + minor_col] = self.data[self.offset(src_row, src_col)];
            }
        }
        minor.det()
    }

    /// Determinant by recursive cofactor expansion along row 0.
    ///
    /// The 1x1 and 2x2 cases use their closed forms; larger matrices recurse
    /// through [`Matrix::cminor`], which makes the cost factorial in the
    /// matrix size.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NotSquare`] if the matrix is not square.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::Matrix;
    ///
    /// let m = Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 4.0, 1.0, 6.0, 7.0, 8.0, 1.0]).unwrap();
    /// assert_eq!(m.det().unwrap(), 104.0);
    /// ```
    pub fn det(&self) -> Result<f64> {
        if !self.is_square() {
            return Err(MatrizError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows == 1 {
            return Ok(self.data[0]);
        }
        if self.rows == 2 {
            return Ok(self.data[0] * self.data[3] - self.data[1] * self.data[2]);
        }
        let mut determinant = 0.0;
        for col in 0..self.cols {
            let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
            determinant += self.data[col] * self.cminor(0, col)? * sign;
        }
        Ok(determinant)
    }

    /// Inverse by the adjugate formula: the transposed cofactor matrix
    /// divided by the determinant.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NotSquare`] if the matrix is not square, and
    /// [`MatrizError::Singular`] if its determinant is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![4.0, 7.0, 2.0, 6.0]).unwrap();
    /// let product = m.matmul(&m.inv().unwrap()).unwrap();
    /// for i in 0..2 {
    ///     for j in 0..2 {
    ///         let expected = if i == j { 1.0 } else { 0.0 };
    ///         assert!((product.elem(i, j).unwrap() - expected).abs() < 1e-9);
    ///     }
    /// }
    /// ```
    pub fn inv(&self) -> Result<Self> {
        if !self.is_square() {
            return Err(MatrizError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let determinant = self.det()?;
        if determinant == 0.0 {
            return Err(MatrizError::Singular { det: determinant });
        }
        if self.rows == 1 {
            return Ok(Self {
                data: vec![1.0 / self.data[0]],
                rows: 1,
                cols: 1,
            });
        }
        let mut cofactor = Self::zeros(self.rows, self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
                let idx = cofactor.offset(row, col);
                cofactor.data[idx] = self.cminor(row, col)? * sign;
            }
        }
        Ok(cofactor.transpose() * (1.0 / determinant))
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}

// Scalar forms are infallible. The scalar-on-the-left forms are defined
// from the matrix-first forms and match them bit for bit.

impl Add<f64> for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: f64) -> Matrix {
        Matrix {
            data: self.data.iter().map(|v| v + rhs).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl Add<f64> for Matrix {
    type Output = Matrix;

    fn add(mut self, rhs: f64) -> Matrix {
        self += rhs;
        self
    }
}

impl Add<&Matrix> for f64 {
    type Output = Matrix;

    fn add(self, rhs: &Matrix) -> Matrix {
        rhs + self
    }
}

impl Add<Matrix> for f64 {
    type Output = Matrix;

    fn add(self, rhs: Matrix) -> Matrix {
        rhs + self
    }
}

impl Sub<f64> for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: f64) -> Matrix {
        Matrix {
            data: self.data.iter().map(|v| v - rhs).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl Sub<f64> for Matrix {
    type Output = Matrix;

    fn sub(mut self, rhs: f64) -> Matrix {
        self -= rhs;
        self
    }
}

impl Sub<&Matrix> for f64 {
    type Output = Matrix;

    fn sub(self, rhs: &Matrix) -> Matrix {
        (rhs - self) * -1.0
    }
}

impl Sub<Matrix> for f64 {
    type Output = Matrix;

    fn sub(self, rhs: Matrix) -> Matrix {
        (rhs - self) * -1.0
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix {
        Matrix {
            data: self.data.iter().map(|v| v * rhs).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, rhs: f64) -> Matrix {
        self *= rhs;
        self
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        rhs * self
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        rhs * self
    }
}

impl AddAssign<f64> for Matrix {
    fn add_assign(&mut self, rhs: f64) {
        for v in &mut self.data {
            *v += rhs;
        }
    }
}

impl SubAssign<f64> for Matrix {
    fn sub_assign(&mut self, rhs: f64) {
        for v in &mut self.data {
            *v -= rhs;
        }
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, rhs: f64) {
        for v in &mut self.data {
            *v *= rhs;
        }
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
