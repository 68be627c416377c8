//! Error types for matriz operations.
//!
//! Every failure is detected synchronously at the violated precondition and
//! returned to the caller; failing operations leave their operands untouched.

use std::fmt;

/// Main error type for matriz operations.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::NotSquare { rows: 3, cols: 2 };
/// assert!(err.to_string().contains("3x2"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum MatrizError {
    /// Constructor received a value buffer whose length does not match
    /// the requested dimensions.
    InvalidSize {
        /// Requested number of rows
        rows: usize,
        /// Requested number of columns
        cols: usize,
        /// Length of the supplied buffer
        len: usize,
    },

    /// Element access outside the matrix bounds.
    OutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Matrix height
        rows: usize,
        /// Matrix width
        cols: usize,
    },

    /// Operand shapes are incompatible for the requested operation.
    DimensionMismatch {
        /// Expected shape description
        expected: String,
        /// Actual shape found
        actual: String,
    },

    /// Determinant, inverse, or minor requested on a non-square matrix.
    NotSquare {
        /// Matrix height
        rows: usize,
        /// Matrix width
        cols: usize,
    },

    /// Matrix is singular (zero determinant, non-invertible).
    Singular {
        /// The determinant value
        det: f64,
    },
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::InvalidSize { rows, cols, len } => {
                write!(
                    f,
                    "invalid size: {len} values for a {rows}x{cols} matrix ({} expected)",
                    rows * cols
                )
            }
            MatrizError::OutOfRange {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "element ({row}, {col}) out of range for a {rows}x{cols} matrix"
                )
            }
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            MatrizError::NotSquare { rows, cols } => {
                write!(f, "operation requires a square matrix, got {rows}x{cols}")
            }
            MatrizError::Singular { det } => {
                write!(f, "singular matrix: determinant = {det}, cannot invert")
            }
        }
    }
}

impl std::error::Error for MatrizError {}

impl MatrizError {
    /// Create a dimension mismatch error from two shapes.
    #[must_use]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;
