//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use matriz::prelude::*;
//! ```

pub use crate::dense::Matrix;
pub use crate::error::{MatrizError, Result};
pub use crate::geometry::{Isometry, Matrix3, Vector3};
