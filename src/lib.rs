//! Matriz: dense matrix algebra in pure Rust.
//!
//! Matriz provides an arbitrary-size dense matrix over `f64` with checked
//! arithmetic, transpose, recursive cofactor determinants, and adjugate-based
//! inverses, plus a fixed-size 3D geometry family built on top of it.
//!
//! The determinant and inverse follow the classical cofactor expansion, which
//! is factorial in the matrix size. That is the intended contract: keep
//! inputs small (the test surface goes up to 4x4) or cap sizes externally.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let m = Matrix::from_vec(3, 3, vec![
//!     1.0, 2.0, 3.0,
//!     4.0, 1.0, 6.0,
//!     7.0, 8.0, 1.0,
//! ]).unwrap();
//!
//! assert_eq!(m.det().unwrap(), 104.0);
//!
//! // The inverse composes back to the identity.
//! let round_trip = m.matmul(&m.inv().unwrap()).unwrap();
//! for i in 0..3 {
//!     for j in 0..3 {
//!         let expected = if i == j { 1.0 } else { 0.0 };
//!         assert!((round_trip.elem(i, j).unwrap() - expected).abs() < 1e-3);
//!     }
//! }
//! ```
//!
//! # Modules
//!
//! - [`dense`]: the arbitrary-size [`Matrix`] core
//! - [`geometry`]: fixed-size [`Vector3`], [`Matrix3`], and [`Isometry`]
//! - [`error`]: the crate error type and `Result` alias
//! - [`prelude`]: convenience re-exports

pub mod dense;
pub mod error;
pub mod geometry;
pub mod prelude;

pub use dense::Matrix;
pub use error::{MatrizError, Result};
pub use geometry::{Isometry, Matrix3, Vector3};
