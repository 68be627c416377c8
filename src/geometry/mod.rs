//! Fixed-size 3D geometry family (Vector3, Matrix3, Isometry).
//!
//! These convenience types sit on top of the dense core: `Matrix3` converts
//! to and from [`crate::Matrix`] and delegates its inverse to it.

mod isometry;
mod matrix3;
mod vector3;

pub use isometry::Isometry;
pub use matrix3::Matrix3;
pub use vector3::Vector3;
