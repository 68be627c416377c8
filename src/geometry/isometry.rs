//! Rigid 3D transform (rotation + translation).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

use super::{Matrix3, Vector3};

/// A rigid transform: a rotation followed by a translation.
///
/// Renders as `[T: <vec>, R:<mat>]`.
///
/// # Examples
///
/// ```
/// use matriz::{Isometry, Vector3};
///
/// let t = Isometry::from_translation(Vector3::new(1.0, 0.0, 0.0));
/// let p = t.transform(&Vector3::new(0.0, 2.0, 0.0));
/// assert_eq!(p, Vector3::new(1.0, 2.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Isometry {
    rotation: Matrix3,
    translation: Vector3,
}

impl Isometry {
    /// Creates a transform from a translation and a rotation.
    #[must_use]
    pub const fn new(translation: Vector3, rotation: Matrix3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Creates a pure translation.
    #[must_use]
    pub const fn from_translation(translation: Vector3) -> Self {
        Self::new(translation, Matrix3::IDENTITY)
    }

    /// Creates a pure rotation of `angle` radians around `axis`.
    ///
    /// `axis` must be a unit vector. For the principal axes this produces
    /// the textbook single-axis rotation matrices exactly.
    #[must_use]
    pub fn rotate_around(axis: Vector3, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let (kx, ky, kz) = (axis.x(), axis.y(), axis.z());
        let rotation = Matrix3::new(
            c + kx * kx * t,
            kx * ky * t - kz * s,
            kx * kz * t + ky * s,
            ky * kx * t + kz * s,
            c + ky * ky * t,
            ky * kz * t - kx * s,
            kz * kx * t - ky * s,
            kz * ky * t + kx * s,
            c + kz * kz * t,
        );
        Self::new(Vector3::ZERO, rotation)
    }

    /// Creates a pure rotation from Euler angles, applied as
    /// `Rz(yaw) * Ry(pitch) * Rx(roll)`.
    #[must_use]
    pub fn from_euler_angles(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self::rotate_around(Vector3::UNIT_Z, yaw)
            * Self::rotate_around(Vector3::UNIT_Y, pitch)
            * Self::rotate_around(Vector3::UNIT_X, roll)
    }

    /// Returns the rotation part.
    #[must_use]
    pub fn rotation(&self) -> &Matrix3 {
        &self.rotation
    }

    /// Returns the translation part.
    #[must_use]
    pub fn translation(&self) -> &Vector3 {
        &self.translation
    }

    /// Applies the transform to a point: `R * p + t`.
    #[must_use]
    pub fn transform(&self, point: &Vector3) -> Vector3 {
        self.rotation * *point + self.translation
    }

    /// Composes two transforms: applying the result equals applying `rhs`
    /// first and `self` second.
    #[must_use]
    pub fn compose(&self, rhs: &Self) -> Self {
        Self::new(
            self.translation + self.rotation * rhs.translation,
            self.rotation * rhs.rotation,
        )
    }

    /// The inverse transform: rotation transposed, translation rotated back
    /// and negated.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.transpose();
        Self::new(rotation * self.translation * -1.0, rotation)
    }
}

impl Default for Isometry {
    fn default() -> Self {
        Self::new(Vector3::ZERO, Matrix3::IDENTITY)
    }
}

impl Mul for Isometry {
    type Output = Isometry;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl Mul<Vector3> for Isometry {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        self.transform(&rhs)
    }
}

impl fmt::Display for Isometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[T: {}, R:{}]", self.translation, self.rotation)
    }
}

#[cfg(test)]
#[path = "isometry_tests.rs"]
mod tests;
