//! # Geometry Helpers
//!
//! Thin wrappers over `nalgebra::Vector3<f32>` in arena units (uu).
//!
//! Every direction-based computation goes through [`angle_between`], which
//! refuses vectors shorter than [`MIN_MAGNITUDE`] instead of producing NaN.

use nalgebra::Vector3;

/// Arena-space vector (x = lateral, y = goal-to-goal axis, z = height).
pub type Vec3 = Vector3<f32>;

/// Vectors at or below this length have no usable direction.
pub const MIN_MAGNITUDE: f32 = 0.1;

#[inline]
pub fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

#[inline]
pub fn zero() -> Vec3 {
    Vec3::zeros()
}

#[inline]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    (a - b).norm()
}

/// Project onto the ground plane (z = 0).
#[inline]
pub fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, 0.0)
}

/// Unit vector, or `None` when the input is too short to have a direction.
#[inline]
pub fn direction(v: Vec3) -> Option<Vec3> {
    v.try_normalize(MIN_MAGNITUDE)
}

/// Angle in radians between two vectors, `None` if either is degenerate.
pub fn angle_between(a: Vec3, b: Vec3) -> Option<f32> {
    let a = direction(a)?;
    let b = direction(b)?;
    Some(a.dot(&b).clamp(-1.0, 1.0).acos())
}
