//! The numeric kernel: scalars, vectors, matrices and rotations.
//!
//! Every type here is generic over a [`Scalar`] width and a lane count, and is
//! laid out exactly like the plain array it wraps, so buffers of vectors or
//! matrices can be cast to bytes and uploaded as-is.
//!
//! # Module Organization
//!
//! - [`scalar`] holds the [`Scalar`] trait and width-correct free functions
//! - [`vec`] holds [`Vector`] (re-exported at root level)
//! - [`mat`] holds [`Matrix`] (re-exported at root level)
//! - [`rotation`] converts between axis-angles and quaternions
//! - [`simd`] holds the lane backends vectors route their arithmetic through
//! - Angle conversions and physical constants are provided at root level

pub mod mat;
pub mod rotation;
pub mod scalar;
pub mod simd;
pub mod vec;

pub use mat::Matrix;
pub use scalar::{Scalar, abs, acos, asin, atan, atan2, clamp, cos, pow, sin, sqrt, tan};
pub use vec::Vector;

use crate::Float;

/// Two-lane vector.
pub type Vec2<T = Float> = Vector<T, 2>;
/// Three-lane vector.
pub type Vec3<T = Float> = Vector<T, 3>;
/// Four-lane vector.
pub type Vec4<T = Float> = Vector<T, 4>;
/// Quaternion `(x, y, z, w)` with `w` the real part.
pub type Quat<T = Float> = Vector<T, 4>;
/// Axis-angle `(x, y, z, degrees)`.
pub type AxisAngle<T = Float> = Vector<T, 4>;

/// 2x2 matrix.
pub type Mat2<T = Float> = Matrix<T, 2>;
/// 3x3 matrix.
pub type Mat3<T = Float> = Matrix<T, 3>;
/// 4x4 matrix.
pub type Mat4<T = Float> = Matrix<T, 4>;

/// Standard gravity in m/s².
pub const GRAVITY: Float = 9.806_65;

/// Speed of light in m/s, rounded to the nearest thousand.
pub const SPEED_OF_LIGHT: Float = 299_792_000.0;

/// Converts degrees to radians.
///
/// No wrapping is applied: `540°` maps to `3π`, not `π`.
///
/// # Arguments
///
/// * `degrees` - The angle in degrees
///
/// # Returns
///
/// `degrees * π / 180` at the input's width
///
/// # Example
/// ```
/// use sol::math::to_radians;
///
/// let r = to_radians(180.0_f64);
/// assert!((r - std::f64::consts::PI).abs() < 1e-12);
///
/// // No wrapping
/// let r = to_radians(540.0_f64);
/// assert!((r - 3.0 * std::f64::consts::PI).abs() < 1e-12);
/// ```
#[inline]
pub fn to_radians<T: Scalar>(degrees: T) -> T {
    degrees * (T::PI / T::from_f64(180.0))
}

/// Converts radians to degrees.
///
/// # Arguments
///
/// * `radians` - The angle in radians
///
/// # Returns
///
/// `radians * 180 / π` at the input's width
///
/// # Example
/// ```
/// use sol::math::to_degrees;
///
/// let d = to_degrees(std::f64::consts::PI);
/// assert!((d - 180.0).abs() < 1e-9);
/// ```
#[inline]
pub fn to_degrees<T: Scalar>(radians: T) -> T {
    radians * (T::from_f64(180.0) / T::PI)
}
