//! Axis-angle and quaternion rotations.
//!
//! An axis-angle is a four-lane vector `(x, y, z, degrees)`. A quaternion is
//! `(x, y, z, w)` with `w` the real part. Axes are used as given; callers
//! that need a unit quaternion must pass a unit axis.

use crate::math::{Scalar, Vector, to_degrees, to_radians};

/// Converts an axis-angle `(axis, degrees)` into a quaternion.
///
/// # Arguments
///
/// * `axis_angle` - Rotation axis in the first three lanes, angle in degrees in the fourth
///
/// # Returns
///
/// `(axis * sin(h), cos(h))` with `h` half the angle in radians
///
/// # Example
/// ```
/// use sol::math::{Vector, rotation::axis_angle_to_quat};
///
/// let q = axis_angle_to_quat(Vector::<f64, 4>::new(0.0, 0.0, 1.0, 180.0));
/// assert!(q.approx_eq(Vector::<f64, 4>::new(0.0, 0.0, 1.0, 0.0), 1e-12));
/// ```
pub fn axis_angle_to_quat<T: Scalar>(axis_angle: Vector<T, 4>) -> Vector<T, 4> {
    let half = to_radians(axis_angle.w()) * T::HALF;
    axis_angle
        .xyz()
        .mul_scalar(half.sin())
        .extend(half.cos())
}

/// Quaternion for a rotation of `degrees` about `axis`.
pub fn quat_from_axis<T: Scalar>(axis: Vector<T, 3>, degrees: T) -> Vector<T, 4> {
    axis_angle_to_quat(axis.extend(degrees))
}

/// Converts a unit quaternion back into an axis-angle `(axis, degrees)`.
///
/// The identity quaternion has no defined axis; its axis lanes come back as
/// NaN and the angle as `0`.
pub fn quat_to_axis_angle<T: Scalar>(quat: Vector<T, 4>) -> Vector<T, 4> {
    let w = quat.w();
    let s = (T::ONE - w * w).sqrt();
    let angle = to_degrees(T::TWO * w.acos());
    quat.xyz().div_scalar(s).extend(angle)
}

/// Rotates `v` by the unit quaternion `quat`.
pub fn rotate_by_quat<T: Scalar>(v: Vector<T, 3>, quat: Vector<T, 4>) -> Vector<T, 3> {
    let qv = quat.xyz();
    let t = qv.cross(v).mul_scalar(T::TWO);
    v + t.mul_scalar(quat.w()) + qv.cross(t)
}

/// Rotates `v` about an axis-angle `(axis, degrees)`.
pub fn rotate_by_axis_angle<T: Scalar>(v: Vector<T, 3>, axis_angle: Vector<T, 4>) -> Vector<T, 3> {
    rotate_by_quat(v, axis_angle_to_quat(axis_angle))
}

/// Hamilton product `a * b`: the rotation `b` followed by `a`.
pub fn quat_mul<T: Scalar>(a: Vector<T, 4>, b: Vector<T, 4>) -> Vector<T, 4> {
    let (av, aw) = (a.xyz(), a.w());
    let (bv, bw) = (b.xyz(), b.w());
    let v = bv.mul_scalar(aw) + av.mul_scalar(bw) + av.cross(bv);
    v.extend(aw * bw - av.dot(bv))
}

/// Conjugate `(-x, -y, -z, w)`. For a unit quaternion this is the inverse.
pub fn quat_conjugate<T: Scalar>(quat: Vector<T, 4>) -> Vector<T, 4> {
    (-quat.xyz()).extend(quat.w())
}

/// The no-op rotation `(0, 0, 0, 1)`.
pub fn quat_identity<T: Scalar>() -> Vector<T, 4> {
    Vector::<T, 4>::new(T::ZERO, T::ZERO, T::ZERO, T::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    type V3 = Vector<f64, 3>;
    type V4 = Vector<f64, 4>;

    #[test]
    fn test_quarter_turn_about_z() {
        let r = rotate_by_axis_angle(V3::new(1.0, 0.0, 0.0), V4::new(0.0, 0.0, 1.0, 90.0));
        assert!(r.approx_eq(V3::new(0.0, 1.0, 0.0), 1e-12));
    }

    #[test]
    fn test_axis_angle_round_trip() {
        let axis = V3::new(1.0, 2.0, -2.0).normalize();
        let q = quat_from_axis(axis, 75.0);
        assert_relative_eq!(q.length(), 1.0, epsilon = 1e-12);

        let back = quat_to_axis_angle(q);
        assert!(back.xyz().approx_eq(axis, 1e-9));
        assert_relative_eq!(back.w(), 75.0, epsilon = 1e-9);
    }

    #[test]
    fn test_identity_quaternion() {
        let id = quat_identity::<f64>();
        let v = V3::new(3.0, -4.0, 5.0);
        assert_eq!(rotate_by_quat(v, id), v);

        let aa = quat_to_axis_angle(id);
        assert!(aa.xyz().to_array().iter().all(|lane| lane.is_nan()));
        assert_eq!(aa.w(), 0.0);
    }

    #[test]
    fn test_quat_mul_composes() {
        let a = quat_from_axis(V3::new(0.0, 0.0, 1.0), 90.0);
        let b = quat_from_axis(V3::new(1.0, 0.0, 0.0), 90.0);
        let v = V3::new(0.0, 1.0, 0.0);
        let sequential = rotate_by_quat(rotate_by_quat(v, b), a);
        let composed = rotate_by_quat(v, quat_mul(a, b));
        assert!(composed.approx_eq(sequential, 1e-12));
        assert!(composed.approx_eq(V3::new(0.0, 0.0, 1.0), 1e-12));
    }

    #[test]
    fn test_conjugate_undoes_rotation() {
        let q = quat_from_axis(V3::new(0.0, 0.6, 0.8), 33.0);
        let v = V3::new(1.0, 2.0, 3.0);
        let back = rotate_by_quat(rotate_by_quat(v, q), quat_conjugate(q));
        assert!(back.approx_eq(v, 1e-12));
        assert!(quat_mul(q, quat_conjugate(q)).approx_eq(quat_identity(), 1e-12));
    }
}
