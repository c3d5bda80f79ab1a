//! Transform builders.
//!
//! All builders use the column-vector convention: a point is transformed by
//! `m.mul_vector(p)`, translation lives in the last column, and positive
//! angles rotate counter-clockwise about the axis when looking down it
//! towards the origin. This matches [`Vector::rotate`](crate::math::Vector)
//! for both 2D and 3D vectors.

use super::Matrix;
use crate::math::{Scalar, Vector, rotation, to_radians};

impl<T: Scalar> Matrix<T, 2> {
    /// Counter-clockwise rotation by `degrees`.
    pub fn rotation(degrees: T) -> Self {
        let r = to_radians(degrees);
        let (s, c) = (r.sin(), r.cos());
        Self::new(c, -s, s, c)
    }
}

impl<T: Scalar> Matrix<T, 3> {
    /// Rotation about an axis-angle `(axis, degrees)`.
    ///
    /// Built from the equivalent quaternion, so the axis should be unit length.
    pub fn rotation(axis_angle: Vector<T, 4>) -> Self {
        let q = rotation::axis_angle_to_quat(axis_angle);
        let [x, y, z, w] = q.0;
        let two = T::TWO;
        Self::new(
            T::ONE - two * (y * y + z * z),
            two * (x * y - z * w),
            two * (x * z + y * w),
            two * (x * y + z * w),
            T::ONE - two * (x * x + z * z),
            two * (y * z - x * w),
            two * (x * z - y * w),
            two * (y * z + x * w),
            T::ONE - two * (x * x + y * y),
        )
    }
}

impl<T: Scalar> Matrix<T, 4> {
    /// Translation by `(tx, ty, tz)`.
    pub fn translation(tx: T, ty: T, tz: T) -> Self {
        let mut m = Self::identity();
        m.0[0].0[3] = tx;
        m.0[1].0[3] = ty;
        m.0[2].0[3] = tz;
        m
    }

    /// Non-uniform scale along the three axes.
    pub fn scaling(sx: T, sy: T, sz: T) -> Self {
        let mut m = Self::identity();
        m.0[0].0[0] = sx;
        m.0[1].0[1] = sy;
        m.0[2].0[2] = sz;
        m
    }

    /// Rotation about the x axis by `degrees`.
    #[rustfmt::skip]
    pub fn rotation_x(degrees: T) -> Self {
        let (s, c) = sin_cos(degrees);
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(
            l, o, o, o,
            o, c, -s, o,
            o, s, c, o,
            o, o, o, l,
        )
    }

    /// Rotation about the y axis by `degrees`.
    #[rustfmt::skip]
    pub fn rotation_y(degrees: T) -> Self {
        let (s, c) = sin_cos(degrees);
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(
            c, o, s, o,
            o, l, o, o,
            -s, o, c, o,
            o, o, o, l,
        )
    }

    /// Rotation about the z axis by `degrees`.
    #[rustfmt::skip]
    pub fn rotation_z(degrees: T) -> Self {
        let (s, c) = sin_cos(degrees);
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(
            c, -s, o, o,
            s, c, o, o,
            o, o, l, o,
            o, o, o, l,
        )
    }
}

fn sin_cos<T: Scalar>(degrees: T) -> (T, T) {
    let r = to_radians(degrees);
    (r.sin(), r.cos())
}
