//! Operations that only make sense for one lane count.

use super::Vector;
use crate::math::{Scalar, rotation, to_radians};

impl<T: Scalar> Vector<T, 2> {
    /// Creates a 2D vector.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self([x, y])
    }

    /// First lane.
    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    /// Second lane.
    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }

    /// Perp-dot product `ax*by - ay*bx`.
    ///
    /// Positive when `other` lies counter-clockwise of `self`.
    #[inline]
    pub fn cross(self, other: Self) -> T {
        self.0[0] * other.0[1] - self.0[1] * other.0[0]
    }

    /// Signed angle from `self` to `other` in radians, `atan2(cross, dot)`.
    pub fn angle(self, other: Self) -> T {
        self.cross(other).atan2(self.dot(other))
    }

    /// Rotates counter-clockwise by `degrees`.
    pub fn rotate(self, degrees: T) -> Self {
        self.rotate_radians(to_radians(degrees))
    }

    /// Rotates counter-clockwise by `radians`.
    pub fn rotate_radians(self, radians: T) -> Self {
        let (sn, cs) = (radians.sin(), radians.cos());
        let [x, y] = self.0;
        Self([x * cs - y * sn, x * sn + y * cs])
    }

    /// Appends a `z` lane.
    pub fn extend(self, z: T) -> Vector<T, 3> {
        Vector([self.0[0], self.0[1], z])
    }

    /// Appends `z` and `w` lanes.
    pub fn extend_zw(self, z: T, w: T) -> Vector<T, 4> {
        Vector([self.0[0], self.0[1], z, w])
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Creates a 3D vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
    }

    /// First lane.
    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    /// Second lane.
    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }

    /// Third lane.
    #[inline]
    pub fn z(&self) -> T {
        self.0[2]
    }

    /// Lanes shifted cyclically: `(y, z, x)`.
    #[inline]
    pub fn yzx(self) -> Self {
        Self([self.0[1], self.0[2], self.0[0]])
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        // a × b = (a * b.yzx - a.yzx * b).yzx
        (self * other.yzx() - self.yzx() * other).yzx()
    }

    /// Unsigned angle between two vectors in radians.
    pub fn angle(self, other: Self) -> T {
        (self.dot(other) / (self.length() * other.length())).acos()
    }

    /// Rotates about an axis-angle `(axis, degrees)`.
    pub fn rotate(self, axis_angle: Vector<T, 4>) -> Self {
        rotation::rotate_by_axis_angle(self, axis_angle)
    }

    /// Rotates by a unit quaternion.
    pub fn rotate_quat(self, quat: Vector<T, 4>) -> Self {
        rotation::rotate_by_quat(self, quat)
    }

    /// Drops the `z` lane.
    pub fn xy(self) -> Vector<T, 2> {
        Vector([self.0[0], self.0[1]])
    }

    /// Appends a `w` lane.
    pub fn extend(self, w: T) -> Vector<T, 4> {
        Vector([self.0[0], self.0[1], self.0[2], w])
    }
}

impl<T: Scalar> Vector<T, 4> {
    /// Creates a 4D vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self([x, y, z, w])
    }

    /// First lane.
    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    /// Second lane.
    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }

    /// Third lane.
    #[inline]
    pub fn z(&self) -> T {
        self.0[2]
    }

    /// Fourth lane. For quaternions this is the real part.
    #[inline]
    pub fn w(&self) -> T {
        self.0[3]
    }

    /// First two lanes.
    pub fn xy(self) -> Vector<T, 2> {
        Vector([self.0[0], self.0[1]])
    }

    /// First three lanes. For quaternions this is the vector part.
    pub fn xyz(self) -> Vector<T, 3> {
        Vector([self.0[0], self.0[1], self.0[2]])
    }
}

#[cfg(test)]
mod tests {
    use crate::math::Vector;
    use approx::assert_relative_eq;

    type V2 = Vector<f64, 2>;
    type V3 = Vector<f64, 3>;
    type V4 = Vector<f64, 4>;

    #[test]
    fn test_cross_2d_sign() {
        let x = V2::new(1.0, 0.0);
        let y = V2::new(0.0, 1.0);
        assert_eq!(x.cross(y), 1.0);
        assert_eq!(y.cross(x), -1.0);
        assert_eq!(x.cross(x), 0.0);
    }

    #[test]
    fn test_angle_2d_is_signed() {
        let x = V2::new(1.0, 0.0);
        let y = V2::new(0.0, 2.0);
        assert_relative_eq!(x.angle(y), std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(y.angle(x), -std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn test_rotate_2d() {
        let r = V2::new(1.0, 0.0).rotate(90.0);
        assert!(r.approx_eq(V2::new(0.0, 1.0), 1e-12));
        let r = V2::new(0.0, 1.0).rotate_radians(std::f64::consts::PI);
        assert!(r.approx_eq(V2::new(0.0, -1.0), 1e-12));
    }

    #[test]
    fn test_cross_3d_basis() {
        let x = V3::new(1.0, 0.0, 0.0);
        let y = V3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), V3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), V3::new(0.0, 0.0, -1.0));

        let a = V3::new(2.0, -3.0, 5.0);
        let b = V3::new(-1.0, 4.0, 7.0);
        assert_eq!(a.cross(b), V3::new(-41.0, -19.0, 5.0));
        assert_eq!(a.cross(b).dot(a), 0.0);
        assert_eq!(a.cross(b).dot(b), 0.0);
    }

    #[test]
    fn test_angle_3d() {
        let a = V3::new(1.0, 0.0, 0.0);
        let b = V3::new(1.0, 1.0, 0.0);
        assert_relative_eq!(a.angle(b), std::f64::consts::FRAC_PI_4, epsilon = 1e-12);
    }

    #[test]
    fn test_dimension_casts() {
        let v2 = V2::new(1.0, 2.0);
        assert_eq!(v2.extend(3.0), V3::new(1.0, 2.0, 3.0));
        assert_eq!(v2.extend_zw(3.0, 4.0), V4::new(1.0, 2.0, 3.0, 4.0));

        let v3 = V3::new(1.0, 2.0, 3.0);
        assert_eq!(v3.xy(), v2);
        assert_eq!(v3.extend(4.0), V4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(v3.yzx(), V3::new(2.0, 3.0, 1.0));

        let v4 = V4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v4.xy(), v2);
        assert_eq!(v4.xyz(), v3);
    }
}
