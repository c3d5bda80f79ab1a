use std::fmt;

use crate::math::{Scalar, Vector};

/// A ray: a position and a direction vector.
///
/// Arithmetic, normalization and rotation act on the direction only; the
/// left-hand ray's position is carried through unchanged. The `*_pos`
/// methods are the position-side counterparts and leave the direction alone.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray<T, const N: usize> {
    /// Origin.
    pub pos: Vector<T, N>,
    /// Direction; not required to be unit length.
    pub vec: Vector<T, N>,
}

impl<T: Scalar, const N: usize> Ray<T, N> {
    /// Creates a ray at `pos` pointing along `vec`.
    pub const fn new(pos: Vector<T, N>, vec: Vector<T, N>) -> Self {
        Self { pos, vec }
    }

    /// A ray at the origin pointing along `vec`.
    pub fn from_vector(vec: Vector<T, N>) -> Self {
        Self::new(Vector::zero(), vec)
    }

    /// A ray at the origin whose direction has every lane set to `f`.
    pub fn splat(f: T) -> Self {
        Self::from_vector(Vector::splat(f))
    }

    /// Zero position, zero direction.
    pub fn zero() -> Self {
        Self::from_vector(Vector::zero())
    }

    /// Same position, unit direction.
    pub fn normalize(self) -> Self {
        self.map_parts(Vector::normalize)
    }

    /// Magnitude of the direction.
    pub fn length(self) -> T {
        self.vec.length()
    }

    /// `pos + vec * t`
    pub fn point_at(self, t: T) -> Vector<T, N> {
        self.vec.fma(Vector::splat(t), self.pos)
    }

    /// Moves the origin by `offset`, keeping the direction.
    pub fn translate(self, offset: Vector<T, N>) -> Self {
        self.add_pos(offset)
    }

    /// Sum of the position lanes.
    pub fn sum_pos(self) -> T {
        self.pos.sum()
    }

    /// Sum of the direction lanes.
    pub fn sum_vec(self) -> T {
        self.vec.sum()
    }

    /// `pos + p`
    pub fn add_pos(self, p: Vector<T, N>) -> Self {
        self.map_pos(|pos| pos + p)
    }

    /// `pos + f` on every lane.
    pub fn add_pos_scalar(self, f: T) -> Self {
        self.map_pos(|pos| pos.add_scalar(f))
    }

    /// `pos - p`
    pub fn sub_pos(self, p: Vector<T, N>) -> Self {
        self.map_pos(|pos| pos - p)
    }

    /// `pos - f` on every lane.
    pub fn sub_pos_scalar(self, f: T) -> Self {
        self.map_pos(|pos| pos.sub_scalar(f))
    }

    /// `p - pos`
    pub fn rsub_pos(self, p: Vector<T, N>) -> Self {
        self.map_pos(|pos| p - pos)
    }

    /// `f - pos` on every lane.
    pub fn rsub_pos_scalar(self, f: T) -> Self {
        self.map_pos(|pos| pos.rsub_scalar(f))
    }

    /// `pos * p`
    pub fn mul_pos(self, p: Vector<T, N>) -> Self {
        self.map_pos(|pos| pos * p)
    }

    /// `pos * f`
    pub fn mul_pos_scalar(self, f: T) -> Self {
        self.map_pos(|pos| pos.mul_scalar(f))
    }

    /// `pos / p`
    pub fn div_pos(self, p: Vector<T, N>) -> Self {
        self.map_pos(|pos| pos / p)
    }

    /// `pos / f`
    pub fn div_pos_scalar(self, f: T) -> Self {
        self.map_pos(|pos| pos.div_scalar(f))
    }

    /// `p / pos`
    pub fn rdiv_pos(self, p: Vector<T, N>) -> Self {
        self.map_pos(|pos| p / pos)
    }

    /// `f / pos` on every lane.
    pub fn rdiv_pos_scalar(self, f: T) -> Self {
        self.map_pos(|pos| pos.rdiv_scalar(f))
    }

    /// Lanewise mean of the position with `p`.
    pub fn avg_pos(self, p: Vector<T, N>) -> Self {
        self.map_pos(|pos| pos.avg(p))
    }

    /// Lanewise mean of the position with a broadcast scalar.
    pub fn avg_pos_scalar(self, f: T) -> Self {
        self.map_pos(|pos| pos.avg_scalar(f))
    }

    /// `true` when both position and direction match within `epsilon`.
    pub fn approx_eq(self, other: Self, epsilon: T) -> bool {
        super::pair_approx_eq((self.pos, self.vec), (other.pos, other.vec), epsilon)
    }

    fn map_parts(self, f: impl Fn(Vector<T, N>) -> Vector<T, N>) -> Self {
        Self::new(self.pos, f(self.vec))
    }

    fn map_pos(self, f: impl FnOnce(Vector<T, N>) -> Vector<T, N>) -> Self {
        Self::new(f(self.pos), self.vec)
    }

    fn zip_parts(self, other: Self, f: impl Fn(Vector<T, N>, Vector<T, N>) -> Vector<T, N>) -> Self {
        Self::new(self.pos, f(self.vec, other.vec))
    }
}

impl<T: Scalar> Ray<T, 2> {
    /// Rotates the direction counter-clockwise by `degrees`.
    pub fn rotate(self, degrees: T) -> Self {
        self.map_parts(|v| v.rotate(degrees))
    }

    /// Rotates the direction counter-clockwise by `radians`.
    pub fn rotate_radians(self, radians: T) -> Self {
        self.map_parts(|v| v.rotate_radians(radians))
    }
}

impl<T: Scalar> Ray<T, 3> {
    /// Rotates the direction about an axis-angle `(axis, degrees)`.
    pub fn rotate(self, axis_angle: Vector<T, 4>) -> Self {
        self.map_parts(|v| v.rotate(axis_angle))
    }

    /// Rotates the direction by a unit quaternion.
    pub fn rotate_quat(self, quat: Vector<T, 4>) -> Self {
        self.map_parts(|v| v.rotate_quat(quat))
    }
}

lanewise_ops!(Ray);

impl<T: Scalar, const N: usize> Default for Ray<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Ray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.pos, self.vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type R2 = Ray<f64, 2>;
    type R3 = Ray<f64, 3>;
    type V2 = Vector<f64, 2>;
    type V3 = Vector<f64, 3>;

    #[test]
    fn test_arithmetic_keeps_left_position() {
        let a = R2::new(V2::new(1.0, 1.0), V2::new(2.0, 4.0));
        let b = R2::new(V2::new(9.0, 9.0), V2::new(1.0, 2.0));
        assert_eq!(a + b, R2::new(a.pos, V2::new(3.0, 6.0)));
        assert_eq!(a - b, R2::new(a.pos, V2::new(1.0, 2.0)));
        assert_eq!(a * b, R2::new(a.pos, V2::new(2.0, 8.0)));
        assert_eq!(a / b, R2::new(a.pos, V2::new(2.0, 2.0)));
    }

    #[test]
    fn test_vector_and_scalar_quadrants() {
        let r = R2::new(V2::new(5.0, 5.0), V2::new(2.0, 4.0));
        let v = V2::new(1.0, 2.0);
        assert_eq!((r + v).vec, V2::new(3.0, 6.0));
        assert_eq!((r / v).vec, V2::new(2.0, 2.0));
        assert_eq!((v - r).vec, V2::new(-1.0, -2.0));
        assert_eq!((v / r).vec, V2::new(0.5, 0.5));
        assert_eq!((r * 0.5).vec, V2::new(1.0, 2.0));
        assert_eq!((8.0 / r).vec, V2::new(4.0, 2.0));
        assert_eq!((1.0 - r).vec, V2::new(-1.0, -3.0));
        assert_eq!(r.avg_scalar(0.0).vec, V2::new(1.0, 2.0));
        assert_eq!(r.avg_vector(V2::zero()).vec, V2::new(1.0, 2.0));
        assert_eq!(r.avg(R2::zero()), R2::new(r.pos, V2::new(1.0, 2.0)));
        for out in [r + v, v - r, 8.0 / r, r.avg_scalar(1.0)] {
            assert_eq!(out.pos, r.pos);
        }
    }

    #[test]
    fn test_position_arithmetic_keeps_direction() {
        let dir = V2::new(3.0, 4.0);
        let r = R2::new(V2::new(2.0, 8.0), dir);
        let p = V2::new(2.0, 4.0);

        assert_eq!(r.add_pos(p), R2::new(V2::new(4.0, 12.0), dir));
        assert_eq!(r.add_pos_scalar(1.0).pos, V2::new(3.0, 9.0));
        assert_eq!(r.sub_pos(p).pos, V2::new(0.0, 4.0));
        assert_eq!(r.sub_pos_scalar(2.0).pos, V2::new(0.0, 6.0));
        assert_eq!(r.rsub_pos(p).pos, V2::new(0.0, -4.0));
        assert_eq!(r.rsub_pos_scalar(10.0).pos, V2::new(8.0, 2.0));
        assert_eq!(r.mul_pos(p).pos, V2::new(4.0, 32.0));
        assert_eq!(r.mul_pos_scalar(0.5).pos, V2::new(1.0, 4.0));
        assert_eq!(r.div_pos(p).pos, V2::new(1.0, 2.0));
        assert_eq!(r.div_pos_scalar(2.0).pos, V2::new(1.0, 4.0));
        assert_eq!(r.rdiv_pos(p).pos, V2::new(1.0, 0.5));
        assert_eq!(r.rdiv_pos_scalar(16.0).pos, V2::new(8.0, 2.0));
        assert_eq!(r.avg_pos(p), R2::new(V2::new(2.0, 6.0), dir));
        assert_eq!(r.avg_pos_scalar(0.0).pos, V2::new(1.0, 4.0));
        assert_eq!(r.translate(p), r.add_pos(p));

        for moved in [r.add_pos(p), r.mul_pos_scalar(3.0), r.rdiv_pos(p)] {
            assert_eq!(moved.vec, dir);
        }
    }

    #[test]
    fn test_component_sums() {
        let r = R3::new(V3::new(1.0, 2.0, 3.0), V3::new(-1.0, 0.5, 0.5));
        assert_eq!(r.sum_pos(), 6.0);
        assert_eq!(r.sum_vec(), 0.0);
    }

    #[test]
    fn test_normalize_length() {
        let r = R3::new(V3::splat(7.0), V3::new(0.0, 3.0, 4.0));
        assert_eq!(r.length(), 5.0);
        let n = r.normalize();
        assert_eq!(n.pos, r.pos);
        assert!(n.vec.approx_eq(V3::new(0.0, 0.6, 0.8), 1e-12));
    }

    #[test]
    fn test_approx_eq_compares_both_fields() {
        let r = R2::new(V2::new(1.0, 2.0), V2::new(3.0, 4.0));
        assert!(r.approx_eq(r, 1e-9));
        assert!(!r.approx_eq(r.translate(V2::new(1.0, 0.0)), 1e-9));
        assert!(!r.approx_eq(r + V2::new(1.0, 0.0), 1e-9));
    }

    #[test]
    fn test_rotation_touches_direction_only() {
        let r = R2::new(V2::new(4.0, 4.0), V2::new(1.0, 0.0)).rotate(90.0);
        assert_eq!(r.pos, V2::new(4.0, 4.0));
        assert!(r.vec.approx_eq(V2::new(0.0, 1.0), 1e-12));

        let r3 = R3::new(V3::splat(1.0), V3::new(1.0, 0.0, 0.0))
            .rotate(Vector::<f64, 4>::new(0.0, 0.0, 1.0, 90.0));
        assert_eq!(r3.pos, V3::splat(1.0));
        assert!(r3.vec.approx_eq(V3::new(0.0, 1.0, 0.0), 1e-12));
    }

    #[test]
    fn test_point_at_and_constructors() {
        let r = R2::new(V2::new(1.0, 1.0), V2::new(2.0, 0.0));
        assert_eq!(r.point_at(1.5), V2::new(4.0, 1.0));
        assert_eq!(R2::splat(3.0), R2::new(V2::zero(), V2::splat(3.0)));
        assert_eq!(R2::from_vector(V2::new(1.0, 2.0)).pos, V2::zero());
    }

    #[test]
    fn test_display() {
        let r = Ray::<f32, 2>::new(Vector::<f32, 2>::new(1.0, 2.0), Vector::<f32, 2>::new(3.0, 4.0));
        assert_eq!(r.to_string(), "(1.000000, 2.000000)\n(3.000000, 4.000000)");
    }
}
