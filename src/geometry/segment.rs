use std::fmt;

use crate::math::{Scalar, Vector};

/// A line segment from `orig` to `dest`.
///
/// Arithmetic applies to both endpoints.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment<T, const N: usize> {
    /// Start point.
    pub orig: Vector<T, N>,
    /// End point.
    pub dest: Vector<T, N>,
}

impl<T: Scalar, const N: usize> Segment<T, N> {
    /// Creates a segment between two points.
    pub const fn new(orig: Vector<T, N>, dest: Vector<T, N>) -> Self {
        Self { orig, dest }
    }

    /// A segment from the origin to `dest`.
    pub fn from_vector(dest: Vector<T, N>) -> Self {
        Self::new(Vector::zero(), dest)
    }

    /// A segment from the origin to a point with every lane set to `f`.
    pub fn splat(f: T) -> Self {
        Self::from_vector(Vector::splat(f))
    }

    /// Both endpoints at the origin.
    pub fn zero() -> Self {
        Self::from_vector(Vector::zero())
    }

    /// `dest - orig`
    pub fn direction(self) -> Vector<T, N> {
        self.dest - self.orig
    }

    /// Distance between the endpoints.
    pub fn length(self) -> T {
        self.direction().length()
    }

    /// Point halfway between the endpoints.
    pub fn midpoint(self) -> Vector<T, N> {
        self.orig.avg(self.dest)
    }

    /// `true` when both endpoints match within `epsilon`.
    pub fn approx_eq(self, other: Self, epsilon: T) -> bool {
        super::pair_approx_eq((self.orig, self.dest), (other.orig, other.dest), epsilon)
    }

    fn map_parts(self, f: impl Fn(Vector<T, N>) -> Vector<T, N>) -> Self {
        Self::new(f(self.orig), f(self.dest))
    }

    fn zip_parts(self, other: Self, f: impl Fn(Vector<T, N>, Vector<T, N>) -> Vector<T, N>) -> Self {
        Self::new(f(self.orig, other.orig), f(self.dest, other.dest))
    }
}

impl<T: Scalar> Segment<T, 2> {
    /// Perp-dot of the segment direction with `point - orig`.
    fn side(self, point: Vector<T, 2>) -> T {
        self.direction().cross(point - self.orig)
    }

    /// `true` when `point` lies strictly left of the directed line `orig → dest`.
    pub fn is_left(self, point: Vector<T, 2>) -> bool {
        self.side(point) > T::ZERO
    }

    /// `true` when `point` lies strictly right of the directed line `orig → dest`.
    pub fn is_right(self, point: Vector<T, 2>) -> bool {
        self.side(point) < T::ZERO
    }

    /// `true` when `point` is within `epsilon` of the line and between the endpoints.
    ///
    /// `epsilon` bounds the perp-dot, so it scales with the segment length.
    /// A zero-length segment contains only points within `epsilon` of its
    /// single endpoint.
    pub fn contains(self, point: Vector<T, 2>, epsilon: T) -> bool {
        let dir = self.direction();
        if dir.length_squared() == T::ZERO {
            return point.distance(self.orig) < epsilon;
        }
        if self.side(point).abs() >= epsilon {
            return false;
        }
        let along = (point - self.orig).dot(dir);
        along >= T::ZERO && along <= dir.length_squared()
    }
}

lanewise_ops!(Segment);

impl<T: Scalar, const N: usize> Default for Segment<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Segment<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.orig, self.dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type S2 = Segment<f64, 2>;
    type V2 = Vector<f64, 2>;

    fn diagonal() -> S2 {
        S2::new(V2::new(0.0, 0.0), V2::new(4.0, 4.0))
    }

    #[test]
    fn test_sides() {
        let s = diagonal();
        assert!(s.is_left(V2::new(0.0, 4.0)));
        assert!(!s.is_right(V2::new(0.0, 4.0)));
        assert!(s.is_right(V2::new(4.0, 0.0)));
        assert!(!s.is_left(V2::new(2.0, 2.0)));
        assert!(!s.is_right(V2::new(2.0, 2.0)));
    }

    #[test]
    fn test_contains_requires_collinear_and_between() {
        let s = diagonal();
        assert!(s.contains(V2::new(2.0, 2.0), 1e-9));
        assert!(s.contains(V2::new(0.0, 0.0), 1e-9));
        assert!(s.contains(V2::new(4.0, 4.0), 1e-9));
        assert!(!s.contains(V2::new(5.0, 5.0), 1e-9));
        assert!(!s.contains(V2::new(-1.0, -1.0), 1e-9));
        assert!(!s.contains(V2::new(2.0, 2.5), 1e-9));
    }

    #[test]
    fn test_zero_length_segment_contains_only_its_point() {
        let p = V2::new(1.0, 1.0);
        let s = S2::new(p, p);
        assert!(s.contains(p, 1e-9));
        assert!(s.contains(V2::new(1.0, 1.0 + 1e-12), 1e-9));
        assert!(!s.contains(V2::new(100.0, -50.0), 1e-9));
        assert!(!s.contains(V2::new(1.0, 1.1), 1e-9));
    }

    #[test]
    fn test_arithmetic_moves_both_endpoints() {
        let s = diagonal();
        let v = V2::new(1.0, -1.0);
        assert_eq!(s + v, S2::new(V2::new(1.0, -1.0), V2::new(5.0, 3.0)));
        assert_eq!(s * 0.5, S2::new(V2::zero(), V2::new(2.0, 2.0)));
        assert_eq!(s - s, S2::zero());
        assert_eq!(v - s, S2::new(v, V2::new(-3.0, -5.0)));
    }

    #[test]
    fn test_div_divides() {
        let s = S2::new(V2::new(2.0, 4.0), V2::new(6.0, 8.0));
        let v = V2::new(2.0, 4.0);
        assert_eq!(s / v, S2::new(V2::new(1.0, 1.0), V2::new(3.0, 2.0)));
        assert_eq!(s / 2.0, S2::new(V2::new(1.0, 2.0), V2::new(3.0, 4.0)));
        assert_eq!(24.0 / s, S2::new(V2::new(12.0, 6.0), V2::new(4.0, 3.0)));
        assert_eq!(v / s, S2::new(V2::new(1.0, 1.0), V2::new(2.0 / 6.0, 0.5)));
    }

    #[test]
    fn test_measures() {
        let s = S2::new(V2::new(1.0, 1.0), V2::new(4.0, 5.0));
        assert_eq!(s.direction(), V2::new(3.0, 4.0));
        assert_eq!(s.length(), 5.0);
        assert_eq!(s.midpoint(), V2::new(2.5, 3.0));
        assert!(s.approx_eq(s.add_scalar(1e-12), 1e-9));
    }

    #[test]
    fn test_three_dimensional_segment() {
        let s = Segment::<f64, 3>::from_vector(Vector::<f64, 3>::new(2.0, 3.0, 6.0));
        assert_eq!(s.length(), 7.0);
        assert_eq!(s.avg_scalar(0.0).dest, Vector::<f64, 3>::new(1.0, 1.5, 3.0));
    }
}
