use std::fmt;

use crate::math::{Scalar, Vector};

/// Axis-aligned bounding box.
///
/// An AABB is a box whose faces are aligned with the coordinate axes. It is
/// defined by two corners: `lower` holds the minimum on every axis and
/// `upper` the maximum. Nothing enforces `lower <= upper`; an inverted box
/// simply contains no points.
///
/// Arithmetic applies to both corners, so `b + v` translates the box and
/// `b * f` scales it about the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox<T, const N: usize> {
    /// Minimum corner.
    pub lower: Vector<T, N>,
    /// Maximum corner.
    pub upper: Vector<T, N>,
}

impl<T: Scalar, const N: usize> BoundingBox<T, N> {
    /// Creates a box from its minimum and maximum corners.
    ///
    /// # Arguments
    ///
    /// * `lower` - The minimum corner
    /// * `upper` - The maximum corner
    ///
    /// # Example
    /// ```
    /// use sol::geometry::BoundingBox;
    /// use sol::math::Vector;
    ///
    /// let bbox = BoundingBox::new(Vector::<f64, 3>::zero(), Vector::<f64, 3>::new(1.0, 2.0, 3.0));
    /// assert_eq!(bbox.depth(), 3.0);
    /// ```
    pub const fn new(lower: Vector<T, N>, upper: Vector<T, N>) -> Self {
        Self { lower, upper }
    }

    /// A box from the origin to `upper`.
    pub fn from_vector(upper: Vector<T, N>) -> Self {
        Self::new(Vector::zero(), upper)
    }

    /// A box from the origin to a corner with every lane set to `f`.
    pub fn splat(f: T) -> Self {
        Self::from_vector(Vector::splat(f))
    }

    /// Both corners at the origin.
    pub fn zero() -> Self {
        Self::from_vector(Vector::zero())
    }

    /// The smallest box containing every point in `points`.
    ///
    /// An empty slice yields the zero box.
    pub fn from_points(points: &[Vector<T, N>]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::zero();
        };
        rest.iter().fold(Self::new(*first, *first), |b, p| {
            Self::new(b.lower.min(*p), b.upper.max(*p))
        })
    }

    /// Center point, `(lower + upper) * 0.5` per axis.
    pub fn center(&self) -> Vector<T, N> {
        self.lower.avg(self.upper)
    }

    /// Size along every axis, `upper - lower`.
    pub fn extent(&self) -> Vector<T, N> {
        self.upper - self.lower
    }

    /// `true` when `lower <= point <= upper` on every axis.
    ///
    /// Points on a face or corner count as inside.
    pub fn contains(&self, point: Vector<T, N>) -> bool {
        (0..N).all(|i| self.lower[i] <= point[i] && point[i] <= self.upper[i])
    }

    /// Expands this box to fully contain another box.
    ///
    /// # Arguments
    ///
    /// * `other` - Another box to be included in this one
    ///
    /// # Effect
    ///
    /// The current box is modified in place to become the minimum bounding
    /// box that contains both the original box and the provided one.
    pub fn expand(&mut self, other: &Self) {
        self.lower = self.lower.min(other.lower);
        self.upper = self.upper.max(other.upper);
    }

    /// Checks if this box overlaps another box.
    ///
    /// Two boxes intersect if they overlap on every axis. Touching faces
    /// count as an intersection.
    ///
    /// # Algorithm
    ///
    /// Separating axis test: if any axis has the two intervals disjoint, the
    /// boxes cannot intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        for i in 0..N {
            if self.upper[i] < other.lower[i] || self.lower[i] > other.upper[i] {
                return false;
            }
        }
        true
    }

    /// `true` when both corners match within `epsilon`.
    pub fn approx_eq(self, other: Self, epsilon: T) -> bool {
        super::pair_approx_eq((self.lower, self.upper), (other.lower, other.upper), epsilon)
    }

    fn map_parts(self, f: impl Fn(Vector<T, N>) -> Vector<T, N>) -> Self {
        Self::new(f(self.lower), f(self.upper))
    }

    fn zip_parts(self, other: Self, f: impl Fn(Vector<T, N>, Vector<T, N>) -> Vector<T, N>) -> Self {
        Self::new(f(self.lower, other.lower), f(self.upper, other.upper))
    }
}

impl<T: Scalar> BoundingBox<T, 2> {
    /// `upper.x - lower.x`
    pub fn width(&self) -> T {
        self.upper.x() - self.lower.x()
    }

    /// `upper.y - lower.y`
    pub fn height(&self) -> T {
        self.upper.y() - self.lower.y()
    }

    /// `width * height`
    pub fn area(&self) -> T {
        self.width() * self.height()
    }
}

impl<T: Scalar> BoundingBox<T, 3> {
    /// `upper.x - lower.x`
    pub fn width(&self) -> T {
        self.upper.x() - self.lower.x()
    }

    /// `upper.y - lower.y`
    pub fn height(&self) -> T {
        self.upper.y() - self.lower.y()
    }

    /// `upper.z - lower.z`
    pub fn depth(&self) -> T {
        self.upper.z() - self.lower.z()
    }

    /// Calculates the surface area of the box.
    ///
    /// # Formula
    ///
    /// SA = 2 * (width * height + height * depth + depth * width)
    pub fn surface_area(&self) -> T {
        let (dx, dy, dz) = (self.width(), self.height(), self.depth());
        T::TWO * (dx * dy + dy * dz + dz * dx)
    }
}

lanewise_ops!(BoundingBox);

impl<T: Scalar, const N: usize> Default for BoundingBox<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> fmt::Display for BoundingBox<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type B2 = BoundingBox<f64, 2>;
    type B3 = BoundingBox<f64, 3>;
    type V2 = Vector<f64, 2>;
    type V3 = Vector<f64, 3>;

    #[test]
    fn test_contains_is_inclusive() {
        let b = B2::new(V2::zero(), V2::splat(10.0));
        assert!(b.contains(V2::new(5.0, 5.0)));
        assert!(!b.contains(V2::new(15.0, 5.0)));
        assert!(!b.contains(V2::new(5.0, -0.1)));
        assert!(b.contains(V2::new(0.0, 0.0)));
        assert!(b.contains(V2::new(10.0, 3.0)));
    }

    #[test]
    fn test_center_extent_dimensions() {
        let b = B3::new(V3::new(1.0, 2.0, 3.0), V3::new(3.0, 6.0, 9.0));
        assert_eq!(b.center(), V3::new(2.0, 4.0, 6.0));
        assert_eq!(b.extent(), V3::new(2.0, 4.0, 6.0));
        assert_eq!((b.width(), b.height(), b.depth()), (2.0, 4.0, 6.0));
        assert_eq!(b.surface_area(), 2.0 * (8.0 + 24.0 + 12.0));

        let r = B2::from_vector(V2::new(3.0, 2.0));
        assert_eq!(r.area(), 6.0);
    }

    #[test]
    fn test_expand() {
        let mut a = B3::new(V3::zero(), V3::splat(1.0));
        let b = B3::new(V3::new(-1.0, 0.5, 0.5), V3::new(0.5, 0.5, 3.0));
        a.expand(&b);
        assert_eq!(a, B3::new(V3::new(-1.0, 0.0, 0.0), V3::new(1.0, 1.0, 3.0)));
    }

    #[test]
    fn test_intersects() {
        let a = B2::new(V2::zero(), V2::splat(2.0));
        assert!(a.intersects(&B2::new(V2::splat(1.0), V2::splat(3.0))));
        assert!(a.intersects(&B2::new(V2::new(2.0, 0.0), V2::new(4.0, 2.0))));
        assert!(!a.intersects(&B2::new(V2::new(2.5, 0.0), V2::new(4.0, 2.0))));
    }

    #[test]
    fn test_from_points() {
        let pts = [V2::new(1.0, 5.0), V2::new(-2.0, 3.0), V2::new(4.0, -1.0)];
        let b = B2::from_points(&pts);
        assert_eq!(b, B2::new(V2::new(-2.0, -1.0), V2::new(4.0, 5.0)));
        assert!(pts.iter().all(|p| b.contains(*p)));
        assert_eq!(B2::from_points(&[]), B2::zero());
    }

    #[test]
    fn test_arithmetic_on_both_corners() {
        let b = B2::new(V2::new(2.0, 2.0), V2::new(4.0, 8.0));
        assert_eq!(b + V2::splat(1.0), B2::new(V2::splat(3.0), V2::new(5.0, 9.0)));
        assert_eq!(b / 2.0, B2::new(V2::splat(1.0), V2::new(2.0, 4.0)));
        assert_eq!(b.avg(B2::zero()), B2::new(V2::splat(1.0), V2::new(2.0, 4.0)));
        assert_eq!(8.0 - b, B2::new(V2::splat(6.0), V2::new(4.0, 0.0)));
    }
}
