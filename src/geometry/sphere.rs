use std::fmt;

use crate::math::{Scalar, Vector};

/// A sphere (or circle, in 2D) given by its center and radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere<T, const N: usize> {
    /// Center.
    pub pos: Vector<T, N>,
    /// Radius.
    pub radius: T,
}

impl<T: Scalar, const N: usize> Sphere<T, N> {
    /// Creates a sphere.
    pub const fn new(pos: Vector<T, N>, radius: T) -> Self {
        Self { pos, radius }
    }

    /// Centered at the origin with zero radius.
    pub fn zero() -> Self {
        Self::new(Vector::zero(), T::ZERO)
    }

    /// `true` when `point` is strictly closer to the center than the radius.
    pub fn contains(&self, point: Vector<T, N>) -> bool {
        self.pos.distance(point) < self.radius
    }

    /// `true` when two spheres overlap or touch.
    pub fn intersects(&self, other: &Self) -> bool {
        self.pos.distance(other.pos) <= self.radius + other.radius
    }

    /// Writes the center and radius to stdout, one per line.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl<T: Scalar, const N: usize> Default for Sphere<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Sphere<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.pos)?;
        self.radius.fmt_component(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type V3 = Vector<f64, 3>;

    #[test]
    fn test_contains_is_strict() {
        let s = Sphere::new(V3::new(1.0, 1.0, 1.0), 2.0);
        assert!(s.contains(V3::new(1.0, 1.0, 1.0)));
        assert!(s.contains(V3::new(2.0, 2.0, 1.0)));
        assert!(!s.contains(V3::new(3.0, 1.0, 1.0)));
        assert!(!Sphere::<f64, 3>::zero().contains(V3::zero()));
    }

    #[test]
    fn test_intersects() {
        let a = Sphere::new(V3::zero(), 1.0);
        assert!(a.intersects(&Sphere::new(V3::new(2.0, 0.0, 0.0), 1.0)));
        assert!(!a.intersects(&Sphere::new(V3::new(2.5, 0.0, 0.0), 1.0)));
    }

    #[test]
    fn test_circle_display() {
        let c = Sphere::<f32, 2>::new(Vector::<f32, 2>::new(1.0, 2.0), 0.5);
        assert_eq!(c.to_string(), "(1.000000, 2.000000)\n0.500000");
    }
}
