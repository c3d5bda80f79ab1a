//! Geometric composites built from vectors.
//!
//! # Core Components
//!
//! * [`Ray`] - A position plus a direction; arithmetic acts on the direction
//! * [`Segment`] - Two endpoints; arithmetic moves both
//! * [`BoundingBox`] - Axis-aligned box from a lower and an upper corner
//! * [`Sphere`] - A center and a radius (a circle in 2D)
//!
//! Each composite takes the same arithmetic quadrants as a vector: against
//! another composite of its kind, against a vector, against a scalar, and
//! with the vector or scalar on the left for the non-commutative `-` and `/`.

use crate::math::{Scalar, Vector};

/// Generates the arithmetic surface shared by every composite.
///
/// The type must provide `map_parts(self, f)` and `zip_parts(self, other, f)`,
/// which decide which of its vectors an operation touches.
macro_rules! lanewise_ops {
    ($name:ident) => {
        impl<T: $crate::math::Scalar, const N: usize> $name<T, N> {
            /// `f` added to the affected vectors.
            pub fn add_scalar(self, f: T) -> Self {
                self.map_parts(|p| p.add_scalar(f))
            }

            /// `f` subtracted from the affected vectors.
            pub fn sub_scalar(self, f: T) -> Self {
                self.map_parts(|p| p.sub_scalar(f))
            }

            /// Affected vectors subtracted from `f`.
            pub fn rsub_scalar(self, f: T) -> Self {
                self.map_parts(|p| p.rsub_scalar(f))
            }

            /// Affected vectors scaled by `f`.
            pub fn mul_scalar(self, f: T) -> Self {
                self.map_parts(|p| p.mul_scalar(f))
            }

            /// Affected vectors divided by `f`.
            pub fn div_scalar(self, f: T) -> Self {
                self.map_parts(|p| p.div_scalar(f))
            }

            /// `f` divided by the affected vectors.
            pub fn rdiv_scalar(self, f: T) -> Self {
                self.map_parts(|p| p.rdiv_scalar(f))
            }

            /// Affected vectors subtracted from `v`.
            pub fn rsub_vector(self, v: $crate::math::Vector<T, N>) -> Self {
                self.map_parts(|p| v - p)
            }

            /// `v` divided by the affected vectors.
            pub fn rdiv_vector(self, v: $crate::math::Vector<T, N>) -> Self {
                self.map_parts(|p| v / p)
            }

            /// Lanewise mean with another composite.
            pub fn avg(self, other: Self) -> Self {
                self.zip_parts(other, $crate::math::Vector::avg)
            }

            /// Lanewise mean with a vector.
            pub fn avg_vector(self, v: $crate::math::Vector<T, N>) -> Self {
                self.map_parts(|p| p.avg(v))
            }

            /// Lanewise mean with a broadcast scalar.
            pub fn avg_scalar(self, f: T) -> Self {
                self.map_parts(|p| p.avg_scalar(f))
            }

            /// Writes one vector per line to stdout.
            pub fn print(&self) {
                println!("{self}");
            }
        }

        lanewise_ops!(@binary $name, Add, add);
        lanewise_ops!(@binary $name, Sub, sub);
        lanewise_ops!(@binary $name, Mul, mul);
        lanewise_ops!(@binary $name, Div, div);

        impl<T: $crate::math::Scalar, const N: usize> std::ops::Sub<$name<T, N>>
            for $crate::math::Vector<T, N>
        {
            type Output = $name<T, N>;
            fn sub(self, rhs: $name<T, N>) -> $name<T, N> {
                rhs.rsub_vector(self)
            }
        }

        impl<T: $crate::math::Scalar, const N: usize> std::ops::Div<$name<T, N>>
            for $crate::math::Vector<T, N>
        {
            type Output = $name<T, N>;
            fn div(self, rhs: $name<T, N>) -> $name<T, N> {
                rhs.rdiv_vector(self)
            }
        }

        lanewise_ops!(@scalar $name, f32);
        lanewise_ops!(@scalar $name, f64);
    };

    (@binary $name:ident, $trait:ident, $method:ident) => {
        impl<T: $crate::math::Scalar, const N: usize> std::ops::$trait for $name<T, N> {
            type Output = Self;
            fn $method(self, rhs: Self) -> Self {
                self.zip_parts(rhs, std::ops::$trait::$method)
            }
        }

        impl<T: $crate::math::Scalar, const N: usize> std::ops::$trait<$crate::math::Vector<T, N>>
            for $name<T, N>
        {
            type Output = Self;
            fn $method(self, v: $crate::math::Vector<T, N>) -> Self {
                self.map_parts(|p| std::ops::$trait::$method(p, v))
            }
        }
    };

    (@scalar $name:ident, $t:ty) => {
        impl<const N: usize> std::ops::Add<$t> for $name<$t, N> {
            type Output = Self;
            fn add(self, f: $t) -> Self {
                self.add_scalar(f)
            }
        }

        impl<const N: usize> std::ops::Sub<$t> for $name<$t, N> {
            type Output = Self;
            fn sub(self, f: $t) -> Self {
                self.sub_scalar(f)
            }
        }

        impl<const N: usize> std::ops::Mul<$t> for $name<$t, N> {
            type Output = Self;
            fn mul(self, f: $t) -> Self {
                self.mul_scalar(f)
            }
        }

        impl<const N: usize> std::ops::Div<$t> for $name<$t, N> {
            type Output = Self;
            fn div(self, f: $t) -> Self {
                self.div_scalar(f)
            }
        }

        impl<const N: usize> std::ops::Sub<$name<$t, N>> for $t {
            type Output = $name<$t, N>;
            fn sub(self, rhs: $name<$t, N>) -> $name<$t, N> {
                rhs.rsub_scalar(self)
            }
        }

        impl<const N: usize> std::ops::Div<$name<$t, N>> for $t {
            type Output = $name<$t, N>;
            fn div(self, rhs: $name<$t, N>) -> $name<$t, N> {
                rhs.rdiv_scalar(self)
            }
        }
    };
}

mod bounds;
mod ray;
mod segment;
mod sphere;

pub use bounds::BoundingBox;
pub use ray::Ray;
pub use segment::Segment;
pub use sphere::Sphere;

use crate::Float;

/// 2D ray.
pub type Ray2<T = Float> = Ray<T, 2>;
/// 3D ray.
pub type Ray3<T = Float> = Ray<T, 3>;
/// 2D line segment.
pub type Segment2<T = Float> = Segment<T, 2>;
/// 3D line segment.
pub type Segment3<T = Float> = Segment<T, 3>;
/// 2D axis-aligned rectangle.
pub type Box2<T = Float> = BoundingBox<T, 2>;
/// 3D axis-aligned box.
pub type Box3<T = Float> = BoundingBox<T, 3>;
/// Circle.
pub type Sphere2<T = Float> = Sphere<T, 2>;
/// Sphere.
pub type Sphere3<T = Float> = Sphere<T, 3>;

/// `true` when both vector pairs match within `epsilon` on every lane.
fn pair_approx_eq<T: Scalar, const N: usize>(
    a: (Vector<T, N>, Vector<T, N>),
    b: (Vector<T, N>, Vector<T, N>),
    epsilon: T,
) -> bool {
    a.0.approx_eq(b.0, epsilon) && a.1.approx_eq(b.1, epsilon)
}
