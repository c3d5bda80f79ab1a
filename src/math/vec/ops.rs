use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::Vector;
use crate::math::Scalar;
use crate::math::simd::Kernel;

macro_rules! lane_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign:ident) => {
        impl<T: Scalar, const N: usize> $trait for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self(<T::Kernel as Kernel<T>>::$method(self.0, rhs.0))
            }
        }

        impl<T: Scalar, const N: usize> $assign_trait for Vector<T, N> {
            #[inline]
            fn $assign(&mut self, rhs: Self) {
                *self = $trait::$method(*self, rhs);
            }
        }
    };
}

lane_op!(Add, add, AddAssign, add_assign);
lane_op!(Sub, sub, SubAssign, sub_assign);
lane_op!(Mul, mul, MulAssign, mul_assign);
lane_op!(Div, div, DivAssign, div_assign);

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|lane| -lane)
    }
}

// Scalar operands are spelled out per float type so that `v * 2.0` and
// `2.0 * v` both resolve without a blanket impl on a foreign type.
macro_rules! scalar_ops {
    ($t:ty) => {
        impl<const N: usize> Add<$t> for Vector<$t, N> {
            type Output = Self;
            #[inline]
            fn add(self, f: $t) -> Self {
                self.add_scalar(f)
            }
        }

        impl<const N: usize> Sub<$t> for Vector<$t, N> {
            type Output = Self;
            #[inline]
            fn sub(self, f: $t) -> Self {
                self.sub_scalar(f)
            }
        }

        impl<const N: usize> Mul<$t> for Vector<$t, N> {
            type Output = Self;
            #[inline]
            fn mul(self, f: $t) -> Self {
                self.mul_scalar(f)
            }
        }

        impl<const N: usize> Div<$t> for Vector<$t, N> {
            type Output = Self;
            #[inline]
            fn div(self, f: $t) -> Self {
                self.div_scalar(f)
            }
        }

        impl<const N: usize> Add<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;
            #[inline]
            fn add(self, v: Vector<$t, N>) -> Vector<$t, N> {
                v.add_scalar(self)
            }
        }

        impl<const N: usize> Sub<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;
            #[inline]
            fn sub(self, v: Vector<$t, N>) -> Vector<$t, N> {
                v.rsub_scalar(self)
            }
        }

        impl<const N: usize> Mul<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;
            #[inline]
            fn mul(self, v: Vector<$t, N>) -> Vector<$t, N> {
                v.mul_scalar(self)
            }
        }

        impl<const N: usize> Div<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;
            #[inline]
            fn div(self, v: Vector<$t, N>) -> Vector<$t, N> {
                v.rdiv_scalar(self)
            }
        }

        impl<const N: usize> AddAssign<$t> for Vector<$t, N> {
            fn add_assign(&mut self, f: $t) {
                *self = self.add_scalar(f);
            }
        }

        impl<const N: usize> SubAssign<$t> for Vector<$t, N> {
            fn sub_assign(&mut self, f: $t) {
                *self = self.sub_scalar(f);
            }
        }

        impl<const N: usize> MulAssign<$t> for Vector<$t, N> {
            fn mul_assign(&mut self, f: $t) {
                *self = self.mul_scalar(f);
            }
        }

        impl<const N: usize> DivAssign<$t> for Vector<$t, N> {
            fn div_assign(&mut self, f: $t) {
                *self = self.div_scalar(f);
            }
        }
    };
}

scalar_ops!(f32);
scalar_ops!(f64);

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(lanes: [T; N]) -> Self {
        Self(lanes)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

/// `(x, y, z)` with every component in the scalar's print format.
impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, lane) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            lane.fmt_component(f)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use crate::math::Vector;

    type Vec2<T> = Vector<T, 2>;
    type Vec3<T> = Vector<T, 3>;
    type Vec4<T> = Vector<T, 4>;

    #[test]
    fn test_vector_operators() {
        let a = Vec3::<f64>::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(b / a, Vec3::new(4.0, 2.5, 2.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_scalar_operators_both_orders() {
        let v = Vec2::<f32>::new(2.0, 4.0);
        assert_eq!(v + 1.0, Vec2::new(3.0, 5.0));
        assert_eq!(1.0 + v, Vec2::new(3.0, 5.0));
        assert_eq!(v - 1.0, Vec2::new(1.0, 3.0));
        assert_eq!(1.0 - v, Vec2::new(-1.0, -3.0));
        assert_eq!(v * 2.0, Vec2::new(4.0, 8.0));
        assert_eq!(2.0 * v, Vec2::new(4.0, 8.0));
        assert_eq!(v / 2.0, Vec2::new(1.0, 2.0));
        assert_eq!(8.0 / v, Vec2::new(4.0, 2.0));
    }

    #[test]
    fn test_assign_operators() {
        let mut v = Vec4::<f64>::splat(1.0);
        v += Vec4::splat(1.0);
        v *= 3.0;
        v -= 1.0;
        v /= Vec4::new(1.0, 5.0, 1.0, 5.0);
        assert_eq!(v, Vec4::new(5.0, 1.0, 5.0, 1.0));
        v[2] = 0.0;
        assert_eq!(v.z(), 0.0);
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(
            Vec3::<f32>::new(1.0, 2.5, -3.0).to_string(),
            "(1.000000, 2.500000, -3.000000)"
        );
        assert_eq!(Vec2::<f64>::new(1.5, 0.0).to_string(), "(1.500000e0, 0.000000e0)");
    }
}
