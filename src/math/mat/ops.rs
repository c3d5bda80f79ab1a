use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::Matrix;
use crate::math::{Scalar, Vector};

macro_rules! elementwise_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign:ident) => {
        impl<T: Scalar, const N: usize> $trait for Matrix<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                self.zip_rows(rhs, $trait::$method)
            }
        }

        impl<T: Scalar, const N: usize> $assign_trait for Matrix<T, N> {
            #[inline]
            fn $assign(&mut self, rhs: Self) {
                *self = $trait::$method(*self, rhs);
            }
        }
    };
}

elementwise_op!(Add, add, AddAssign, add_assign);
elementwise_op!(Sub, sub, SubAssign, sub_assign);
elementwise_op!(Mul, mul, MulAssign, mul_assign);
elementwise_op!(Div, div, DivAssign, div_assign);

impl<T: Scalar, const N: usize> Neg for Matrix<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map_rows(Neg::neg)
    }
}

macro_rules! scalar_ops {
    ($t:ty) => {
        impl<const N: usize> Add<$t> for Matrix<$t, N> {
            type Output = Self;
            fn add(self, f: $t) -> Self {
                self.add_scalar(f)
            }
        }

        impl<const N: usize> Sub<$t> for Matrix<$t, N> {
            type Output = Self;
            fn sub(self, f: $t) -> Self {
                self.sub_scalar(f)
            }
        }

        impl<const N: usize> Mul<$t> for Matrix<$t, N> {
            type Output = Self;
            fn mul(self, f: $t) -> Self {
                self.mul_scalar(f)
            }
        }

        impl<const N: usize> Div<$t> for Matrix<$t, N> {
            type Output = Self;
            fn div(self, f: $t) -> Self {
                self.div_scalar(f)
            }
        }

        impl<const N: usize> Add<Matrix<$t, N>> for $t {
            type Output = Matrix<$t, N>;
            fn add(self, m: Matrix<$t, N>) -> Matrix<$t, N> {
                m.add_scalar(self)
            }
        }

        impl<const N: usize> Sub<Matrix<$t, N>> for $t {
            type Output = Matrix<$t, N>;
            fn sub(self, m: Matrix<$t, N>) -> Matrix<$t, N> {
                m.rsub_scalar(self)
            }
        }

        impl<const N: usize> Mul<Matrix<$t, N>> for $t {
            type Output = Matrix<$t, N>;
            fn mul(self, m: Matrix<$t, N>) -> Matrix<$t, N> {
                m.mul_scalar(self)
            }
        }

        impl<const N: usize> Div<Matrix<$t, N>> for $t {
            type Output = Matrix<$t, N>;
            fn div(self, m: Matrix<$t, N>) -> Matrix<$t, N> {
                m.rdiv_scalar(self)
            }
        }
    };
}

scalar_ops!(f32);
scalar_ops!(f64);

impl<T, const N: usize> Index<usize> for Matrix<T, N> {
    type Output = Vector<T, N>;

    fn index(&self, row: usize) -> &Vector<T, N> {
        &self.0[row]
    }
}

impl<T, const N: usize> IndexMut<usize> for Matrix<T, N> {
    fn index_mut(&mut self, row: usize) -> &mut Vector<T, N> {
        &mut self.0[row]
    }
}

impl<T, const N: usize> Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.0[row].0[col]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for Matrix<T, N> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.0[row].0[col]
    }
}

impl<T: Scalar, const N: usize> From<[[T; N]; N]> for Matrix<T, N> {
    fn from(grid: [[T; N]; N]) -> Self {
        Self::from_array(grid)
    }
}

impl<T: Scalar, const N: usize> From<Matrix<T, N>> for [[T; N]; N] {
    fn from(m: Matrix<T, N>) -> Self {
        m.to_array()
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}
