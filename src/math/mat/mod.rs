//! Square matrices stored as rows of [`Vector`]s.
//!
//! `Mul`/`Div` between two matrices are elementwise, like every other
//! matrix⊗matrix operator. The linear-algebra product is [`Matrix::dot`].

mod ops;
mod transform;

use crate::math::{Scalar, Vector};

/// An `N`×`N` matrix, row-major.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix<T, const N: usize>(pub(crate) [Vector<T, N>; N]);

// SAFETY: repr(transparent) over `[Vector<T, N>; N]`, itself N*N packed `T`s.
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Matrix<T, N> {}
// SAFETY: see above.
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Matrix<T, N> {}

impl<T: Scalar, const N: usize> Default for Matrix<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N> {
    /// Builds a matrix from its rows.
    #[inline]
    pub const fn from_rows(rows: [Vector<T, N>; N]) -> Self {
        Self(rows)
    }

    /// Builds a matrix from a row-major grid.
    pub fn from_array(grid: [[T; N]; N]) -> Self {
        Self(grid.map(Vector::from_array))
    }

    /// Every element set to `f`.
    pub fn splat(f: T) -> Self {
        Self([Vector::splat(f); N])
    }

    /// All elements zero.
    pub fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    /// Ones on the diagonal, zeros elsewhere.
    pub fn identity() -> Self {
        let mut m = Self::zero();
        for i in 0..N {
            m.0[i].0[i] = T::ONE;
        }
        m
    }

    /// Row `i`, as stored.
    #[inline]
    pub fn row(&self, i: usize) -> Vector<T, N> {
        self.0[i]
    }

    /// Column `j`, gathered from every row.
    #[inline]
    pub fn col(&self, j: usize) -> Vector<T, N> {
        Vector(std::array::from_fn(|i| self.0[i].0[j]))
    }

    /// Element at row `i`, column `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.0[i].0[j]
    }

    /// Row-major grid view of the same storage.
    pub fn as_array(&self) -> &[[T; N]; N] {
        bytemuck::cast_ref(self)
    }

    /// Copies the grid out.
    pub fn to_array(self) -> [[T; N]; N] {
        self.0.map(Vector::to_array)
    }

    /// Raw byte view, e.g. for a uniform buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Applies `f` to every row.
    #[inline]
    pub fn map_rows(self, f: impl Fn(Vector<T, N>) -> Vector<T, N>) -> Self {
        Self(self.0.map(f))
    }

    #[inline]
    fn zip_rows(self, other: Self, f: impl Fn(Vector<T, N>, Vector<T, N>) -> Vector<T, N>) -> Self {
        Self(std::array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    /// `self + f` elementwise.
    pub fn add_scalar(self, f: T) -> Self {
        self.map_rows(|r| r.add_scalar(f))
    }

    /// `self - f` elementwise.
    pub fn sub_scalar(self, f: T) -> Self {
        self.map_rows(|r| r.sub_scalar(f))
    }

    /// `f - self` elementwise.
    pub fn rsub_scalar(self, f: T) -> Self {
        self.map_rows(|r| r.rsub_scalar(f))
    }

    /// `self * f` elementwise.
    pub fn mul_scalar(self, f: T) -> Self {
        self.map_rows(|r| r.mul_scalar(f))
    }

    /// `self / f` elementwise.
    pub fn div_scalar(self, f: T) -> Self {
        self.map_rows(|r| r.div_scalar(f))
    }

    /// `f / self` elementwise.
    pub fn rdiv_scalar(self, f: T) -> Self {
        self.map_rows(|r| r.rdiv_scalar(f))
    }

    /// Elementwise mean of two matrices.
    pub fn avg(self, other: Self) -> Self {
        self.zip_rows(other, Vector::avg)
    }

    /// Elementwise mean with a broadcast scalar.
    pub fn avg_scalar(self, f: T) -> Self {
        self.map_rows(|r| r.avg_scalar(f))
    }

    /// `self * b + c` elementwise, rounded once.
    pub fn fma(self, b: Self, c: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i].fma(b.0[i], c.0[i])))
    }

    /// `self * b - c` elementwise, rounded once.
    pub fn fms(self, b: Self, c: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i].fms(b.0[i], c.0[i])))
    }

    /// `true` when every element differs by strictly less than `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.approx_eq(*b, epsilon))
    }

    /// Rows become columns.
    pub fn transpose(&self) -> Self {
        Self(std::array::from_fn(|j| self.col(j)))
    }

    /// Matrix product: `r[i][j] = row(self, i) · col(other, j)`.
    pub fn dot(&self, other: &Self) -> Self {
        let cols = other.transpose();
        Self(std::array::from_fn(|i| {
            Vector(std::array::from_fn(|j| self.0[i].dot(cols.0[j])))
        }))
    }

    /// `self · v` with `v` treated as a column.
    pub fn mul_vector(&self, v: Vector<T, N>) -> Vector<T, N> {
        Vector(std::array::from_fn(|i| self.0[i].dot(v)))
    }

    /// Writes one row per line to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl<T: Scalar> Matrix<T, 2> {
    /// Creates a 2x2 matrix from row-major elements.
    pub const fn new(m00: T, m01: T, m10: T, m11: T) -> Self {
        Self([Vector([m00, m01]), Vector([m10, m11])])
    }
}

impl<T: Scalar> Matrix<T, 3> {
    /// Creates a 3x3 matrix from row-major elements.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        m00: T, m01: T, m02: T,
        m10: T, m11: T, m12: T,
        m20: T, m21: T, m22: T,
    ) -> Self {
        Self([
            Vector([m00, m01, m02]),
            Vector([m10, m11, m12]),
            Vector([m20, m21, m22]),
        ])
    }
}

impl<T: Scalar> Matrix<T, 4> {
    /// Creates a 4x4 matrix from row-major elements.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        m00: T, m01: T, m02: T, m03: T,
        m10: T, m11: T, m12: T, m13: T,
        m20: T, m21: T, m22: T, m23: T,
        m30: T, m31: T, m32: T, m33: T,
    ) -> Self {
        Self([
            Vector([m00, m01, m02, m03]),
            Vector([m10, m11, m12, m13]),
            Vector([m20, m21, m22, m23]),
            Vector([m30, m31, m32, m33]),
        ])
    }
}
