//! Fixed-width vectors.
//!
//! [`Vector<T, N>`] is a thin, `#[repr(transparent)]` wrapper over `[T; N]`.
//! Named lanes (`x`, `y`, `z`, `w`) are accessor functions over the same
//! storage, so `v.x() == v[0]` always holds. Elementwise arithmetic is routed
//! through the scalar's lane [`Kernel`], which is either the portable loop or
//! the platform SIMD path depending on how the crate was built.
//!
//! Nothing in here checks its inputs. Normalizing a zero vector or dividing
//! by a zero lane produces NaN/inf lanes, which is what callers rely on.

mod dims;
mod ops;

use crate::math::Scalar;
use crate::math::simd::Kernel;

/*
Layout requirements:
   1. Same layout as [T; N] (repr(transparent)), so a slice of vectors can be
      handed to a GPU buffer or cast to bytes.
   2. No padding lane stored; SIMD padding exists only inside the kernel.
*/

/// An `N`-lane vector of scalars.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

// SAFETY: `Vector` is repr(transparent) over `[T; N]`, which is zeroable/plain-old-data
// whenever `T` is.
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
// SAFETY: see above.
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Wraps a lane array.
    #[inline]
    pub const fn from_array(lanes: [T; N]) -> Self {
        Self(lanes)
    }

    /// Broadcasts `f` to every lane.
    #[inline]
    pub fn splat(f: T) -> Self {
        Self([f; N])
    }

    /// All lanes zero.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    /// Lane `index`. Panics if `index >= N`, like array indexing.
    #[inline]
    pub fn get(&self, index: usize) -> T {
        self.0[index]
    }

    /// Borrow the lanes as an array.
    pub fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Copy the lanes out.
    pub fn to_array(self) -> [T; N] {
        self.0
    }

    /// Raw byte view, e.g. for a GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Applies `f` to every lane.
    #[inline]
    pub fn map(self, f: impl Fn(T) -> T) -> Self {
        Self(self.0.map(f))
    }

    /// `self + f` on every lane.
    #[inline]
    pub fn add_scalar(self, f: T) -> Self {
        self + Self::splat(f)
    }

    /// `self - f` on every lane.
    #[inline]
    pub fn sub_scalar(self, f: T) -> Self {
        self - Self::splat(f)
    }

    /// `f - self` on every lane.
    #[inline]
    pub fn rsub_scalar(self, f: T) -> Self {
        Self::splat(f) - self
    }

    /// `self * f` on every lane.
    #[inline]
    pub fn mul_scalar(self, f: T) -> Self {
        self * Self::splat(f)
    }

    /// `self / f` on every lane.
    #[inline]
    pub fn div_scalar(self, f: T) -> Self {
        self / Self::splat(f)
    }

    /// `f / self` on every lane.
    #[inline]
    pub fn rdiv_scalar(self, f: T) -> Self {
        Self::splat(f) / self
    }

    /// `self[i] ^ exp[i]`
    pub fn pow(self, exp: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i].pow(exp.0[i])))
    }

    /// Every lane raised to `f`.
    pub fn pow_scalar(self, f: T) -> Self {
        self.pow(Self::splat(f))
    }

    /// `f` raised to each lane.
    pub fn rpow_scalar(self, f: T) -> Self {
        Self::splat(f).pow(self)
    }

    /// Sum of the `N` lanes.
    #[inline]
    pub fn sum(self) -> T {
        <T::Kernel as Kernel<T>>::sum(self.0)
    }

    /// Inner product, `sum(self * other)`.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        <T::Kernel as Kernel<T>>::dot(self.0, other.0)
    }

    /// `self · self`
    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Euclidean magnitude.
    #[inline]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(self, other: Self) -> T {
        (self - other).length()
    }

    /// Scales to unit length.
    ///
    /// The zero vector is not special-cased: it comes back as NaN lanes.
    #[inline]
    pub fn normalize(self) -> Self {
        self.div_scalar(self.length())
    }

    /// Projection of `self` onto `onto`: `onto * (self·onto / onto·onto)`.
    pub fn project(self, onto: Self) -> Self {
        onto.mul_scalar(self.dot(onto) / onto.dot(onto))
    }

    /// Component of `self` orthogonal to `from`.
    pub fn reject(self, from: Self) -> Self {
        self - self.project(from)
    }

    /// Lanewise mean of two vectors.
    #[inline]
    pub fn avg(self, other: Self) -> Self {
        (self + other).mul_scalar(T::HALF)
    }

    /// Lanewise mean with a broadcast scalar.
    #[inline]
    pub fn avg_scalar(self, f: T) -> Self {
        self.avg(Self::splat(f))
    }

    /// `self * b + c`, rounded once per lane.
    #[inline]
    pub fn fma(self, b: Self, c: Self) -> Self {
        Self(<T::Kernel as Kernel<T>>::fma(self.0, b.0, c.0))
    }

    /// `self * b - c`, rounded once per lane.
    #[inline]
    pub fn fms(self, b: Self, c: Self) -> Self {
        self.fma(b, -c)
    }

    /// Lanewise minimum.
    pub fn min(self, other: Self) -> Self {
        Self(std::array::from_fn(|i| {
            if other.0[i] < self.0[i] {
                other.0[i]
            } else {
                self.0[i]
            }
        }))
    }

    /// Lanewise maximum.
    pub fn max(self, other: Self) -> Self {
        Self(std::array::from_fn(|i| {
            if other.0[i] > self.0[i] {
                other.0[i]
            } else {
                self.0[i]
            }
        }))
    }

    /// `true` when every lane differs by strictly less than `epsilon`.
    pub fn approx_eq(self, other: Self, epsilon: T) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(&a, &b)| (a - b).abs() < epsilon)
    }

    /// Writes the debug representation and a newline to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}
