//! Lane arithmetic backends.
//!
//! Vectors never touch a SIMD register type directly. They hand their lane
//! arrays to a [`Kernel`], and the kernel decides how the work is executed:
//!
//! - [`Portable`] is a plain elementwise loop. It is always compiled and is
//!   the reference for correctness.
//! - `Simd` loads the lanes into platform registers (SSE2/AVX on `x86_64`,
//!   NEON on `aarch64`). Two- and three-lane arrays are widened to four lanes
//!   at the register boundary and narrowed back afterwards, so the padding
//!   lane never reaches a caller.
//!
//! [`Active`] is the backend chosen for this build. The choice is made by
//! `cfg` alone; nothing is probed at runtime.

mod portable;

#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "x86_64")]
mod x86;

pub use portable::Portable;

/// Accelerated backend using the platform's SIMD instructions.
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct Simd;

/// The backend every [`Scalar`](crate::math::Scalar) routes through in this build.
#[cfg(all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64")))]
pub type Active = Simd;

/// The backend every [`Scalar`](crate::math::Scalar) routes through in this build.
#[cfg(not(all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64"))))]
pub type Active = Portable;

/// `true` when [`Active`] is the SIMD backend.
pub const ACCELERATED: bool = cfg!(all(
    feature = "simd",
    any(target_arch = "x86_64", target_arch = "aarch64")
));

/// `true` when the accelerated `fma` lowers to a single fused instruction.
///
/// No cargo feature turns this on for `x86_64`: the target must enable `fma`
/// (`-C target-feature=+fma` or a `target-cpu` that has it). Otherwise the
/// kernel still rounds once, through the software `mul_add`.
pub const HARDWARE_FMA: bool = cfg!(any(
    target_arch = "aarch64",
    all(target_arch = "x86_64", target_feature = "fma")
));

/// Elementwise operations over fixed-size lane arrays.
///
/// Implementations must agree with [`Portable`] up to floating point
/// reassociation in [`Kernel::sum`]. Division by a zero lane, overflow and NaN
/// inputs follow IEEE-754; nothing here checks or panics on values.
pub trait Kernel<T> {
    /// `a[i] + b[i]`
    fn add<const N: usize>(a: [T; N], b: [T; N]) -> [T; N];
    /// `a[i] - b[i]`
    fn sub<const N: usize>(a: [T; N], b: [T; N]) -> [T; N];
    /// `a[i] * b[i]`
    fn mul<const N: usize>(a: [T; N], b: [T; N]) -> [T; N];
    /// `a[i] / b[i]`
    fn div<const N: usize>(a: [T; N], b: [T; N]) -> [T; N];
    /// `a[i] * b[i] + c[i]`, rounded once.
    fn fma<const N: usize>(a: [T; N], b: [T; N], c: [T; N]) -> [T; N];
    /// Sum of exactly the `N` lanes.
    fn sum<const N: usize>(a: [T; N]) -> T;

    /// `sum(mul(a, b))`
    #[inline]
    fn dot<const N: usize>(a: [T; N], b: [T; N]) -> T {
        Self::sum(Self::mul(a, b))
    }
}

/// Copies `N <= 4` lanes into a four-lane register image, filling the rest.
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
#[inline(always)]
fn widen<T: Copy, const N: usize>(lanes: [T; N], fill: T) -> [T; 4] {
    let mut out = [fill; 4];
    out[..N].copy_from_slice(&lanes);
    out
}

/// Drops the padding lanes of a four-lane register image.
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
#[inline(always)]
fn narrow<T: Copy, const N: usize>(wide: [T; 4]) -> [T; N] {
    std::array::from_fn(|i| wide[i])
}
