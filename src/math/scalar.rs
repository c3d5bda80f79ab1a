//! Width-correct elementary functions.
//!
//! Every other layer of the crate is generic over [`Scalar`]; this is the only
//! place that knows which concrete float width a function call lands on. An
//! `f64` build therefore never routes through an `f32` libm call, and the
//! reverse.
//!
//! None of these functions check their domain. `sqrt(-1.0)` and `acos(2.0)`
//! return NaN exactly as the platform math library does.

use std::fmt::{self, Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::math::simd::{Active, Kernel};

/// A floating point lane type usable in vectors and matrices.
pub trait Scalar:
    Copy
    + Default
    + Debug
    + Display
    + PartialEq
    + PartialOrd
    + bytemuck::Pod
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// `2`
    const TWO: Self;
    /// `0.5`
    const HALF: Self;
    /// Archimedes' constant at this width.
    const PI: Self;
    /// `2π` at this width.
    const TAU: Self;
    /// Storage width in bits.
    const BITS: u32;

    /// Lane backend used by vectors of this scalar.
    type Kernel: Kernel<Self>;

    /// Converts an `f64` constant into this width.
    fn from_f64(value: f64) -> Self;
    /// Widens this value to `f64`.
    fn to_f64(self) -> f64;

    /// Absolute value.
    fn abs(self) -> Self;
    /// `self` raised to `exponent`.
    fn pow(self, exponent: Self) -> Self;
    /// Square root. Negative input yields NaN.
    fn sqrt(self) -> Self;
    /// Sine of an angle in radians.
    fn sin(self) -> Self;
    /// Cosine of an angle in radians.
    fn cos(self) -> Self;
    /// Tangent of an angle in radians.
    fn tan(self) -> Self;
    /// Arcsine in radians. Input outside `[-1, 1]` yields NaN.
    fn asin(self) -> Self;
    /// Arccosine in radians. Input outside `[-1, 1]` yields NaN.
    fn acos(self) -> Self;
    /// Arctangent in radians.
    fn atan(self) -> Self;
    /// Four-quadrant arctangent of `self / x`.
    fn atan2(self, x: Self) -> Self;
    /// `self * a + b` with a single rounding step.
    fn mul_add(self, a: Self, b: Self) -> Self;

    /// Writes one component in the debug-print format for this width.
    fn fmt_component(self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! impl_scalar {
    ($t:ident, $bits:expr, $fmt:literal) => {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;
            const PI: Self = std::$t::consts::PI;
            const TAU: Self = std::$t::consts::TAU;
            const BITS: u32 = $bits;

            type Kernel = Active;

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn abs(self) -> Self {
                $t::abs(self)
            }

            #[inline]
            fn pow(self, exponent: Self) -> Self {
                $t::powf(self, exponent)
            }

            #[inline]
            fn sqrt(self) -> Self {
                $t::sqrt(self)
            }

            #[inline]
            fn sin(self) -> Self {
                $t::sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                $t::cos(self)
            }

            #[inline]
            fn tan(self) -> Self {
                $t::tan(self)
            }

            #[inline]
            fn asin(self) -> Self {
                $t::asin(self)
            }

            #[inline]
            fn acos(self) -> Self {
                $t::acos(self)
            }

            #[inline]
            fn atan(self) -> Self {
                $t::atan(self)
            }

            #[inline]
            fn atan2(self, x: Self) -> Self {
                $t::atan2(self, x)
            }

            #[inline]
            fn mul_add(self, a: Self, b: Self) -> Self {
                $t::mul_add(self, a, b)
            }

            fn fmt_component(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, $fmt, self)
            }
        }
    };
}

impl_scalar!(f32, 32, "{:.6}");
impl_scalar!(f64, 64, "{:.6e}");

/// Clamps `f` into `[lower, upper]`.
///
/// `upper` is tested first, so when `lower > upper` the result is `upper` for
/// any `f` above it. Unlike [`f64::clamp`] this never panics.
#[inline]
pub fn clamp<T: Scalar>(f: T, lower: T, upper: T) -> T {
    if f > upper {
        upper
    } else if f < lower {
        lower
    } else {
        f
    }
}

/// Absolute value at the scalar's own width.
#[inline]
pub fn abs<T: Scalar>(f: T) -> T {
    f.abs()
}

/// `a` raised to `b`.
#[inline]
pub fn pow<T: Scalar>(a: T, b: T) -> T {
    a.pow(b)
}

/// Square root; NaN for negative input.
#[inline]
pub fn sqrt<T: Scalar>(f: T) -> T {
    f.sqrt()
}

/// Sine (radians).
#[inline]
pub fn sin<T: Scalar>(f: T) -> T {
    f.sin()
}

/// Cosine (radians).
#[inline]
pub fn cos<T: Scalar>(f: T) -> T {
    f.cos()
}

/// Tangent (radians).
#[inline]
pub fn tan<T: Scalar>(f: T) -> T {
    f.tan()
}

/// Arcsine; NaN outside `[-1, 1]`.
#[inline]
pub fn asin<T: Scalar>(f: T) -> T {
    f.asin()
}

/// Arccosine; NaN outside `[-1, 1]`.
#[inline]
pub fn acos<T: Scalar>(f: T) -> T {
    f.acos()
}

/// Arctangent.
#[inline]
pub fn atan<T: Scalar>(f: T) -> T {
    f.atan()
}

/// Four-quadrant arctangent of `y / x`.
#[inline]
pub fn atan2<T: Scalar>(y: T, x: T) -> T {
    y.atan2(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clamp_order() {
        assert_eq!(clamp(5.0_f64, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0_f64, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0_f64, 0.0, 10.0), 10.0);
        // Inverted bounds: upper wins above it, lower wins below it.
        assert_eq!(clamp(5.0_f64, 10.0, 0.0), 0.0);
        assert_eq!(clamp(-5.0_f32, 10.0, 0.0), 10.0);
    }

    #[test]
    fn test_domain_errors_propagate_nan() {
        assert!(sqrt(-1.0_f64).is_nan());
        assert!(acos(2.0_f32).is_nan());
        assert!(asin(-1.5_f64).is_nan());
    }

    #[test]
    fn test_width_is_preserved() {
        // An f32 round trip through sqrt must not pick up f64 precision.
        let narrow = sqrt(2.0_f32);
        assert_eq!(narrow, 2.0_f32.sqrt());
        let wide = sqrt(2.0_f64);
        assert_eq!(wide, std::f64::consts::SQRT_2);
        assert_eq!(<f32 as Scalar>::BITS, 32);
        assert_eq!(<f64 as Scalar>::BITS, 64);
    }

    #[test]
    fn test_trig() {
        assert_relative_eq!(atan2(1.0_f64, 1.0), std::f64::consts::FRAC_PI_4);
        assert_relative_eq!(sin(f64::PI / 2.0), 1.0);
        assert_relative_eq!(cos(0.0_f32), 1.0);
        assert_relative_eq!(tan(0.0_f64), 0.0);
        assert_relative_eq!(atan(1.0_f64), std::f64::consts::FRAC_PI_4);
        assert_relative_eq!(pow(2.0_f64, 10.0), 1024.0);
        assert_eq!(abs(-3.5_f32), 3.5);
    }

    #[test]
    fn test_component_format() {
        struct Show<T>(T);
        impl<T: Scalar> Display for Show<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt_component(f)
            }
        }
        assert_eq!(Show(1.5_f32).to_string(), "1.500000");
        assert_eq!(Show(1.5_f64).to_string(), "1.500000e0");
    }
}
