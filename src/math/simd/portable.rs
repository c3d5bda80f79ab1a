use super::Kernel;

/// Elementwise reference backend. Always available.
#[derive(Debug, Clone, Copy, Default)]
pub struct Portable;

macro_rules! impl_portable {
    ($t:ty) => {
        impl Kernel<$t> for Portable {
            #[cfg_attr(not(feature = "no-inline"), inline(always))]
            fn add<const N: usize>(a: [$t; N], b: [$t; N]) -> [$t; N] {
                std::array::from_fn(|i| a[i] + b[i])
            }

            #[cfg_attr(not(feature = "no-inline"), inline(always))]
            fn sub<const N: usize>(a: [$t; N], b: [$t; N]) -> [$t; N] {
                std::array::from_fn(|i| a[i] - b[i])
            }

            #[cfg_attr(not(feature = "no-inline"), inline(always))]
            fn mul<const N: usize>(a: [$t; N], b: [$t; N]) -> [$t; N] {
                std::array::from_fn(|i| a[i] * b[i])
            }

            #[cfg_attr(not(feature = "no-inline"), inline(always))]
            fn div<const N: usize>(a: [$t; N], b: [$t; N]) -> [$t; N] {
                std::array::from_fn(|i| a[i] / b[i])
            }

            #[cfg_attr(not(feature = "no-inline"), inline(always))]
            fn fma<const N: usize>(a: [$t; N], b: [$t; N], c: [$t; N]) -> [$t; N] {
                std::array::from_fn(|i| a[i].mul_add(b[i], c[i]))
            }

            #[cfg_attr(not(feature = "no-inline"), inline(always))]
            fn sum<const N: usize>(a: [$t; N]) -> $t {
                let mut total = 0.0;
                for lane in a {
                    total += lane;
                }
                total
            }
        }
    };
}

impl_portable!(f32);
impl_portable!(f64);
