//! NEON lanes for `aarch64`.
//!
//! NEON (including `vfmaq` and `vdivq`) is mandatory on `aarch64`, so there
//! is no feature gate. `f64` is processed as two `float64x2_t` halves.

use std::arch::aarch64::*;

use super::{Kernel, Portable, Simd, narrow, widen};

macro_rules! f32x4_binary {
    ($name:ident, $op:ident) => {
        #[cfg_attr(not(feature = "no-inline"), inline(always))]
        fn $name(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
            let mut out = [0.0_f32; 4];
            // SAFETY: NEON is mandatory on aarch64 and every pointer spans four f32 lanes.
            unsafe {
                let r = $op(vld1q_f32(a.as_ptr()), vld1q_f32(b.as_ptr()));
                vst1q_f32(out.as_mut_ptr(), r);
            }
            out
        }
    };
}

macro_rules! f64x4_binary {
    ($name:ident, $op:ident) => {
        #[cfg_attr(not(feature = "no-inline"), inline(always))]
        fn $name(a: [f64; 4], b: [f64; 4]) -> [f64; 4] {
            let mut out = [0.0_f64; 4];
            // SAFETY: NEON is mandatory on aarch64; each half spans two f64 lanes.
            unsafe {
                let lo = $op(vld1q_f64(a.as_ptr()), vld1q_f64(b.as_ptr()));
                let hi = $op(vld1q_f64(a.as_ptr().add(2)), vld1q_f64(b.as_ptr().add(2)));
                vst1q_f64(out.as_mut_ptr(), lo);
                vst1q_f64(out.as_mut_ptr().add(2), hi);
            }
            out
        }
    };
}

f32x4_binary!(add_f32, vaddq_f32);
f32x4_binary!(sub_f32, vsubq_f32);
f32x4_binary!(mul_f32, vmulq_f32);
f32x4_binary!(div_f32, vdivq_f32);

f64x4_binary!(add_f64, vaddq_f64);
f64x4_binary!(sub_f64, vsubq_f64);
f64x4_binary!(mul_f64, vmulq_f64);
f64x4_binary!(div_f64, vdivq_f64);

#[cfg_attr(not(feature = "no-inline"), inline(always))]
fn fma_f32(a: [f32; 4], b: [f32; 4], c: [f32; 4]) -> [f32; 4] {
    let mut out = [0.0_f32; 4];
    // SAFETY: NEON is mandatory on aarch64 and every pointer spans four f32 lanes.
    unsafe {
        // vfmaq computes acc + x * y.
        let r = vfmaq_f32(
            vld1q_f32(c.as_ptr()),
            vld1q_f32(a.as_ptr()),
            vld1q_f32(b.as_ptr()),
        );
        vst1q_f32(out.as_mut_ptr(), r);
    }
    out
}

#[cfg_attr(not(feature = "no-inline"), inline(always))]
fn fma_f64(a: [f64; 4], b: [f64; 4], c: [f64; 4]) -> [f64; 4] {
    let mut out = [0.0_f64; 4];
    // SAFETY: NEON is mandatory on aarch64; each half spans two f64 lanes.
    unsafe {
        let lo = vfmaq_f64(
            vld1q_f64(c.as_ptr()),
            vld1q_f64(a.as_ptr()),
            vld1q_f64(b.as_ptr()),
        );
        let hi = vfmaq_f64(
            vld1q_f64(c.as_ptr().add(2)),
            vld1q_f64(a.as_ptr().add(2)),
            vld1q_f64(b.as_ptr().add(2)),
        );
        vst1q_f64(out.as_mut_ptr(), lo);
        vst1q_f64(out.as_mut_ptr().add(2), hi);
    }
    out
}

#[cfg_attr(not(feature = "no-inline"), inline(always))]
fn sum_f32(a: [f32; 4]) -> f32 {
    // SAFETY: NEON is mandatory on aarch64 and the pointer spans four f32 lanes.
    unsafe { vaddvq_f32(vld1q_f32(a.as_ptr())) }
}

#[cfg_attr(not(feature = "no-inline"), inline(always))]
fn sum_f64(a: [f64; 4]) -> f64 {
    // SAFETY: NEON is mandatory on aarch64; each load spans two f64 lanes.
    unsafe { vaddvq_f64(vaddq_f64(vld1q_f64(a.as_ptr()), vld1q_f64(a.as_ptr().add(2)))) }
}

macro_rules! impl_simd {
    ($t:ty, $add:ident, $sub:ident, $mul:ident, $div:ident, $fma:ident, $sum:ident) => {
        impl Kernel<$t> for Simd {
            #[cfg_attr(not(feature = "no-inline"), inline(always))]
            fn add<const N: usize>(a: [$t; N], b: [$t; N]) -> [$t; N] {
                if N > 4 {
                    return <Portable as Kernel<$t>>::add(a, b);
                }
                narrow($add(widen(a, 0.0), widen(b, 0.0)))
            }

            #[cfg_attr(not(feature = "no-inline"), inline(always))]
            fn sub<const N: usize>(a: [$t; N], b: [$t; N]) -> [$t; N] {
                if N > 4 {
                    return <Portable as Kernel<$t>>::sub(a, b);
                }
                narrow($sub(widen(a, 0.0), widen(b, 0.0)))
            }

            #[cfg_attr(not(feature = "no-inline"), inline(always))]
            fn mul<const N: usize>(a: [$t; N], b: [$t; N]) -> [$t; N] {
                if N > 4 {
                    return <Portable as Kernel<$t>>::mul(a, b);
                }
                narrow($mul(widen(a, 0.0), widen(b, 0.0)))
            }

            #[cfg_attr(not(feature = "no-inline"), inline(always))]
            fn div<const N: usize>(a: [$t; N], b: [$t; N]) -> [$t; N] {
                if N > 4 {
                    return <Portable as Kernel<$t>>::div(a, b);
                }
                narrow($div(widen(a, 1.0), widen(b, 1.0)))
            }

            #[cfg_attr(not(feature = "no-inline"), inline(always))]
            fn fma<const N: usize>(a: [$t; N], b: [$t; N], c: [$t; N]) -> [$t; N] {
                if N > 4 {
                    return <Portable as Kernel<$t>>::fma(a, b, c);
                }
                narrow($fma(widen(a, 0.0), widen(b, 0.0), widen(c, 0.0)))
            }

            #[cfg_attr(not(feature = "no-inline"), inline(always))]
            fn sum<const N: usize>(a: [$t; N]) -> $t {
                if N > 4 {
                    return <Portable as Kernel<$t>>::sum(a);
                }
                $sum(widen(a, 0.0))
            }
        }
    };
}

impl_simd!(f32, add_f32, sub_f32, mul_f32, div_f32, fma_f32, sum_f32);
impl_simd!(f64, add_f64, sub_f64, mul_f64, div_f64, fma_f64, sum_f64);
