//! SSE2 / AVX lanes for `x86_64`.
//!
//! SSE2 is part of the `x86_64` baseline, so the `f32` path needs no feature
//! gate. `f64` uses one 256-bit AVX register when the target enables `avx`
//! and two 128-bit SSE2 halves otherwise. `fma` lowers to `vfmadd` only when
//! the target enables `fma`; without it the fused result comes from
//! `mul_add`, which still rounds once.

use std::arch::x86_64::*;

use super::{Kernel, Portable, Simd, narrow, widen};

macro_rules! ps_binary {
    ($name:ident, $op:ident) => {
        #[cfg_attr(not(feature = "no-inline"), inline(always))]
        fn $name(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
            let mut out = [0.0_f32; 4];
            // SAFETY: SSE is in the x86_64 baseline and every pointer spans four f32 lanes.
            unsafe {
                let r = $op(_mm_loadu_ps(a.as_ptr()), _mm_loadu_ps(b.as_ptr()));
                _mm_storeu_ps(out.as_mut_ptr(), r);
            }
            out
        }
    };
}

ps_binary!(add_ps, _mm_add_ps);
ps_binary!(sub_ps, _mm_sub_ps);
ps_binary!(mul_ps, _mm_mul_ps);
ps_binary!(div_ps, _mm_div_ps);

#[cfg(target_feature = "avx")]
macro_rules! pd_binary {
    ($name:ident, $avx:ident, $sse:ident) => {
        #[cfg_attr(not(feature = "no-inline"), inline(always))]
        fn $name(a: [f64; 4], b: [f64; 4]) -> [f64; 4] {
            let mut out = [0.0_f64; 4];
            // SAFETY: the target enables AVX and every pointer spans four f64 lanes.
            unsafe {
                let r = $avx(_mm256_loadu_pd(a.as_ptr()), _mm256_loadu_pd(b.as_ptr()));
                _mm256_storeu_pd(out.as_mut_ptr(), r);
            }
            out
        }
    };
}

#[cfg(not(target_feature = "avx"))]
macro_rules! pd_binary {
    ($name:ident, $avx:ident, $sse:ident) => {
        #[cfg_attr(not(feature = "no-inline"), inline(always))]
        fn $name(a: [f64; 4], b: [f64; 4]) -> [f64; 4] {
            let mut out = [0.0_f64; 4];
            // SAFETY: SSE2 is in the x86_64 baseline; each half spans two f64 lanes.
            unsafe {
                let lo = $sse(_mm_loadu_pd(a.as_ptr()), _mm_loadu_pd(b.as_ptr()));
                let hi = $sse(_mm_loadu_pd(a.as_ptr().add(2)), _mm_loadu_pd(b.as_ptr().add(2)));
                _mm_storeu_pd(out.as_mut_ptr(), lo);
                _mm_storeu_pd(out.as_mut_ptr().add(2), hi);
            }
            out
        }
    };
}

pd_binary!(add_pd, _mm256_add_pd, _mm_add_pd);
pd_binary!(sub_pd, _mm256_sub_pd, _mm_sub_pd);
pd_binary!(mul_pd, _mm256_mul_pd, _mm_mul_pd);
pd_binary!(div_pd, _mm256_div_pd, _mm_div_pd);

#[cfg(target_feature = "fma")]
#[cfg_attr(not(feature = "no-inline"), inline(always))]
fn fma_ps(a: [f32; 4], b: [f32; 4], c: [f32; 4]) -> [f32; 4] {
    let mut out = [0.0_f32; 4];
    // SAFETY: the target enables FMA and every pointer spans four f32 lanes.
    unsafe {
        let r = _mm_fmadd_ps(
            _mm_loadu_ps(a.as_ptr()),
            _mm_loadu_ps(b.as_ptr()),
            _mm_loadu_ps(c.as_ptr()),
        );
        _mm_storeu_ps(out.as_mut_ptr(), r);
    }
    out
}

#[cfg(not(target_feature = "fma"))]
#[cfg_attr(not(feature = "no-inline"), inline(always))]
fn fma_ps(a: [f32; 4], b: [f32; 4], c: [f32; 4]) -> [f32; 4] {
    <Portable as Kernel<f32>>::fma(a, b, c)
}

#[cfg(all(target_feature = "fma", target_feature = "avx"))]
#[cfg_attr(not(feature = "no-inline"), inline(always))]
fn fma_pd(a: [f64; 4], b: [f64; 4], c: [f64; 4]) -> [f64; 4] {
    let mut out = [0.0_f64; 4];
    // SAFETY: the target enables AVX and FMA; every pointer spans four f64 lanes.
    unsafe {
        let r = _mm256_fmadd_pd(
            _mm256_loadu_pd(a.as_ptr()),
            _mm256_loadu_pd(b.as_ptr()),
            _mm256_loadu_pd(c.as_ptr()),
        );
        _mm256_storeu_pd(out.as_mut_ptr(), r);
    }
    out
}

#[cfg(not(all(target_feature = "fma", target_feature = "avx")))]
#[cfg_attr(not(feature = "no-inline"), inline(always))]
fn fma_pd(a: [f64; 4], b: [f64; 4], c: [f64; 4]) -> [f64; 4] {
    <Portable as Kernel<f64>>::fma(a, b, c)
}

#[cfg_attr(not(feature = "no-inline"), inline(always))]
fn hsum_ps(a: [f32; 4]) -> f32 {
    // SAFETY: SSE is in the x86_64 baseline and the pointer spans four f32 lanes.
    unsafe {
        let v = _mm_loadu_ps(a.as_ptr());
        let pairs = _mm_add_ps(v, _mm_movehl_ps(v, v));
        let total = _mm_add_ss(pairs, _mm_shuffle_ps::<0x01>(pairs, pairs));
        _mm_cvtss_f32(total)
    }
}

#[cfg_attr(not(feature = "no-inline"), inline(always))]
fn hsum_pd(a: [f64; 4]) -> f64 {
    // SAFETY: SSE2 is in the x86_64 baseline; each load spans two f64 lanes.
    unsafe {
        let pairs = _mm_add_pd(_mm_loadu_pd(a.as_ptr()), _mm_loadu_pd(a.as_ptr().add(2)));
        _mm_cvtsd_f64(_mm_add_sd(pairs, _mm_unpackhi_pd(pairs, pairs)))
    }
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

impl_simd!(f32, add_ps, sub_ps, mul_ps, div_ps, fma_ps, hsum_ps);
impl_simd!(f64, add_pd, sub_pd, mul_pd, div_pd, fma_pd, hsum_pd);
