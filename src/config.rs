//! Build configuration.
//!
//! Precision and instruction set are fixed at compile time through cargo
//! features:
//!
//! | feature     | effect                                                  |
//! |-------------|---------------------------------------------------------|
//! | `f32`       | [`Float`](crate::Float) is `f32` instead of `f64`       |
//! | `simd`      | route lane arithmetic through the platform SIMD backend |
//! | `avx`       | request AVX for `f64` lanes (needs `+avx` target flag)  |
//! | `avx2`      | request AVX2 (needs `+avx2,+fma` for a fused `fma`)     |
//! | `neon`      | request NEON (always present on `aarch64`)              |
//! | `no-inline` | drop the forced-inline hint on kernel functions         |
//!
//! Cargo features cannot turn on CPU instructions by themselves; the target
//! has to enable them (`RUSTFLAGS="-C target-feature=+avx"` or
//! `-C target-cpu=native`). Hardware FMA is separate from every cargo
//! feature: on `x86_64` it needs `+fma` in the target features, and without
//! it the accelerated `fma` uses the software `mul_add`. [`Config::current`]
//! reports what was actually compiled in and logs a warning the first time it
//! is read if a requested instruction set or FMA is missing.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::{ConfigError, ConfigResult};
use crate::math::Scalar;
use crate::math::simd;

/// Floating point width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// 32-bit `f32`.
    Single,
    /// 64-bit `f64`.
    Double,
    /// 80-bit x87 extended. Named for completeness; no build provides it.
    Extended,
}

impl Precision {
    /// Width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Single => 32,
            Self::Double => 64,
            Self::Extended => 80,
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl FromStr for Precision {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s.trim() {
            "32" => Ok(Self::Single),
            "64" => Ok(Self::Double),
            "80" => Ok(Self::Extended),
            other => Err(ConfigError::unknown_precision(other)),
        }
    }
}

/// Requested instruction set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimdMode {
    /// Portable loops only.
    None,
    /// Best available for the target architecture.
    Auto,
    /// 256-bit AVX.
    Avx,
    /// AVX2.
    Avx2,
    /// ARM NEON.
    Neon,
}

impl fmt::Display for SimdMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Auto => "auto",
            Self::Avx => "avx",
            Self::Avx2 => "avx2",
            Self::Neon => "neon",
        };
        f.write_str(name)
    }
}

impl FromStr for SimdMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "auto" => Ok(Self::Auto),
            "avx" => Ok(Self::Avx),
            "avx2" => Ok(Self::Avx2),
            "neon" => Ok(Self::Neon),
            _ => Err(ConfigError::unknown_simd_mode(s)),
        }
    }
}

/// Lane backend actually compiled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Elementwise scalar loops.
    Portable,
    /// 128-bit SSE2 registers.
    Sse2,
    /// 256-bit AVX registers for `f64`, SSE for `f32`.
    Avx,
    /// 128-bit NEON registers.
    Neon,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Portable => "portable",
            Self::Sse2 => "sse2",
            Self::Avx => "avx",
            Self::Neon => "neon",
        };
        f.write_str(name)
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portable" => Ok(Self::Portable),
            "sse2" => Ok(Self::Sse2),
            "avx" => Ok(Self::Avx),
            "neon" => Ok(Self::Neon),
            _ => Err(ConfigError::unknown_backend(s)),
        }
    }
}

/// Snapshot of how this library was compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Width of [`Float`](crate::Float).
    pub precision: Precision,
    /// Instruction set requested through cargo features.
    pub simd: SimdMode,
    /// Backend the kernel actually routes through.
    pub backend: Backend,
    /// Whether `fma` lowers to a single hardware instruction.
    pub hardware_fma: bool,
    /// Whether kernel functions carry the forced-inline hint.
    pub inline: bool,
}

lazy_static::lazy_static! {
    /// Configuration of this build, computed and logged on first access.
    static ref CONFIG: Config = Config::detect();
}

impl Config {
    /// The configuration this library was built with.
    pub fn current() -> &'static Config {
        &CONFIG
    }

    /// Fails unless the library was built at `precision`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnsupportedPrecision`] for [`Precision::Extended`],
    /// [`ConfigError::PrecisionMismatch`] for any other width that differs
    /// from the build.
    pub fn require_precision(&self, precision: Precision) -> ConfigResult<()> {
        if precision == Precision::Extended {
            return Err(ConfigError::UnsupportedPrecision(precision));
        }
        if precision != self.precision {
            return Err(ConfigError::PrecisionMismatch {
                requested: precision,
                built: self.precision,
            });
        }
        Ok(())
    }

    /// Fails unless the active backend provides `mode`.
    ///
    /// [`SimdMode::None`] is always satisfied; [`SimdMode::Auto`] is
    /// satisfied by any accelerated backend.
    ///
    /// # Errors
    ///
    /// [`ConfigError::SimdUnavailable`] naming the active backend.
    pub fn require_simd(&self, mode: SimdMode) -> ConfigResult<()> {
        let available = match mode {
            SimdMode::None => true,
            SimdMode::Auto => self.backend != Backend::Portable,
            SimdMode::Avx => self.backend == Backend::Avx,
            SimdMode::Avx2 => self.backend == Backend::Avx && cfg!(target_feature = "avx2"),
            SimdMode::Neon => self.backend == Backend::Neon,
        };
        if available {
            Ok(())
        } else {
            Err(ConfigError::SimdUnavailable {
                requested: mode,
                backend: self.backend,
            })
        }
    }

    fn detect() -> Self {
        let config = Self {
            precision: built_precision(),
            simd: requested_simd(),
            backend: active_backend(),
            hardware_fma: simd::HARDWARE_FMA,
            inline: !cfg!(feature = "no-inline"),
        };

        debug!(
            precision = %config.precision,
            simd = %config.simd,
            backend = %config.backend,
            hardware_fma = config.hardware_fma,
            inline = config.inline,
            "kernel configuration"
        );

        if config.simd != SimdMode::None && config.require_simd(config.simd).is_err() {
            warn!(
                requested = %config.simd,
                backend = %config.backend,
                "requested instruction set is not enabled for this target, falling back"
            );
        }

        if config.simd == SimdMode::Avx2 && !config.hardware_fma {
            warn!("avx2 requested without `+fma` in the target features, fma is not fused in hardware");
        }

        config
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yes_no = |b: bool| if b { "yes" } else { "no" };
        writeln!(f, "precision:    {}-bit", self.precision)?;
        writeln!(f, "simd:         {}", self.simd)?;
        writeln!(f, "backend:      {}", self.backend)?;
        writeln!(f, "hardware fma: {}", yes_no(self.hardware_fma))?;
        write!(f, "inline:       {}", yes_no(self.inline))
    }
}

fn built_precision() -> Precision {
    match <crate::Float as Scalar>::BITS {
        32 => Precision::Single,
        _ => Precision::Double,
    }
}

fn requested_simd() -> SimdMode {
    if !cfg!(feature = "simd") {
        SimdMode::None
    } else if cfg!(all(feature = "neon", target_arch = "aarch64")) {
        SimdMode::Neon
    } else if cfg!(feature = "avx2") {
        SimdMode::Avx2
    } else if cfg!(feature = "avx") {
        SimdMode::Avx
    } else if cfg!(feature = "neon") {
        SimdMode::Neon
    } else {
        SimdMode::Auto
    }
}

fn active_backend() -> Backend {
    if !simd::ACCELERATED {
        Backend::Portable
    } else if cfg!(target_arch = "aarch64") {
        Backend::Neon
    } else if cfg!(target_feature = "avx") {
        Backend::Avx
    } else {
        Backend::Sse2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_parse_and_display() {
        for p in [Precision::Single, Precision::Double, Precision::Extended] {
            assert_eq!(p.to_string().parse::<Precision>(), Ok(p));
        }
        assert_eq!(" 64 ".parse::<Precision>(), Ok(Precision::Double));
        assert_eq!(
            "16".parse::<Precision>(),
            Err(ConfigError::UnknownPrecision("16".into()))
        );
    }

    #[test]
    fn test_simd_mode_parse() {
        assert_eq!("AVX2".parse::<SimdMode>(), Ok(SimdMode::Avx2));
        assert_eq!("none".parse::<SimdMode>(), Ok(SimdMode::None));
        assert!("sse4".parse::<SimdMode>().is_err());
        assert_eq!("sse2".parse::<Backend>(), Ok(Backend::Sse2));
    }

    #[test]
    fn test_backend_parse_errors_name_backends() {
        for b in [Backend::Portable, Backend::Sse2, Backend::Avx, Backend::Neon] {
            assert_eq!(b.to_string().parse::<Backend>(), Ok(b));
        }
        assert_eq!(
            "gpu".parse::<Backend>(),
            Err(ConfigError::UnknownBackend("gpu".into()))
        );
    }

    #[test]
    fn test_current_matches_build() {
        let config = Config::current();
        assert_eq!(config.precision.bits(), <crate::Float as Scalar>::BITS);
        assert_eq!(config.backend == Backend::Portable, !simd::ACCELERATED);
        assert_eq!(config.inline, !cfg!(feature = "no-inline"));
        assert!(std::ptr::eq(config, Config::current()));
    }

    #[test]
    fn test_require_precision() {
        let config = Config::current();
        assert_eq!(config.require_precision(config.precision), Ok(()));
        assert_eq!(
            config.require_precision(Precision::Extended),
            Err(ConfigError::UnsupportedPrecision(Precision::Extended))
        );
        let other = match config.precision {
            Precision::Single => Precision::Double,
            _ => Precision::Single,
        };
        assert!(matches!(
            config.require_precision(other),
            Err(ConfigError::PrecisionMismatch { .. })
        ));
    }

    #[test]
    fn test_require_simd() {
        let config = Config::current();
        assert_eq!(config.require_simd(SimdMode::None), Ok(()));

        let portable = Config {
            backend: Backend::Portable,
            ..config.clone()
        };
        assert_eq!(
            portable.require_simd(SimdMode::Auto),
            Err(ConfigError::SimdUnavailable {
                requested: SimdMode::Auto,
                backend: Backend::Portable,
            })
        );

        let neon = Config {
            backend: Backend::Neon,
            ..config.clone()
        };
        assert_eq!(neon.require_simd(SimdMode::Neon), Ok(()));
        assert!(neon.require_simd(SimdMode::Avx).is_err());
    }

    #[test]
    fn test_display_lists_every_field() {
        let text = Config::current().to_string();
        for key in ["precision", "simd", "backend", "hardware fma", "inline"] {
            assert!(text.contains(key), "missing {key}");
        }
    }
}
