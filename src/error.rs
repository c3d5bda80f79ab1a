//! Error types for build configuration queries.
//!
//! The numeric kernel itself never fails: invalid inputs propagate as NaN or
//! infinity. Only parsing and asserting the build configuration can error.

use thiserror::Error;

use crate::config::{Backend, Precision, SimdMode};

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when parsing or asserting the build configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A precision string other than `32`, `64` or `80`.
    #[error("unknown precision `{0}`, expected 32, 64 or 80")]
    UnknownPrecision(String),

    /// A precision with no native float type in this build.
    #[error("{0}-bit precision is not supported")]
    UnsupportedPrecision(Precision),

    /// A SIMD mode string that is not recognised.
    #[error("unknown simd mode `{0}`, expected none, auto, avx, avx2 or neon")]
    UnknownSimdMode(String),

    /// A backend name that is not recognised.
    #[error("unknown backend `{0}`, expected portable, sse2, avx or neon")]
    UnknownBackend(String),

    /// The library was built at a different precision than required.
    #[error("requested {requested}-bit precision but the library was built with {built}-bit")]
    PrecisionMismatch {
        /// Precision the caller asked for.
        requested: Precision,
        /// Precision the library was compiled with.
        built: Precision,
    },

    /// The requested instruction set is not compiled in.
    #[error("simd mode {requested} is not available, active backend is {backend}")]
    SimdUnavailable {
        /// Mode the caller asked for.
        requested: SimdMode,
        /// Backend the library actually uses.
        backend: Backend,
    },
}

impl ConfigError {
    /// Create an unknown precision error.
    #[must_use]
    pub fn unknown_precision(input: impl Into<String>) -> Self {
        Self::UnknownPrecision(input.into())
    }

    /// Create an unknown simd mode error.
    #[must_use]
    pub fn unknown_simd_mode(input: impl Into<String>) -> Self {
        Self::UnknownSimdMode(input.into())
    }

    /// Create an unknown backend error.
    #[must_use]
    pub fn unknown_backend(input: impl Into<String>) -> Self {
        Self::UnknownBackend(input.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::unknown_precision("128");
        assert!(format!("{err}").contains("`128`"));

        let err = ConfigError::UnsupportedPrecision(Precision::Extended);
        assert_eq!(format!("{err}"), "80-bit precision is not supported");

        let err = ConfigError::unknown_simd_mode("sse9");
        assert!(format!("{err}").contains("sse9"));

        let err = ConfigError::unknown_backend("gpu");
        assert_eq!(
            format!("{err}"),
            "unknown backend `gpu`, expected portable, sse2, avx or neon"
        );

        let err = ConfigError::PrecisionMismatch {
            requested: Precision::Single,
            built: Precision::Double,
        };
        assert!(format!("{err}").contains("32-bit"));
        assert!(format!("{err}").contains("64-bit"));

        let err = ConfigError::SimdUnavailable {
            requested: SimdMode::Neon,
            backend: Backend::Portable,
        };
        assert_eq!(
            format!("{err}"),
            "simd mode neon is not available, active backend is portable"
        );
    }
}
