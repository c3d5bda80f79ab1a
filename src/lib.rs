//! Sol - Precision-Generic Vector Math
//!
//! Sol is a small linear-algebra kernel for graphics, physics and geometry
//! code. Vectors, matrices and rotations are generic over the scalar width
//! and lane count, and every elementwise operation runs through either a
//! portable loop or the platform's SIMD registers, selected at compile time.
//!
//! # Features
//! - **Vectors**: 2, 3 and 4 lanes with the full arithmetic surface, dot and
//!   cross products, projection, rotation and dimension casts
//! - **Matrices**: 2x2, 3x3 and 4x4 with elementwise arithmetic, the matrix
//!   product and transform builders
//! - **Rotations**: axis-angle and quaternion conversion and application
//! - **Geometry**: rays, segments, bounding boxes and spheres
//! - **Configuration**: precision and instruction set are cargo features;
//!   [`Config::current`] reports what was compiled in
//!
//! # Architecture
//! - `math/`: scalars, lane backends, vectors, matrices and rotations
//! - `geometry/`: composites built from vectors
//! - `config`: build configuration and its validation
//! - `error`: the configuration error type
//!
//! # Usage
//! ```
//! use sol::math::{Vec3, Vector};
//!
//! let a: Vec3<f64> = Vector::<f64, 3>::new(1.0, 0.0, 0.0);
//! let b = Vector::<f64, 3>::new(0.0, 1.0, 0.0);
//! assert_eq!(a.cross(b), Vector::<f64, 3>::new(0.0, 0.0, 1.0));
//! assert_eq!((a + b).dot(b), 1.0);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod geometry;
pub mod math;

pub use config::Config;
pub use error::{ConfigError, ConfigResult};

/// Scalar width selected for this build: `f64`, or `f32` with the `f32` feature.
#[cfg(not(feature = "f32"))]
pub type Float = f64;

/// Scalar width selected for this build: `f64`, or `f32` with the `f32` feature.
#[cfg(feature = "f32")]
pub type Float = f32;
