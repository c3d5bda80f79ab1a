//! Sol - build report
//!
//! Prints the configuration this copy of the library was compiled with and
//! a few sample values through the debug-print surface.
//!
//! # Usage
//! `sol` prints the report. `sol <precision> [simd]` additionally asserts the
//! build: `sol 64 auto` exits with status 1 unless the library is 64-bit and
//! SIMD accelerated. Set `RUST_LOG=debug` to see the configuration log.

#![warn(missing_docs)]

use std::process::ExitCode;

use sol::geometry::{Box2, Ray3, Segment2, Sphere3};
use sol::math::{Mat3, Quat, Vec2, Vec3, Vec4, rotation};
use sol::{Config, ConfigResult};
use tracing_subscriber::EnvFilter;

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

/// Entry point for the `sol` binary.
///
/// Installs a `tracing` subscriber filtered by `RUST_LOG`, checks any
/// requirements given on the command line, then prints the report.
fn main() -> ExitCode {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::current();
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = check_requirements(config, &args) {
        eprintln!("sol: {err}");
        return ExitCode::FAILURE;
    }

    println!("{config}");
    println!();
    print_samples();
    ExitCode::SUCCESS
}

/// Parses `[precision] [simd]` and asserts each against the build.
fn check_requirements(config: &Config, args: &[String]) -> ConfigResult<()> {
    if let Some(precision) = args.first() {
        config.require_precision(precision.parse()?)?;
    }
    if let Some(mode) = args.get(1) {
        config.require_simd(mode.parse()?)?;
    }
    Ok(())
}

fn print_samples() {
    let a: Vec3 = Vec3::new(1.0, 2.0, 3.0);
    let b: Vec3 = Vec3::new(-2.0, 0.5, 4.0);
    println!("a · b = {}", a.dot(b));
    println!("a × b:");
    a.cross(b).print();

    let turned: Vec2 = Vec2::new(1.0, 0.0).rotate(90.0);
    println!("(1, 0) rotated 90°:");
    turned.print();

    let q: Quat = rotation::quat_from_axis(Vec3::new(0.0, 0.0, 1.0), 45.0);
    println!("quaternion for 45° about z:");
    q.print();
    println!("back to axis-angle:");
    rotation::quat_to_axis_angle(q).print();

    let axis_angle: Vec4 = Vec4::new(0.0, 1.0, 0.0, 30.0);
    println!("rotation matrix for 30° about y:");
    Mat3::rotation(axis_angle).print();

    println!("ray:");
    Ray3::new(a, b).normalize().print();
    println!("segment:");
    Segment2::new(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)).print();
    println!("box:");
    Box2::from_vector(Vec2::splat(10.0)).print();
    println!("sphere:");
    Sphere3::new(a, 2.5).print();
}
