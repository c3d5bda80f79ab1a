//! Kernel operations must never touch the heap.
//!
//! Run with: cargo test --features dhat-heap --test no_alloc

use std::hint::black_box;

use sol::geometry::{BoundingBox, Ray, Segment};
use sol::math::{Matrix, Vector, rotation};

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

// dhat allows one profiler per process, so everything is checked in a single test.
#[test]
fn kernel_operations_do_not_allocate() {
    let _profiler = dhat::Profiler::builder().testing().build();

    let a = black_box(Vector::<f64, 3>::new(1.0, 2.0, 3.0));
    let b = black_box(Vector::<f64, 3>::new(-4.0, 0.5, 2.0));
    let v = (a + b) * a - b / a;
    let v = v.fma(a, b).normalize().cross(b).project(a);
    black_box(v.dot(a) + v.length() + a.angle(b));

    let f = black_box(Vector::<f32, 4>::new(1.0, 2.0, 3.0, 4.0));
    black_box((f.mul_scalar(2.0) - 1.0_f32).sum());

    let m = black_box(Matrix::<f64, 4>::rotation_z(30.0));
    let t = Matrix::<f64, 4>::translation(1.0, 2.0, 3.0);
    black_box(m.dot(&t).transpose().mul_vector(a.extend(1.0)));

    let q = rotation::quat_from_axis(black_box(Vector::<f64, 3>::new(0.0, 1.0, 0.0)), 45.0);
    black_box(rotation::quat_to_axis_angle(rotation::quat_mul(q, q)));
    black_box(a.rotate_quat(q));

    let bbox = BoundingBox::new(Vector::<f64, 3>::zero(), Vector::<f64, 3>::splat(10.0));
    black_box(bbox.contains(a) && bbox.intersects(&(bbox + a)));
    black_box(Ray::new(a, b).normalize().point_at(2.0));
    black_box(Segment::new(a.xy(), b.xy()).contains(a.xy(), 1e-9));

    let stats = dhat::HeapStats::get();
    dhat::assert_eq!(stats.total_blocks, 0);
}
