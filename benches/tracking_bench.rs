use criterion::{black_box, criterion_group, criterion_main, Criterion};
use follow_cam::camera::Camera;
use follow_cam::scene::{SceneTargets, TargetTransform};
use follow_cam::tracking::{clamp_speed, ChaseTracker, OrbitTracker, PoseTracker};
use glam::{Quat, Vec3};

fn clamp_benchmark(c: &mut Criterion) {
    c.bench_function("clamp_speed", |b| {
        b.iter(|| black_box(clamp_speed(black_box(35.0), black_box(20.0))))
    });
}

fn chase_update_benchmark(c: &mut Criterion) {
    let mut scene = SceneTargets::new();
    let yaw_target = scene.insert(TargetTransform::at(Vec3::new(10.0, 0.0, -4.0)).with_yaw(0.6));
    let quat_target = scene.insert(
        TargetTransform::at(Vec3::new(10.0, 0.0, -4.0)).with_quaternion(Quat::from_rotation_y(0.6)),
    );

    let mut group = c.benchmark_group("chase_update");
    for (name, id) in [("scalar_yaw", yaw_target), ("quaternion", quat_target)] {
        let chase = ChaseTracker::new(Some(id));
        let mut camera = Camera::default();
        group.bench_function(name, |b| {
            b.iter(|| chase.update(black_box(&mut camera), black_box(&scene)))
        });
    }
    group.finish();
}

fn orbit_update_benchmark(c: &mut Criterion) {
    let mut scene = SceneTargets::new();
    let id = scene.insert(TargetTransform::at(Vec3::new(3.0, 1.0, 2.0)));
    let orbit = OrbitTracker::new(0.8, 0.3, 15.0, Some(id));
    let mut camera = Camera::default();

    c.bench_function("orbit_update", |b| {
        b.iter(|| orbit.update(black_box(&mut camera), black_box(&scene)))
    });
}

criterion_group!(
    benches,
    clamp_benchmark,
    chase_update_benchmark,
    orbit_update_benchmark
);
criterion_main!(benches);
