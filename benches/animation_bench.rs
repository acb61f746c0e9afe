//! Criterion benchmarks for easing curves and camera transitions.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use showroom::animation::{EasingFunction, TransitionSession};
use showroom::camera::{
    CameraChoreographer, CameraPose, ControlsSync, OrbitController,
    ViewId, ViewPresetTable,
};
use showroom::camera::core::Camera;
use showroom::options::{CameraOptions, OrbitOptions};
use web_time::{Duration, Instant};

fn easing_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("easing");
    for f in EasingFunction::ALL {
        let _ = group.bench_function(format!("{f:?}"), |b| {
            b.iter(|| black_box(f.evaluate(black_box(0.37))))
        });
    }
    group.finish();
}

fn transition_sample_benchmark(c: &mut Criterion) {
    let start = Instant::now();
    let session = TransitionSession::new(
        CameraPose::new(Vec3::new(3.0, -1.0, 4.0), Vec3::ZERO),
        CameraPose::new(Vec3::new(6.5, 0.2, 0.0), Vec3::ZERO),
        start,
        Duration::from_millis(1500),
        EasingFunction::CubicInOut,
    );
    let now = start + Duration::from_millis(600);

    let _ = c.bench_function("transition_sample", |b| {
        b.iter(|| black_box(session.sample(black_box(now))))
    });
}

fn choreographer_benchmark(c: &mut Criterion) {
    let presets = ViewPresetTable::builtin();
    let Some(pose) = presets.lookup(ViewId::Default) else {
        return;
    };
    let mut camera = Camera::from_options(&CameraOptions::default(), pose);
    let mut orbit = OrbitController::new(&OrbitOptions::default(), &camera);
    let mut choreographer = CameraChoreographer::new(ViewId::Default, pose);
    let views = [ViewId::Side, ViewId::Top, ViewId::RearQuarter, ViewId::Front];

    let start = Instant::now();
    let mut frame = 0_u64;
    let _ = c.bench_function("observe_and_tick", |b| {
        b.iter(|| {
            frame += 1;
            let now = start + Duration::from_millis(frame * 16);
            if frame % 8 == 0 {
                let view = views[(frame / 8) as usize % views.len()];
                let live = choreographer.live_pose();
                let _ = choreographer.observe(view, &presets, live, now);
            }
            let mut sync = ControlsSync::new(&mut orbit);
            black_box(choreographer.tick(now, &mut camera, &mut sync))
        })
    });
}

criterion_group!(
    benches,
    easing_benchmark,
    transition_sample_benchmark,
    choreographer_benchmark
);
criterion_main!(benches);
