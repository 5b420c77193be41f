use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use endless_flight::config::WaveConfig;
use endless_flight::frame::FrameInfo;
use endless_flight::traits::{Intent, NullSink};
use endless_flight::world::{Prop, PropKind, WorldRecenterer};
use endless_flight::{ControlState, FrameDriver, OceanMesh, SimConfig, WaveAnimator};
use glam::Vec3;

/// Benchmark: One full frame over the default scenery
fn bench_driver_step(c: &mut Criterion) {
    let mut driver = FrameDriver::new(&SimConfig::default()).unwrap();
    let mut controls = ControlState::new();
    controls.set_intent(Intent::ThrustUp, true);
    controls.set_intent(Intent::YawLeft, true);
    let mut number = 0u64;

    c.bench_function("driver_step", |b| {
        b.iter(|| {
            let frame = FrameInfo::new(number, number as f32 / 60.0, 1.0 / 60.0);
            number += 1;
            black_box(driver.step(&controls, frame, &mut NullSink).unwrap())
        })
    });
}

/// Benchmark: Wave rewrite at several ocean resolutions
fn bench_wave_tick(c: &mut Criterion) {
    let waves = WaveAnimator::new(&WaveConfig::default());
    let mut group = c.benchmark_group("wave_tick");

    for segments in [25usize, 50, 100].iter() {
        let mut mesh = OceanMesh::grid(15000.0, *segments, Vec3::new(0.0, -800.0, 0.0));
        let mut t = 0.0f32;
        group.bench_with_input(BenchmarkId::new("segments", segments), segments, |b, _| {
            b.iter(|| {
                t += 1.0 / 60.0;
                waves.tick(black_box(&mut mesh), black_box(t)).unwrap()
            })
        });
    }

    group.finish();
}

/// Benchmark: Recentering a crowded world
fn bench_recenter(c: &mut Criterion) {
    let mut group = c.benchmark_group("recenter");

    for count in [100usize, 1000, 10000].iter() {
        let mut world = WorldRecenterer::new();
        for i in 0..*count {
            let offset = (i as f32 * 37.0) % 6000.0 - 3000.0;
            world
                .register(Prop::new(PropKind::Cloud, Vec3::new(offset, 500.0, -offset)), 3000.0)
                .unwrap();
        }
        group.bench_with_input(BenchmarkId::new("objects", count), count, |b, _| {
            b.iter(|| world.apply(black_box(Vec3::new(3.0, 0.1, -7.0))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_driver_step, bench_wave_tick, bench_recenter);
criterion_main!(benches);
