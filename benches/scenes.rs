use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cosmic_backdrop::core::{Canvas, DrawOp, Frame, OffscreenTarget, RefreshTicker, RenderHost};
use cosmic_backdrop::math::Color;
use cosmic_backdrop::scenes::SceneKind;
use glam::Vec2;

/// Benchmark: one full frame (draw + raster) per scene at 1080p
fn bench_scene_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_frame");

    for kind in SceneKind::ALL {
        let target = OffscreenTarget::new(1920.0, 1080.0);
        let mut host = RenderHost::mount(&target, kind.create(7), Box::new(RefreshTicker))
            .expect("offscreen target always has a context");
        host.pointer_moved(Vec2::new(700.0, 400.0));

        group.bench_with_input(BenchmarkId::new("1080p", format!("{:?}", kind)), &kind, |b, _| {
            b.iter(|| black_box(host.frame()));
        });
    }

    group.finish();
}

/// Benchmark: queueing only, no raster
fn bench_scene_draw_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_draw");

    for kind in SceneKind::ALL {
        let mut scene = kind.create(7);
        let mut canvas = Canvas::new(1, 1);
        let mut number = 0u64;

        group.bench_with_input(BenchmarkId::new("queue", format!("{:?}", kind)), &kind, |b, _| {
            b.iter(|| {
                number += 1;
                let frame = Frame::new(number, 1920.0, 1080.0, number as f32 * 0.01, Vec2::new(960.0, 540.0));
                scene.draw(&mut canvas, &frame);
                let queued = canvas.pending().len();
                canvas.discard_pending();
                black_box(queued)
            });
        });
    }

    group.finish();
}

/// Benchmark: raster primitives at growing density
fn bench_raster_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("raster");

    for scale in [1.0f32, 2.0, 3.0].iter() {
        group.bench_with_input(BenchmarkId::new("circles", scale), scale, |b, &scale| {
            let mut canvas = Canvas::with_scale((800.0 * scale) as u32, (600.0 * scale) as u32, scale);
            b.iter(|| {
                for i in 0..500 {
                    let t = i as f32;
                    canvas.push(DrawOp::Circle {
                        cx: (t * 37.0) % 800.0,
                        cy: (t * 53.0) % 600.0,
                        radius: 1.0 + (t % 5.0),
                        color: Color::rgba(0, 247, 255, 0.6),
                    });
                }
                canvas.flush();
            });
        });

        group.bench_with_input(BenchmarkId::new("trail_fill", scale), scale, |b, &scale| {
            let mut canvas = Canvas::with_scale((800.0 * scale) as u32, (600.0 * scale) as u32, scale);
            b.iter(|| {
                canvas.push(DrawOp::Fill(Color::rgba(5, 5, 8, 0.2)));
                canvas.flush();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scene_frames, bench_scene_draw_calls, bench_raster_primitives);
criterion_main!(benches);
