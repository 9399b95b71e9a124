// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the timeline hover and drag paths.
//!
//! Every pointer move over the timeline runs through the scrub engine, so
//! these paths must stay cheap.

use criterion::{criterion_group, criterion_main, Criterion};
use scrubline::player::scrub::{Context, Message, ScrubEngine};
use scrubline::player::{PreviewSource, TimelineBounds};
use std::hint::black_box;

const BOUNDS: TimelineBounds = TimelineBounds {
    left: 0.0,
    width: 1280.0,
};

const PLAYING: Context = Context {
    duration: Some(5_400.0),
    paused: false,
};

/// Measures a sweep of hover moves across the whole timeline.
fn bench_hover(c: &mut Criterion) {
    let mut group = c.benchmark_group("scrub_engine");

    group.bench_function("hover_sweep", |b| {
        let mut engine = ScrubEngine::new(Some(PreviewSource::new("previews")));
        b.iter(|| {
            for step in 0..128u16 {
                let msg = Message::Moved {
                    x: f32::from(step) * 10.0,
                    bounds: BOUNDS,
                    inside: true,
                };
                black_box(engine.handle(msg, PLAYING));
            }
        });
    });

    group.finish();
}

/// Measures a full press, drag and release cycle.
fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("scrub_engine");

    group.bench_function("drag_cycle", |b| {
        let mut engine = ScrubEngine::new(Some(PreviewSource::new("previews")));
        b.iter(|| {
            engine.handle(
                Message::Pressed {
                    x: 100.0,
                    bounds: BOUNDS,
                },
                PLAYING,
            );
            for step in 0..32u16 {
                let msg = Message::Moved {
                    x: f32::from(step) * 40.0,
                    bounds: BOUNDS,
                    inside: step < 30,
                };
                engine.handle(msg, PLAYING);
            }
            black_box(engine.handle(
                Message::Released {
                    x: 640.0,
                    bounds: BOUNDS,
                    inside: true,
                },
                PLAYING,
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_hover, bench_drag);
criterion_main!(benches);
