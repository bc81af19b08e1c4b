// Copyright 2025 the Bitview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitview_transform::{TransformEngine, ZoomConfig};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};

fn bench_pointer_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform/pointer");

    // A drag of 1000 moves followed by a burst of wheel notches, as a
    // high-rate mouse would deliver them.
    let moves: Vec<Point> = (0..1000)
        .map(|i| Point::new(f64::from(i) * 0.75, f64::from(i % 37)))
        .collect();
    group.bench_function("drag_1000_moves", |b| {
        let mut engine = TransformEngine::default();
        b.iter(|| {
            engine.begin_drag(Point::ZERO, Vec2::ZERO);
            for &p in &moves {
                black_box(engine.drag_to(p));
            }
            engine.end_drag();
        });
    });

    group.bench_function("wheel_in_out_16", |b| {
        let mut engine = TransformEngine::new(ZoomConfig::new(64.0, 1.25).unwrap());
        let anchor = Point::new(400.0, 300.0);
        b.iter(|| {
            for _ in 0..16 {
                black_box(engine.wheel(120.0, anchor));
            }
            for _ in 0..16 {
                black_box(engine.wheel(-120.0, anchor));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pointer_stream);
criterion_main!(benches);
