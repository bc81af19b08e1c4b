// Copyright 2025 the Bitview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitview_frame::{FrameBuffer, FrameBufferUpdater, PixelFormat};
use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

fn frame(w: u32, h: u32, stride: usize) -> FrameBuffer {
    FrameBuffer::with_stride(w, h, stride, PixelFormat::Bgr24).unwrap()
}

fn bench_in_place_vs_replace(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame/apply");

    // Hypothesis: copying into the existing buffer costs about the same as
    // duplicating the frame, minus the allocation, and a differing stride
    // adds little over the single-span copy.
    for (w, h) in [(320_u32, 240_u32), (1280, 720), (1920, 1080)] {
        let tight = PixelFormat::Bgr24.row_bytes(w).unwrap();
        let aligned = PixelFormat::Bgr24.aligned_stride(w + 1).unwrap();
        group.throughput(Throughput::Bytes((tight * h as usize) as u64));
        let label = format!("{w}x{h}");

        let incoming = frame(w, h, tight);
        group.bench_with_input(
            BenchmarkId::new("copy_in_place", &label),
            &incoming,
            |b, incoming| {
                let mut updater = FrameBufferUpdater::new();
                let _ = updater.apply_frame_from(Some(incoming)).unwrap();
                b.iter(|| black_box(updater.apply_frame_from(Some(incoming)).unwrap()));
            },
        );

        let padded = frame(w, h, aligned);
        group.bench_with_input(
            BenchmarkId::new("copy_in_place_strided", &label),
            &padded,
            |b, padded| {
                let mut updater = FrameBufferUpdater::new();
                let _ = updater.apply_new_frame(Some(frame(w, h, tight))).unwrap();
                b.iter(|| black_box(updater.apply_frame_from(Some(padded)).unwrap()));
            },
        );

        let small = frame(16, 16, 48);
        group.bench_with_input(
            BenchmarkId::new("replace", &label),
            &incoming,
            |b, incoming| {
                b.iter_batched(
                    || {
                        let mut updater = FrameBufferUpdater::new();
                        let _ = updater.apply_frame_from(Some(&small)).unwrap();
                        updater
                    },
                    |mut updater| {
                        black_box(updater.apply_frame_from(Some(incoming)).unwrap());
                        updater
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_in_place_vs_replace);
criterion_main!(benches);
