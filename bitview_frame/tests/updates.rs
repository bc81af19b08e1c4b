// Copyright 2025 the Bitview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for applying frame streams to a `FrameBufferUpdater`.
//!
//! These cover the three update paths, buffer identity across in-place
//! copies, and the placeholder policy.

use bitview_frame::{
    FrameBuffer, FrameBufferUpdater, FrameUpdate, PixelFormat, dimensions_match,
};

/// A frame whose pixel bytes encode `(seed + x + y)` so copies are checkable.
fn pattern(w: u32, h: u32, stride: usize, seed: u8) -> FrameBuffer {
    let mut fb = FrameBuffer::with_stride(w, h, stride, PixelFormat::Bgr24).unwrap();
    for y in 0..h {
        let row = fb.row_mut(y).unwrap();
        for (x, px) in row.chunks_mut(3).enumerate() {
            let v = seed.wrapping_add(x as u8).wrapping_add(y as u8);
            px.copy_from_slice(&[v, v.wrapping_mul(3), !v]);
        }
    }
    fb
}

fn same_pixels(a: &FrameBuffer, b: &FrameBuffer) -> bool {
    (0..a.pixel_height()).all(|y| a.row(y) == b.row(y))
}

#[test]
fn matching_frames_copy_in_place_and_keep_identity() {
    let mut updater = FrameBufferUpdater::new();
    let _ = updater
        .apply_new_frame(Some(pattern(100, 100, 300, 0)))
        .unwrap();
    let backing = updater.current().pixels().as_ptr();
    let generation = updater.generation();

    let next = pattern(100, 100, 300, 42);
    assert_eq!(
        updater.apply_frame_from(Some(&next)),
        Ok(FrameUpdate::CopiedInPlace)
    );
    assert_eq!(updater.current().pixels().as_ptr(), backing);
    assert_eq!(updater.generation(), generation);
    assert!(same_pixels(updater.current(), &next));
}

#[test]
fn in_place_copy_respects_differing_strides() {
    let mut updater = FrameBufferUpdater::new();
    // Tightly packed 101-pixel rows are 303 bytes; the aligned stride is 304.
    let _ = updater
        .apply_new_frame(Some(pattern(101, 37, 303, 1)))
        .unwrap();
    let backing = updater.current().pixels().as_ptr();

    let aligned = PixelFormat::Bgr24.aligned_stride(101).unwrap();
    assert_eq!(aligned, 304);
    let next = pattern(101, 37, aligned, 99);
    assert_eq!(
        updater.apply_new_frame(Some(next.clone())),
        Ok(FrameUpdate::CopiedInPlace)
    );

    let current = updater.current();
    assert_eq!(current.pixels().as_ptr(), backing);
    assert_eq!(current.stride(), 303);
    assert!(same_pixels(current, &next));
}

#[test]
fn different_dimensions_replace_the_buffer() {
    let mut updater = FrameBufferUpdater::new();
    let _ = updater
        .apply_new_frame(Some(pattern(100, 100, 300, 0)))
        .unwrap();
    let old = updater.current().pixels().as_ptr();
    let old_generation = updater.generation();

    let bigger = pattern(200, 150, 600, 5);
    assert_eq!(
        updater.apply_frame_from(Some(&bigger)),
        Ok(FrameUpdate::Replaced)
    );
    assert_ne!(updater.current().pixels().as_ptr(), old);
    assert_ne!(updater.current().pixels().as_ptr(), bigger.pixels().as_ptr());
    assert_eq!(updater.generation(), old_generation + 1);
    assert_eq!(updater.current(), &bigger);
}

#[test]
fn format_or_dpi_change_replaces() {
    let mut updater = FrameBufferUpdater::new();
    let base = FrameBuffer::new(16, 16, PixelFormat::Bgra32).unwrap();
    let _ = updater.apply_frame_from(Some(&base)).unwrap();

    let other_format = FrameBuffer::new(16, 16, PixelFormat::Pbgra32).unwrap();
    assert_eq!(
        updater.apply_frame_from(Some(&other_format)),
        Ok(FrameUpdate::Replaced)
    );

    let hi_dpi = other_format.clone().with_dpi(192.0, 192.0).unwrap();
    assert_eq!(
        updater.apply_frame_from(Some(&hi_dpi)),
        Ok(FrameUpdate::Replaced)
    );
    assert_eq!(updater.current().width(), 8.0);
}

#[test]
fn long_stream_never_reallocates() {
    let mut updater = FrameBufferUpdater::new();
    let _ = updater
        .apply_new_frame(Some(pattern(64, 48, 192, 0)))
        .unwrap();
    let backing = updater.current().pixels().as_ptr();

    for seed in 1..=50_u8 {
        let frame = pattern(64, 48, 192, seed);
        assert_eq!(
            updater.apply_new_frame(Some(frame)),
            Ok(FrameUpdate::CopiedInPlace)
        );
        assert_eq!(updater.current().pixels().as_ptr(), backing);
    }
    assert_eq!(updater.generation(), 1);
}

#[test]
fn absent_frame_shows_placeholder_then_next_frame_is_adopted() {
    let mut updater = FrameBufferUpdater::new();
    let _ = updater
        .apply_new_frame(Some(pattern(10, 10, 30, 0)))
        .unwrap();

    assert_eq!(updater.apply_new_frame(None), Ok(FrameUpdate::Cleared));
    assert!(!updater.has_frame());
    assert_eq!(updater.current(), &FrameBuffer::placeholder());

    let again = pattern(10, 10, 30, 7);
    let ptr = again.pixels().as_ptr();
    assert_eq!(
        updater.apply_new_frame(Some(again)),
        Ok(FrameUpdate::Adopted)
    );
    assert_eq!(updater.current().pixels().as_ptr(), ptr);
}

#[test]
fn dimensions_match_is_reflexive_and_symmetric() {
    let frames = [
        FrameBuffer::new(10, 10, PixelFormat::Bgr24).unwrap(),
        FrameBuffer::with_stride(10, 10, 32, PixelFormat::Bgr24).unwrap(),
        FrameBuffer::new(10, 11, PixelFormat::Bgr24).unwrap(),
        FrameBuffer::new(11, 10, PixelFormat::Bgr24).unwrap(),
        FrameBuffer::new(10, 10, PixelFormat::Rgb24).unwrap(),
        FrameBuffer::new(10, 10, PixelFormat::Bgr24)
            .unwrap()
            .with_dpi(120.0, 96.0)
            .unwrap(),
    ];
    for a in &frames {
        assert!(dimensions_match(a, a));
        for b in &frames {
            assert_eq!(dimensions_match(a, b), dimensions_match(b, a));
        }
    }
    assert!(dimensions_match(&frames[0], &frames[1]));
    assert!(!dimensions_match(&frames[0], &frames[5]));
}
