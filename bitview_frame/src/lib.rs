// Copyright 2025 the Bitview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bitview Frame: backing buffers for a bitmap display.
//!
//! A display that shows a stream of frames (camera capture, decoded video,
//! a simulation) should not reallocate its backing buffer for every frame.
//! This crate provides:
//! - [`FrameBuffer`]: validated pixel storage with stride, pixel format and
//!   a logical (DPI-aware) size.
//! - [`dimensions_match`]: whether two frames can exchange pixels in place.
//! - [`copy::blit`]: a stride-respecting row copy with overrun checks.
//! - [`FrameBufferUpdater`]: applies each new frame in the cheapest valid
//!   way and keeps a placeholder on screen when there is no frame.
//!
//! ## Example
//!
//! ```rust
//! use bitview_frame::{FrameBuffer, FrameBufferUpdater, FrameUpdate, PixelFormat};
//!
//! let mut updater = FrameBufferUpdater::new();
//!
//! let first = FrameBuffer::new(100, 100, PixelFormat::Bgr24).unwrap();
//! assert_eq!(updater.apply_new_frame(Some(first)), Ok(FrameUpdate::Adopted));
//! let backing = updater.current().pixels().as_ptr();
//!
//! // Same layout: pixels are copied, the backing allocation stays.
//! let next = FrameBuffer::new(100, 100, PixelFormat::Bgr24).unwrap();
//! assert_eq!(updater.apply_new_frame(Some(next)), Ok(FrameUpdate::CopiedInPlace));
//! assert_eq!(updater.current().pixels().as_ptr(), backing);
//!
//! // Different layout: the buffer is replaced.
//! let bigger = FrameBuffer::new(200, 150, PixelFormat::Bgr24).unwrap();
//! assert_eq!(updater.apply_new_frame(Some(bigger)), Ok(FrameUpdate::Replaced));
//!
//! // No frame: a 1x1 placeholder is shown.
//! assert_eq!(updater.apply_new_frame(None), Ok(FrameUpdate::Cleared));
//! assert_eq!(updater.current().pixel_width(), 1);
//! ```
//!
//! Everything here runs synchronously on the caller's thread; frames made
//! elsewhere must be handed over before they are applied.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod buffer;
pub mod copy;
mod error;
mod format;
mod updater;

pub use buffer::{FrameBuffer, REFERENCE_DPI, dimensions_match};
pub use error::FrameError;
pub use format::PixelFormat;
pub use updater::{FrameBufferUpdater, FrameUpdate, UpdatePath, plan_update};
