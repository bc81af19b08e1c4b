// Copyright 2025 the Bitview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bitview Display: a headless pan/zoom bitmap display control.
//!
//! [`DisplayControl`] is everything an image-viewer widget does apart from
//! drawing. The host toolkit provides three parts ([`DisplayParts`]):
//! - a [`ViewportSize`] reporting the size of the display area,
//! - a [`RenderTransformSink`] that applies the content transform,
//! - a [`PixelBufferSink`] that presents pixels.
//!
//! The host forwards pointer events ([`InputEvent`]) and toolbar actions
//! ([`Command`]) and hands over new frames as they are produced. The control
//! keeps the transform in a [`bitview_transform::TransformEngine`] and the
//! pixels in a [`bitview_frame::FrameBufferUpdater`].
//!
//! ## Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use bitview_display::{Command, DisplayControl, DisplayParts, InputEvent};
//! use bitview_frame::{FrameBuffer, PixelFormat};
//! use bitview_transform::ZoomConfig;
//! use kurbo::{Affine, Point, Size};
//!
//! let applied = Rc::new(Cell::new(Affine::IDENTITY));
//! let sink = applied.clone();
//! let parts = DisplayParts::new()
//!     .viewport(Size::new(100.0, 100.0))
//!     .transform_sink(move |t: Affine| sink.set(t));
//!
//! let mut display = DisplayControl::new(ZoomConfig::default(), parts);
//! let frame = FrameBuffer::new(400, 200, PixelFormat::Bgr24).unwrap();
//! display.set_frame(Some(frame)).unwrap();
//!
//! display.execute(Command::FitToView).unwrap();
//! assert_eq!(display.scale_ratio(), 0.25);
//! assert_eq!(applied.get(), Affine::new([0.25, 0.0, 0.0, 0.25, 0.0, 25.0]));
//!
//! // Drag the image 10 px down.
//! display.handle_input(InputEvent::PointerDown(Point::new(50.0, 50.0)));
//! display.handle_input(InputEvent::PointerMove(Point::new(50.0, 60.0)));
//! display.handle_input(InputEvent::PointerUp);
//! assert_eq!(display.transform().offset.y, 35.0);
//! ```
//!
//! The control is single-threaded: frames produced on other threads must be
//! handed to the thread that owns it.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod control;
mod error;
mod input;
mod parts;

pub use control::DisplayControl;
pub use error::DisplayError;
pub use input::{Command, InputEvent};
pub use parts::{DisplayParts, Part, PixelBufferSink, RenderTransformSink, ViewportSize};
