// Copyright 2025 the Bitview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities a host provides to a [`crate::DisplayControl`].
//!
//! A host toolkit exposes three things: the size of the area the content is
//! shown in, a place to apply the render transform, and a place to present
//! pixels. Each is a small trait so any widget system (or a test) can supply
//! it. Closures implement the traits directly.

use alloc::boxed::Box;
use core::fmt;

use bitview_frame::{FrameBuffer, FrameUpdate};
use kurbo::{Affine, Size};

/// Reports the current size of the viewport the content is shown in.
pub trait ViewportSize {
    /// Viewport size in the same logical units as frame sizes.
    fn viewport_size(&self) -> Size;
}

impl ViewportSize for Size {
    fn viewport_size(&self) -> Size {
        *self
    }
}

impl<F: Fn() -> Size> ViewportSize for F {
    fn viewport_size(&self) -> Size {
        self()
    }
}

/// Receives the transform to render the content with.
pub trait RenderTransformSink {
    /// Applies `transform` (content to viewport) to the displayed content.
    fn set_render_transform(&mut self, transform: Affine);
}

impl<F: FnMut(Affine)> RenderTransformSink for F {
    fn set_render_transform(&mut self, transform: Affine) {
        self(transform);
    }
}

/// Receives the pixels to display.
pub trait PixelBufferSink {
    /// Presents `frame`. `update` says whether the buffer is a new
    /// allocation or was rewritten in place.
    fn present(&mut self, frame: &FrameBuffer, update: FrameUpdate);
}

impl<F: FnMut(&FrameBuffer, FrameUpdate)> PixelBufferSink for F {
    fn present(&mut self, frame: &FrameBuffer, update: FrameUpdate) {
        self(frame, update);
    }
}

/// Identifies a part in [`crate::DisplayError::MissingPart`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Part {
    /// The [`ViewportSize`] provider.
    Viewport,
    /// The [`RenderTransformSink`].
    TransformSink,
    /// The [`PixelBufferSink`].
    PixelSink,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Viewport => "viewport",
            Self::TransformSink => "transform sink",
            Self::PixelSink => "pixel sink",
        })
    }
}

/// The set of parts a host wires into a [`crate::DisplayControl`].
///
/// Every part is optional. Missing sinks are skipped; operations that need a
/// missing viewport fail with [`crate::DisplayError::MissingPart`].
#[derive(Default)]
pub struct DisplayParts {
    pub(crate) viewport: Option<Box<dyn ViewportSize>>,
    pub(crate) transform_sink: Option<Box<dyn RenderTransformSink>>,
    pub(crate) pixel_sink: Option<Box<dyn PixelBufferSink>>,
}

impl DisplayParts {
    /// Creates an empty part set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the viewport size provider.
    #[must_use]
    pub fn viewport(mut self, viewport: impl ViewportSize + 'static) -> Self {
        self.viewport = Some(Box::new(viewport));
        self
    }

    /// Sets the render transform sink.
    #[must_use]
    pub fn transform_sink(mut self, sink: impl RenderTransformSink + 'static) -> Self {
        self.transform_sink = Some(Box::new(sink));
        self
    }

    /// Sets the pixel buffer sink.
    #[must_use]
    pub fn pixel_sink(mut self, sink: impl PixelBufferSink + 'static) -> Self {
        self.pixel_sink = Some(Box::new(sink));
        self
    }

    /// Returns `true` if `part` was provided.
    #[must_use]
    pub fn has(&self, part: Part) -> bool {
        match part {
            Part::Viewport => self.viewport.is_some(),
            Part::TransformSink => self.transform_sink.is_some(),
            Part::PixelSink => self.pixel_sink.is_some(),
        }
    }
}

impl fmt::Debug for DisplayParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayParts")
            .field("viewport", &self.viewport.is_some())
            .field("transform_sink", &self.transform_sink.is_some())
            .field("pixel_sink", &self.pixel_sink.is_some())
            .finish()
    }
}
