// Copyright 2025 the Bitview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::PixelFormat;

/// Error returned when a frame buffer layout is rejected or a copy would not fit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameError {
    /// Width or height is zero.
    EmptyDimensions {
        /// Requested pixel width.
        width: u32,
        /// Requested pixel height.
        height: u32,
    },
    /// The stride is shorter than one row of pixels.
    StrideTooSmall {
        /// Requested stride in bytes.
        stride: usize,
        /// Bytes needed for one row.
        row_bytes: usize,
    },
    /// The pixel data does not cover `stride * height` bytes.
    DataTooShort {
        /// Length of the supplied data.
        len: usize,
        /// Length required by the layout.
        required: usize,
    },
    /// The layout size does not fit in `usize`.
    LayoutOverflow,
    /// A DPI value was zero, negative or not finite.
    InvalidDpi {
        /// Horizontal DPI.
        x: f64,
        /// Vertical DPI.
        y: f64,
    },
    /// Source and destination pixel layouts differ, so rows cannot be copied.
    LayoutMismatch {
        /// Source pixel size and format.
        src: (u32, u32, PixelFormat),
        /// Destination pixel size and format.
        dst: (u32, u32, PixelFormat),
    },
    /// A copy would run past the end of a buffer.
    ///
    /// This is checked before any byte is written and indicates that the
    /// caller supplied inconsistent buffer metadata.
    BufferOverrun {
        /// Bytes the copy needs to touch.
        required: usize,
        /// Bytes the buffer actually holds.
        available: usize,
    },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDimensions { width, height } => {
                write!(f, "frame dimensions {width}x{height} are empty")
            }
            Self::StrideTooSmall { stride, row_bytes } => {
                write!(f, "stride {stride} is shorter than a {row_bytes}-byte row")
            }
            Self::DataTooShort { len, required } => {
                write!(f, "pixel data is {len} bytes, layout needs {required}")
            }
            Self::LayoutOverflow => f.write_str("frame layout size overflows"),
            Self::InvalidDpi { x, y } => write!(f, "invalid dpi {x}x{y}"),
            Self::LayoutMismatch { src, dst } => write!(
                f,
                "cannot copy {}x{} {:?} pixels into {}x{} {:?} buffer",
                src.0, src.1, src.2, dst.0, dst.1, dst.2
            ),
            Self::BufferOverrun {
                required,
                available,
            } => write!(
                f,
                "copy of {required} bytes overruns a {available}-byte buffer"
            ),
        }
    }
}

impl core::error::Error for FrameError {}
