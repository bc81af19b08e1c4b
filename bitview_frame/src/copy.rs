// Copyright 2025 the Bitview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row copies between buffers whose strides may differ.

use crate::{FrameBuffer, FrameError};

/// Shape of a row-by-row copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowLayout {
    /// Bytes of pixel data per row.
    pub row_bytes: usize,
    /// Number of rows.
    pub rows: usize,
}

impl RowLayout {
    /// Bytes a buffer with `stride` must hold for this copy: every full
    /// stride except the last row's padding.
    #[must_use]
    pub fn span(&self, stride: usize) -> Option<usize> {
        match self.rows {
            0 => Some(0),
            rows => (rows - 1)
                .checked_mul(stride)?
                .checked_add(self.row_bytes),
        }
    }
}

/// Copies `layout.rows` rows of `layout.row_bytes` from `src` to `dst`.
///
/// Each side is addressed with its own stride. Both spans are checked against
/// the slice lengths before anything is written, so a failed copy leaves
/// `dst` untouched. Returns the number of pixel bytes copied.
pub fn copy_rows(
    src: &[u8],
    src_stride: usize,
    dst: &mut [u8],
    dst_stride: usize,
    layout: RowLayout,
) -> Result<usize, FrameError> {
    if layout.rows == 0 || layout.row_bytes == 0 {
        return Ok(0);
    }
    if src_stride < layout.row_bytes || dst_stride < layout.row_bytes {
        return Err(FrameError::StrideTooSmall {
            stride: src_stride.min(dst_stride),
            row_bytes: layout.row_bytes,
        });
    }
    let src_span = layout.span(src_stride).ok_or(FrameError::LayoutOverflow)?;
    let dst_span = layout.span(dst_stride).ok_or(FrameError::LayoutOverflow)?;
    check_fits(src_span, src.len())?;
    check_fits(dst_span, dst.len())?;

    if src_stride == dst_stride {
        // Identical pitch: padding is copied along with the pixels.
        dst[..src_span].copy_from_slice(&src[..src_span]);
    } else {
        for (s, d) in src
            .chunks(src_stride)
            .zip(dst.chunks_mut(dst_stride))
            .take(layout.rows)
        {
            d[..layout.row_bytes].copy_from_slice(&s[..layout.row_bytes]);
        }
    }
    Ok(layout.rows * layout.row_bytes)
}

fn check_fits(required: usize, available: usize) -> Result<(), FrameError> {
    if required > available {
        return Err(FrameError::BufferOverrun {
            required,
            available,
        });
    }
    Ok(())
}

/// Copies the pixels of `src` into `dst` in place.
///
/// Both frames must share pixel size and format; strides may differ. The
/// destination keeps its allocation.
pub fn blit(src: &FrameBuffer, dst: &mut FrameBuffer) -> Result<usize, FrameError> {
    if src.pixel_width() != dst.pixel_width()
        || src.pixel_height() != dst.pixel_height()
        || src.format() != dst.format()
    {
        return Err(FrameError::LayoutMismatch {
            src: (src.pixel_width(), src.pixel_height(), src.format()),
            dst: (dst.pixel_width(), dst.pixel_height(), dst.format()),
        });
    }
    let layout = RowLayout {
        row_bytes: src.row_bytes(),
        rows: src.pixel_height() as usize,
    };
    let dst_stride = dst.stride();
    copy_rows(src.pixels(), src.stride(), dst.pixels_mut(), dst_stride, layout)
}
