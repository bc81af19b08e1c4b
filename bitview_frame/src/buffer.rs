// Copyright 2025 the Bitview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Size;

use crate::{FrameError, PixelFormat};

/// Reference DPI at which one logical unit equals one pixel.
pub const REFERENCE_DPI: f64 = 96.0;

/// Pixel storage plus the layout needed to interpret it.
///
/// A frame has two sizes: the pixel grid (`pixel_width` × `pixel_height`)
/// and a logical size in device-independent units used for layout. They agree
/// at [`REFERENCE_DPI`]; [`FrameBuffer::with_dpi`] derives the logical size for
/// other resolutions.
///
/// Rows are `stride` bytes apart and the data always covers at least
/// `stride * pixel_height` bytes. The layout is validated on construction
/// and cannot be changed afterwards; only pixel bytes are mutable.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    logical_size: Size,
    pixel_width: u32,
    pixel_height: u32,
    stride: usize,
    format: PixelFormat,
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Creates a zero-filled frame with tightly packed rows.
    pub fn new(pixel_width: u32, pixel_height: u32, format: PixelFormat) -> Result<Self, FrameError> {
        let stride = format
            .row_bytes(pixel_width)
            .ok_or(FrameError::LayoutOverflow)?;
        Self::with_stride(pixel_width, pixel_height, stride, format)
    }

    /// Creates a zero-filled frame with an explicit row stride.
    pub fn with_stride(
        pixel_width: u32,
        pixel_height: u32,
        stride: usize,
        format: PixelFormat,
    ) -> Result<Self, FrameError> {
        let required = required_len(pixel_width, pixel_height, stride, format)?;
        Ok(Self::from_parts(
            pixel_width,
            pixel_height,
            stride,
            format,
            vec![0; required],
        ))
    }

    /// Wraps existing pixel data.
    ///
    /// `data` must hold at least `stride * pixel_height` bytes; any excess is
    /// kept as spare capacity and never read.
    pub fn from_pixels(
        pixel_width: u32,
        pixel_height: u32,
        stride: usize,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> Result<Self, FrameError> {
        let required = required_len(pixel_width, pixel_height, stride, format)?;
        if data.len() < required {
            return Err(FrameError::DataTooShort {
                len: data.len(),
                required,
            });
        }
        Ok(Self::from_parts(pixel_width, pixel_height, stride, format, data))
    }

    /// The 1×1 black BGR24 frame shown when no content is available.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::from_parts(1, 1, 4, PixelFormat::Bgr24, vec![0; 4])
    }

    /// Returns this frame with its logical size derived from `dpi_x`/`dpi_y`.
    pub fn with_dpi(self, dpi_x: f64, dpi_y: f64) -> Result<Self, FrameError> {
        let valid = |d: f64| d.is_finite() && d > 0.0;
        if !valid(dpi_x) || !valid(dpi_y) {
            return Err(FrameError::InvalidDpi { x: dpi_x, y: dpi_y });
        }
        let logical_size = Size::new(
            f64::from(self.pixel_width) * REFERENCE_DPI / dpi_x,
            f64::from(self.pixel_height) * REFERENCE_DPI / dpi_y,
        );
        Ok(Self {
            logical_size,
            ..self
        })
    }

    fn from_parts(
        pixel_width: u32,
        pixel_height: u32,
        stride: usize,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> Self {
        Self {
            logical_size: Size::new(f64::from(pixel_width), f64::from(pixel_height)),
            pixel_width,
            pixel_height,
            stride,
            format,
            data,
        }
    }

    /// Size in device-independent units.
    #[must_use]
    pub fn logical_size(&self) -> Size {
        self.logical_size
    }

    /// Logical width in device-independent units.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.logical_size.width
    }

    /// Logical height in device-independent units.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.logical_size.height
    }

    /// Width of the pixel grid.
    #[must_use]
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    /// Height of the pixel grid.
    #[must_use]
    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    /// Byte distance between the starts of consecutive rows.
    #[must_use]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Pixel format.
    #[must_use]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Bytes of pixel data in one row, excluding padding.
    #[must_use]
    pub fn row_bytes(&self) -> usize {
        // Validated at construction.
        self.pixel_width as usize * self.format.bytes_per_pixel()
    }

    /// Allocated length of the pixel storage in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Raw pixel storage, including row padding.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw pixel storage, including row padding.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Pixel bytes of row `y`, without padding.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.pixel_height {
            return None;
        }
        let start = y as usize * self.stride;
        self.data.get(start..start + self.row_bytes())
    }

    /// Mutable pixel bytes of row `y`, without padding.
    pub fn row_mut(&mut self, y: u32) -> Option<&mut [u8]> {
        if y >= self.pixel_height {
            return None;
        }
        let start = y as usize * self.stride;
        let end = start + self.row_bytes();
        self.data.get_mut(start..end)
    }

    /// Returns `true` if `self` and `other` can exchange pixels in place.
    ///
    /// See [`dimensions_match`].
    #[must_use]
    pub fn same_dimensions(&self, other: &Self) -> bool {
        dimensions_match(self, other)
    }
}

/// Returns `true` iff both frames share logical size, pixel size and format.
///
/// Stride is deliberately not compared: rows may be padded differently and
/// still be copied row by row.
#[must_use]
pub fn dimensions_match(a: &FrameBuffer, b: &FrameBuffer) -> bool {
    a.logical_size == b.logical_size
        && a.pixel_width == b.pixel_width
        && a.pixel_height == b.pixel_height
        && a.format == b.format
}

fn required_len(
    pixel_width: u32,
    pixel_height: u32,
    stride: usize,
    format: PixelFormat,
) -> Result<usize, FrameError> {
    if pixel_width == 0 || pixel_height == 0 {
        return Err(FrameError::EmptyDimensions {
            width: pixel_width,
            height: pixel_height,
        });
    }
    let row_bytes = format
        .row_bytes(pixel_width)
        .ok_or(FrameError::LayoutOverflow)?;
    if stride < row_bytes {
        return Err(FrameError::StrideTooSmall { stride, row_bytes });
    }
    usize::try_from(pixel_height)
        .ok()
        .and_then(|h| h.checked_mul(stride))
        .ok_or(FrameError::LayoutOverflow)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::Size;

    use super::{FrameBuffer, dimensions_match};
    use crate::{FrameError, PixelFormat};

    #[test]
    fn new_packs_rows_tightly() {
        let fb = FrameBuffer::new(10, 4, PixelFormat::Bgr24).unwrap();
        assert_eq!(fb.stride(), 30);
        assert_eq!(fb.capacity(), 120);
        assert_eq!(fb.logical_size(), Size::new(10.0, 4.0));
    }

    #[test]
    fn layout_validation() {
        assert_eq!(
            FrameBuffer::new(0, 4, PixelFormat::Gray8),
            Err(FrameError::EmptyDimensions {
                width: 0,
                height: 4
            })
        );
        assert_eq!(
            FrameBuffer::with_stride(10, 4, 29, PixelFormat::Bgr24),
            Err(FrameError::StrideTooSmall {
                stride: 29,
                row_bytes: 30
            })
        );
        assert_eq!(
            FrameBuffer::from_pixels(2, 2, 8, PixelFormat::Bgr24, vec![0; 15]),
            Err(FrameError::DataTooShort {
                len: 15,
                required: 16
            })
        );
        assert_eq!(
            FrameBuffer::with_stride(1, u32::MAX, usize::MAX, PixelFormat::Gray8),
            Err(FrameError::LayoutOverflow)
        );
    }

    #[test]
    fn rows_skip_padding() {
        let data = vec![1, 2, 3, 0xAA, 4, 5, 6, 0xAA];
        let mut fb = FrameBuffer::from_pixels(1, 2, 4, PixelFormat::Bgr24, data).unwrap();
        assert_eq!(fb.row(0), Some(&[1, 2, 3][..]));
        assert_eq!(fb.row(1), Some(&[4, 5, 6][..]));
        assert_eq!(fb.row(2), None);

        fb.row_mut(1).unwrap().copy_from_slice(&[7, 8, 9]);
        assert_eq!(fb.pixels(), &[1, 2, 3, 0xAA, 7, 8, 9, 0xAA]);
    }

    #[test]
    fn dpi_scales_logical_size() {
        let fb = FrameBuffer::new(192, 96, PixelFormat::Gray8)
            .unwrap()
            .with_dpi(192.0, 48.0)
            .unwrap();
        assert_eq!(fb.logical_size(), Size::new(96.0, 192.0));
        assert_eq!(fb.pixel_width(), 192);

        let fb = FrameBuffer::new(1, 1, PixelFormat::Gray8).unwrap();
        assert!(matches!(
            fb.with_dpi(0.0, 96.0),
            Err(FrameError::InvalidDpi { .. })
        ));
    }

    #[test]
    fn placeholder_is_minimal_bgr24() {
        let p = FrameBuffer::placeholder();
        assert_eq!((p.pixel_width(), p.pixel_height()), (1, 1));
        assert_eq!(p.format(), PixelFormat::Bgr24);
        assert!(p.capacity() >= p.row_bytes());
    }

    #[test]
    fn dimensions_match_ignores_stride_only() {
        let a = FrameBuffer::new(5, 5, PixelFormat::Bgr24).unwrap();
        let b = FrameBuffer::with_stride(5, 5, 16, PixelFormat::Bgr24).unwrap();
        let c = FrameBuffer::new(5, 5, PixelFormat::Rgb24).unwrap();
        let d = FrameBuffer::new(5, 6, PixelFormat::Bgr24).unwrap();
        let e = a.clone().with_dpi(192.0, 192.0).unwrap();

        assert!(dimensions_match(&a, &a));
        assert!(dimensions_match(&a, &b) && dimensions_match(&b, &a));
        assert!(!dimensions_match(&a, &c) && !dimensions_match(&c, &a));
        assert!(!dimensions_match(&a, &d) && !dimensions_match(&d, &a));
        assert!(!dimensions_match(&a, &e) && !dimensions_match(&e, &a));
        assert!(a.same_dimensions(&b));
    }
}
