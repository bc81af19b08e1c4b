// Copyright 2025 the Bitview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Memory layout of a single pixel.
///
/// Only byte-aligned formats are supported, so every pixel occupies a whole
/// number of bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 8-bit grayscale.
    Gray8,
    /// 16-bit grayscale.
    Gray16,
    /// 8 bits each of blue, green, red.
    Bgr24,
    /// 8 bits each of red, green, blue.
    Rgb24,
    /// Blue, green, red and an unused padding byte.
    Bgr32,
    /// Blue, green, red, alpha (straight alpha).
    Bgra32,
    /// Blue, green, red, alpha (premultiplied alpha).
    Pbgra32,
    /// Red, green, blue, alpha (straight alpha).
    Rgba32,
}

impl PixelFormat {
    /// Bits occupied by one pixel.
    #[must_use]
    pub const fn bits_per_pixel(self) -> u32 {
        match self {
            Self::Gray8 => 8,
            Self::Gray16 => 16,
            Self::Bgr24 | Self::Rgb24 => 24,
            Self::Bgr32 | Self::Bgra32 | Self::Pbgra32 | Self::Rgba32 => 32,
        }
    }

    /// Bytes occupied by one pixel.
    #[must_use]
    pub const fn bytes_per_pixel(self) -> usize {
        (self.bits_per_pixel() / 8) as usize
    }

    /// Bytes needed for one row of `width` pixels, without padding.
    ///
    /// Returns `None` on overflow.
    #[must_use]
    pub fn row_bytes(self, width: u32) -> Option<usize> {
        usize::try_from(width)
            .ok()?
            .checked_mul(self.bytes_per_pixel())
    }

    /// Row stride for `width` pixels padded to a multiple of four bytes.
    ///
    /// This is the usual alignment of bitmaps handed out by desktop imaging
    /// APIs. Returns `None` on overflow.
    #[must_use]
    pub fn aligned_stride(self, width: u32) -> Option<usize> {
        let row = self.row_bytes(width)?;
        row.checked_add(3).map(|r| r & !3)
    }
}
