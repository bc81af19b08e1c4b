// Copyright 2025 the Bitview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Uniform scale + translation mapping content coordinates into the view.
///
/// A content point `p` is displayed at `p * scale + offset`. Storing a single
/// scale keeps the transform uniform; rotation and shear are not
/// representable.
///
/// Values are immutable per step: every operation returns a new transform,
/// and [`crate::TransformEngine`] assigns the result into its single slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Uniform scale ratio (content units to view units).
    pub scale: f64,
    /// Translation in view units.
    pub offset: Vec2,
}

impl ViewTransform {
    /// The identity transform: scale `1.0`, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset: Vec2::ZERO,
    };

    /// Creates a transform from a scale and translation.
    #[must_use]
    pub const fn new(scale: f64, offset: Vec2) -> Self {
        Self { scale, offset }
    }

    /// Returns this transform with a different translation.
    #[must_use]
    pub fn with_offset(self, offset: Vec2) -> Self {
        Self { offset, ..self }
    }

    /// Scales the displayed result about the view origin.
    ///
    /// Translation scales along with the content, matching a post-multiplied
    /// scale matrix.
    #[must_use]
    pub fn then_scale(self, factor: f64) -> Self {
        Self {
            scale: self.scale * factor,
            offset: self.offset * factor,
        }
    }

    /// Scales about the view origin so the result has exactly `scale`.
    ///
    /// The offset follows as in [`ViewTransform::then_scale`], but the scale
    /// is assigned rather than multiplied, so it lands on `scale` bit for bit.
    #[must_use]
    pub fn rescaled_to(self, scale: f64) -> Self {
        Self {
            scale,
            offset: self.offset * (scale / self.scale),
        }
    }

    /// Scales the displayed result about `anchor` (view coordinates).
    ///
    /// Whatever content point sits under `anchor` before the call sits under
    /// it afterwards.
    #[must_use]
    pub fn then_scale_about(self, factor: f64, anchor: Point) -> Self {
        let anchor = anchor.to_vec2();
        Self {
            scale: self.scale * factor,
            offset: anchor + (self.offset - anchor) * factor,
        }
    }

    /// Maps a content-space point into view coordinates.
    #[must_use]
    pub fn content_to_view(&self, pt: Point) -> Point {
        (pt.to_vec2() * self.scale + self.offset).to_point()
    }

    /// Maps a view-space point back into content coordinates.
    #[must_use]
    pub fn view_to_content(&self, pt: Point) -> Point {
        ((pt.to_vec2() - self.offset) / self.scale).to_point()
    }

    /// Returns the equivalent 2×3 affine matrix.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<ViewTransform> for Affine {
    fn from(t: ViewTransform) -> Self {
        t.to_affine()
    }
}
