// Copyright 2025 the Bitview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Size;

/// How content is sized by [`crate::TransformEngine::fit_to_viewport`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Show the whole content; the other axis is letterboxed and centered.
    #[default]
    Contain,
    /// Fill the viewport; the other axis overflows and is centered.
    Cover,
}

/// The axis that exactly matches the viewport after a fit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitAxis {
    /// Content width equals viewport width; vertical offset is centered.
    Width,
    /// Content height equals viewport height; horizontal offset is centered.
    Height,
}

/// Result of a fit computation: which axis fits and the absolute scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fit {
    /// Axis matched exactly by the fitted content.
    pub axis: FitAxis,
    /// Absolute scale ratio that achieves the fit.
    pub scale: f64,
}

impl Fit {
    /// Computes the uniform scale fitting `content` into `viewport`.
    ///
    /// Both sizes must have finite, strictly positive extents; otherwise the
    /// aspect ratios are undefined and [`GeometryError`] is returned.
    pub fn compute(content: Size, viewport: Size, mode: FitMode) -> Result<Self, GeometryError> {
        if !is_usable(content) {
            return Err(GeometryError::Content(content));
        }
        if !is_usable(viewport) {
            return Err(GeometryError::Viewport(viewport));
        }

        // Viewport relatively narrower than the content: width is the
        // binding constraint when containing.
        let viewport_narrower =
            viewport.width / viewport.height < content.width / content.height;
        let axis = match (mode, viewport_narrower) {
            (FitMode::Contain, true) | (FitMode::Cover, false) => FitAxis::Width,
            (FitMode::Contain, false) | (FitMode::Cover, true) => FitAxis::Height,
        };
        let scale = match axis {
            FitAxis::Width => viewport.width / content.width,
            FitAxis::Height => viewport.height / content.height,
        };
        Ok(Self { axis, scale })
    }
}

fn is_usable(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

/// Error returned when fit geometry is degenerate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryError {
    /// The content size has a zero, negative or non-finite extent.
    Content(Size),
    /// The viewport size has a zero, negative or non-finite extent.
    Viewport(Size),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Content(s) => write!(f, "invalid content size {}x{}", s.width, s.height),
            Self::Viewport(s) => write!(f, "invalid viewport size {}x{}", s.width, s.height),
        }
    }
}

impl core::error::Error for GeometryError {}
