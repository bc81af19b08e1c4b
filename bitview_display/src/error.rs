// Copyright 2025 the Bitview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use bitview_frame::FrameError;
use bitview_transform::GeometryError;

use crate::Part;

/// Error returned by [`crate::DisplayControl`] operations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DisplayError {
    /// The operation needs a part the host did not provide.
    MissingPart(Part),
    /// Fit-to-view was asked to work with a degenerate size.
    Geometry(GeometryError),
    /// A frame could not be applied.
    Frame(FrameError),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPart(part) => write!(f, "display has no {part}"),
            Self::Geometry(e) => write!(f, "cannot fit: {e}"),
            Self::Frame(e) => write!(f, "cannot apply frame: {e}"),
        }
    }
}

impl core::error::Error for DisplayError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::MissingPart(_) => None,
            Self::Geometry(e) => Some(e),
            Self::Frame(e) => Some(e),
        }
    }
}

impl From<GeometryError> for DisplayError {
    fn from(e: GeometryError) -> Self {
        Self::Geometry(e)
    }
}

impl From<FrameError> for DisplayError {
    fn from(e: FrameError) -> Self {
        Self::Frame(e)
    }
}
