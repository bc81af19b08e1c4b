// Copyright 2025 the Bitview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag capture: remembers where a pan started so moves map to absolute offsets.
//!
//! ## Usage
//!
//! 1) On pointer-down call [`DragState::begin`] with the pointer position and
//!    the translation currently applied to the content.
//! 2) On each pointer-move call [`DragState::target_offset`] to get the
//!    translation that keeps the grabbed content under the pointer.
//! 3) On pointer-up (or when capture is revoked) call [`DragState::end`].
//!
//! Moves and ends outside a drag are ignored, so duplicated or synthetic
//! pointer events never fail.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use bitview_transform::DragState;
//!
//! let mut drag = DragState::default();
//! drag.begin(Point::new(10.0, 20.0), Vec2::new(100.0, 0.0));
//! assert!(drag.is_captured());
//!
//! let offset = drag.target_offset(Point::new(15.0, 18.0)).unwrap();
//! assert_eq!(offset, Vec2::new(105.0, -2.0));
//!
//! drag.end();
//! assert_eq!(drag.target_offset(Point::new(0.0, 0.0)), None);
//! ```

use kurbo::{Point, Vec2};

/// Pointer capture recorded at the start of a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Capture {
    /// Translation applied to the content when the drag began.
    pub offset: Vec2,
    /// Pointer position when the drag began.
    pub pointer: Point,
}

/// Tracks whether a pan is in progress and where it started.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    capture: Option<Capture>,
}

impl DragState {
    /// Captures the pointer, starting a new drag.
    ///
    /// A drag already in progress is replaced.
    pub fn begin(&mut self, pointer: Point, offset: Vec2) {
        self.capture = Some(Capture { offset, pointer });
    }

    /// Translation that follows the pointer to `pointer`, or `None` when idle.
    #[must_use]
    pub fn target_offset(&self, pointer: Point) -> Option<Vec2> {
        self.capture
            .map(|capture| capture.offset + (pointer - capture.pointer))
    }

    /// Releases the capture. Safe to call when no drag is active.
    pub fn end(&mut self) {
        self.capture = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.capture.is_some()
    }

    /// The active capture, if any.
    #[must_use]
    pub fn capture(&self) -> Option<Capture> {
        self.capture
    }
}
