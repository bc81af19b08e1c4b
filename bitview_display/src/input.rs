// Copyright 2025 the Bitview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Pointer input in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A button was pressed; starts a pan.
    PointerDown(Point),
    /// The pointer moved; pans while a button is held.
    PointerMove(Point),
    /// The button was released.
    PointerUp,
    /// The host revoked pointer capture (window deactivated, etc.).
    CaptureLost,
    /// The wheel turned over `position`. Positive deltas zoom in.
    Wheel {
        /// Wheel delta; only the sign is used.
        delta: f64,
        /// Pointer position, used as the zoom anchor.
        position: Point,
    },
}

/// Toolbar-style commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Zoom in one step about the view origin.
    ZoomIn,
    /// Zoom out one step about the view origin.
    ZoomOut,
    /// Fit the frame into the viewport.
    FitToView,
    /// Show the frame at scale 1.0 with no translation.
    ResetToRaw,
}
