// Copyright 2025 the Bitview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bitview Transform: pan/zoom state for a bitmap display.
//!
//! This crate provides a small, headless model of how a bitmap is placed
//! inside a viewport. It focuses on:
//! - A uniform scale + translation transform ([`ViewTransform`]).
//! - Drag capture that turns pointer moves into absolute translations.
//! - Step zoom with a hard, symmetric scale range ([`ZoomConfig`]).
//! - Anchor-preserving zoom for mouse-wheel input.
//! - Fitting content into a viewport ([`FitMode`]).
//!
//! It does **not** draw anything or listen to input devices. Callers are
//! expected to:
//! - Forward pointer-down / move / up and wheel events to
//!   [`TransformEngine`] in view coordinates.
//! - Apply [`TransformEngine::transform`] (or its [`kurbo::Affine`] form)
//!   as the render transform of whatever displays the content.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use bitview_transform::{TransformEngine, ZoomConfig};
//!
//! let mut engine = TransformEngine::new(ZoomConfig::new(64.0, 2.0).unwrap());
//!
//! // Wheel up over (200, 150): zoom in one step, keeping that spot fixed.
//! let anchor = Point::new(200.0, 150.0);
//! let under_pointer = engine.transform().view_to_content(anchor);
//! assert!(engine.wheel(120.0, anchor).is_applied());
//! assert_eq!(engine.scale_ratio(), 2.0);
//! assert_eq!(engine.transform().content_to_view(under_pointer), anchor);
//!
//! // Drag the content 30 px to the right.
//! engine.begin_drag(Point::new(10.0, 10.0), engine.translation());
//! engine.drag_to(Point::new(40.0, 10.0));
//! engine.end_drag();
//!
//! // Fit a 400x200 image into a 100x100 viewport.
//! engine.fit_to_viewport(Size::new(400.0, 200.0), Size::new(100.0, 100.0)).unwrap();
//! assert_eq!(engine.scale_ratio(), 0.25);
//! assert_eq!(engine.translation(), Vec2::new(0.0, 25.0));
//! ```
//!
//! ## Design notes
//!
//! - Zoom is **uniform**; rotation is not modelled.
//! - Out-of-range zoom requests are rejected, not clamped, and are reported
//!   as [`ZoomOutcome::Rejected`] rather than as errors.
//! - Panning is unbounded: content may be dragged fully out of view.
//! - Pointer sequences are tolerated in any order; moves and releases
//!   without a capture are no-ops.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod drag;
mod engine;
mod fit;
mod transform;

pub use config::{ConfigError, ZoomConfig};
pub use drag::{Capture, DragState};
pub use engine::{
    FitOutcome, TransformEngine, TransformEngineDebugInfo, ZoomDirection, ZoomOutcome,
};
pub use fit::{Fit, FitAxis, FitMode, GeometryError};
pub use transform::ViewTransform;
