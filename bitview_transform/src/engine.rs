// Copyright 2025 the Bitview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::config::ZoomConfig;
use crate::drag::DragState;
use crate::fit::{Fit, FitAxis, FitMode, GeometryError};
use crate::transform::ViewTransform;

/// Result of a zoom request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum ZoomOutcome {
    /// The transform was scaled.
    Applied,
    /// The resulting ratio would leave the configured range; nothing changed.
    Rejected,
    /// The request carried no zoom (non-positive factor, zero wheel delta).
    Ignored,
}

impl ZoomOutcome {
    /// Returns `true` if the transform changed.
    #[must_use]
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

/// Direction of a discrete zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Multiply the ratio by the configured step.
    In,
    /// Divide the ratio by the configured step.
    Out,
}

impl ZoomDirection {
    /// Maps a wheel delta to a direction; a zero (or NaN) delta has none.
    #[must_use]
    pub fn from_wheel_delta(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::In)
        } else if delta < 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }
}

/// Result of [`TransformEngine::fit_to_viewport`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitOutcome {
    /// The computed fit.
    pub fit: Fit,
    /// Whether the fit scale was within the zoom range.
    pub zoom: ZoomOutcome,
}

/// Pan/zoom state driven by pointer, wheel and command input.
///
/// `TransformEngine` owns the current [`ViewTransform`], the drag capture and
/// the zoom range. It is pure math: callers feed it pointer positions in view
/// coordinates and push [`TransformEngine::transform`] to whatever renders
/// the content.
///
/// Zoom requests that would leave `[min_scale, max_scale]` are rejected
/// rather than clamped, so a run of steps always lands on exact powers of the
/// step factor.
#[derive(Clone, Debug, Default)]
pub struct TransformEngine {
    transform: ViewTransform,
    config: ZoomConfig,
    drag: DragState,
    fit_mode: FitMode,
}

impl TransformEngine {
    /// Creates an engine at scale `1.0` with no translation.
    #[must_use]
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            transform: ViewTransform::IDENTITY,
            config,
            drag: DragState::default(),
            fit_mode: FitMode::default(),
        }
    }

    /// The current transform.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// The current cumulative scale ratio.
    #[must_use]
    pub fn scale_ratio(&self) -> f64 {
        self.transform.scale
    }

    /// The current translation in view coordinates.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.transform.offset
    }

    /// The active zoom configuration.
    #[must_use]
    pub fn config(&self) -> ZoomConfig {
        self.config
    }

    /// Replaces the zoom configuration.
    ///
    /// If the current ratio lies outside the new range it is pulled to the
    /// nearest bound by scaling about the view origin. Returns `true` when
    /// that changed the transform.
    pub fn set_config(&mut self, config: ZoomConfig) -> bool {
        self.config = config;
        let ratio = self.transform.scale;
        let clamped = ratio.clamp(config.min_scale(), config.max_scale());
        if clamped == ratio {
            return false;
        }
        log::debug!("scale ratio {ratio} outside new range, clamping to {clamped}");
        self.transform = self.transform.rescaled_to(clamped);
        true
    }

    /// Sets how [`TransformEngine::fit_to_viewport`] sizes content.
    pub fn set_fit_mode(&mut self, mode: FitMode) {
        self.fit_mode = mode;
    }

    /// Returns the current fit mode.
    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    /// Returns `true` while a drag is captured.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_captured()
    }

    /// Starts a pan at `pointer` from `current_translation`.
    pub fn begin_drag(&mut self, pointer: Point, current_translation: Vec2) {
        self.drag.begin(pointer, current_translation);
    }

    /// Moves the captured content so it follows `pointer`.
    ///
    /// Does nothing unless a drag is captured. Returns `true` if the
    /// translation was updated.
    pub fn drag_to(&mut self, pointer: Point) -> bool {
        match self.drag.target_offset(pointer) {
            Some(offset) => {
                self.set_translation(offset);
                true
            }
            None => false,
        }
    }

    /// Releases the drag capture. Idempotent.
    pub fn end_drag(&mut self) {
        self.drag.end();
    }

    /// Sets the translation. Panning is unbounded.
    pub fn set_translation(&mut self, offset: Vec2) {
        self.transform = self.transform.with_offset(offset);
        log::trace!("translation -> ({}, {})", offset.x, offset.y);
    }

    /// Multiplies the scale ratio by `factor`.
    ///
    /// With an `anchor` (view coordinates) the content under the anchor stays
    /// put; without one the view origin is the fixed point. Requests that
    /// would leave the configured range are rejected, both bounds inclusive.
    pub fn zoom_by(&mut self, factor: f64, anchor: Option<Point>) -> ZoomOutcome {
        if !factor.is_finite() || factor <= 0.0 {
            return ZoomOutcome::Ignored;
        }
        let ratio = self.transform.scale;
        if !self.config.permits(ratio, factor) {
            log::debug!(
                "zoom by {factor} rejected: ratio {} outside [{}, {}]",
                ratio * factor,
                self.config.min_scale(),
                self.config.max_scale()
            );
            return ZoomOutcome::Rejected;
        }
        self.transform = match anchor {
            Some(anchor) => self.transform.then_scale_about(factor, anchor),
            None => self.transform.then_scale(factor),
        };
        log::trace!("scale ratio -> {}", self.transform.scale);
        ZoomOutcome::Applied
    }

    /// Zooms one configured step in or out.
    pub fn zoom_step(&mut self, direction: ZoomDirection, anchor: Option<Point>) -> ZoomOutcome {
        let step = self.config.scale_step();
        let factor = match direction {
            ZoomDirection::In => step,
            ZoomDirection::Out => 1.0 / step,
        };
        self.zoom_by(factor, anchor)
    }

    /// Zooms one step about `pointer` according to the sign of `delta`.
    pub fn wheel(&mut self, delta: f64, pointer: Point) -> ZoomOutcome {
        match ZoomDirection::from_wheel_delta(delta) {
            Some(direction) => self.zoom_step(direction, Some(pointer)),
            None => ZoomOutcome::Ignored,
        }
    }

    /// Returns to raw pixels: scale exactly `1.0`, no translation.
    ///
    /// Repeated step zooms accumulate rounding; this assigns the identity
    /// rather than multiplying by `1 / ratio`.
    pub fn reset_to_raw(&mut self) {
        self.transform = ViewTransform::IDENTITY;
        log::trace!("reset to raw");
    }

    /// Fits `content` into `viewport` and centers the non-fitted axis.
    ///
    /// The fitted scale is checked against the zoom range as an absolute
    /// ratio and assigned exactly, so a fit landing on a bound is accepted.
    /// A fit outside the range leaves the scale alone; centering then uses
    /// whatever ratio is in effect.
    pub fn fit_to_viewport(
        &mut self,
        content: Size,
        viewport: Size,
    ) -> Result<FitOutcome, GeometryError> {
        let fit = Fit::compute(content, viewport, self.fit_mode)?;
        let zoom = if self.config.contains(fit.scale) {
            self.transform = self.transform.rescaled_to(fit.scale);
            log::trace!("scale ratio -> {}", fit.scale);
            ZoomOutcome::Applied
        } else {
            log::warn!("fit scale {} is outside the zoom range", fit.scale);
            ZoomOutcome::Rejected
        };

        let ratio = self.transform.scale;
        let offset = match fit.axis {
            FitAxis::Width => Vec2::new(0.0, (viewport.height - content.height * ratio) / 2.0),
            FitAxis::Height => Vec2::new((viewport.width - content.width * ratio) / 2.0, 0.0),
        };
        self.set_translation(offset);
        Ok(FitOutcome { fit, zoom })
    }

    /// Snapshot of the current engine state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TransformEngineDebugInfo {
        TransformEngineDebugInfo {
            transform: self.transform,
            min_scale: self.config.min_scale(),
            max_scale: self.config.max_scale(),
            scale_step: self.config.scale_step(),
            dragging: self.drag.is_captured(),
            fit_mode: self.fit_mode,
        }
    }
}

/// Debug snapshot of a [`TransformEngine`] state.
#[derive(Clone, Copy, Debug)]
pub struct TransformEngineDebugInfo {
    /// Current transform.
    pub transform: ViewTransform,
    /// Minimum scale ratio.
    pub min_scale: f64,
    /// Maximum scale ratio.
    pub max_scale: f64,
    /// Multiplicative step per zoom action.
    pub scale_step: f64,
    /// Whether a drag is captured.
    pub dragging: bool,
    /// Fit mode used by [`TransformEngine::fit_to_viewport`].
    pub fit_mode: FitMode,
}
