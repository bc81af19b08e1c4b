// Copyright 2025 the Bitview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use bitview_frame::{FrameBuffer, FrameBufferUpdater, FrameUpdate};
use bitview_transform::{
    FitMode, FitOutcome, TransformEngine, ViewTransform, ZoomConfig, ZoomDirection, ZoomOutcome,
};
use kurbo::Point;

use crate::{Command, DisplayError, DisplayParts, InputEvent, Part};

type TransformObserver = Box<dyn FnMut(&ViewTransform)>;
type FrameObserver = Box<dyn FnMut(&FrameBuffer, FrameUpdate)>;

/// A pan/zoom bitmap display, minus the widget.
///
/// `DisplayControl` routes pointer input, commands and incoming frames to a
/// [`TransformEngine`] and a [`FrameBufferUpdater`], and pushes the results
/// to the host's [`DisplayParts`]. The transform and the frame are updated
/// independently.
///
/// Observers registered with [`DisplayControl::on_transform_changed`] run
/// after every transform change; those registered with
/// [`DisplayControl::on_frame_changed`] run when the shown buffer becomes a
/// different allocation.
///
/// Zoom, fit and reset commands do nothing until the first frame arrives.
pub struct DisplayControl {
    engine: TransformEngine,
    frames: FrameBufferUpdater,
    parts: DisplayParts,
    transform_observers: Vec<TransformObserver>,
    frame_observers: Vec<FrameObserver>,
}

impl DisplayControl {
    /// Creates a control and pushes the initial transform and placeholder
    /// frame to `parts`.
    #[must_use]
    pub fn new(config: ZoomConfig, parts: DisplayParts) -> Self {
        for part in [Part::Viewport, Part::TransformSink, Part::PixelSink] {
            if !parts.has(part) {
                log::debug!("display created without a {part}");
            }
        }
        let mut control = Self {
            engine: TransformEngine::new(config),
            frames: FrameBufferUpdater::new(),
            parts,
            transform_observers: Vec::new(),
            frame_observers: Vec::new(),
        };
        control.push_transform();
        control.push_frame(FrameUpdate::Cleared);
        control
    }

    /// The underlying transform engine.
    #[must_use]
    pub fn engine(&self) -> &TransformEngine {
        &self.engine
    }

    /// The current transform.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.engine.transform()
    }

    /// The current scale ratio.
    #[must_use]
    pub fn scale_ratio(&self) -> f64 {
        self.engine.scale_ratio()
    }

    /// The frame currently shown (the placeholder before the first frame).
    #[must_use]
    pub fn frame(&self) -> &FrameBuffer {
        self.frames.current()
    }

    /// Returns `true` once a real frame has been supplied.
    #[must_use]
    pub fn has_frame(&self) -> bool {
        self.frames.has_frame()
    }

    /// Replaces the zoom configuration, clamping the current ratio into it.
    pub fn set_config(&mut self, config: ZoomConfig) {
        if self.engine.set_config(config) {
            self.publish_transform();
        }
    }

    /// Sets how [`Command::FitToView`] sizes the frame.
    pub fn set_fit_mode(&mut self, mode: FitMode) {
        self.engine.set_fit_mode(mode);
    }

    /// Registers a callback run after every transform change.
    pub fn on_transform_changed(&mut self, observer: impl FnMut(&ViewTransform) + 'static) {
        self.transform_observers.push(Box::new(observer));
    }

    /// Registers a callback run when the shown buffer is adopted, replaced
    /// or cleared.
    pub fn on_frame_changed(&mut self, observer: impl FnMut(&FrameBuffer, FrameUpdate) + 'static) {
        self.frame_observers.push(Box::new(observer));
    }

    /// Captures the pointer and starts panning.
    pub fn pointer_down(&mut self, position: Point) {
        let translation = self.engine.translation();
        self.engine.begin_drag(position, translation);
    }

    /// Pans to follow the pointer while captured. Returns `true` if the
    /// transform changed.
    pub fn pointer_move(&mut self, position: Point) -> bool {
        if !self.engine.drag_to(position) {
            return false;
        }
        self.publish_transform();
        true
    }

    /// Releases the pointer capture.
    pub fn pointer_up(&mut self) {
        self.engine.end_drag();
    }

    /// Abandons a pan after the host revoked capture.
    pub fn capture_lost(&mut self) {
        self.engine.end_drag();
    }

    /// Zooms one step about `position`, in or out by the sign of `delta`.
    pub fn wheel(&mut self, delta: f64, position: Point) -> ZoomOutcome {
        let outcome = self.engine.wheel(delta, position);
        if outcome.is_applied() {
            self.publish_transform();
        }
        outcome
    }

    /// Dispatches a pointer event. Returns `true` if the transform changed.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDown(p) => {
                self.pointer_down(p);
                false
            }
            InputEvent::PointerMove(p) => self.pointer_move(p),
            InputEvent::PointerUp => {
                self.pointer_up();
                false
            }
            InputEvent::CaptureLost => {
                self.capture_lost();
                false
            }
            InputEvent::Wheel { delta, position } => self.wheel(delta, position).is_applied(),
        }
    }

    /// Runs a command. Returns `true` if the transform changed.
    pub fn execute(&mut self, command: Command) -> Result<bool, DisplayError> {
        Ok(match command {
            Command::ZoomIn => self.zoom_in().is_applied(),
            Command::ZoomOut => self.zoom_out().is_applied(),
            Command::FitToView => self.fit_to_view()?.is_some(),
            Command::ResetToRaw => self.reset_to_raw(),
        })
    }

    /// Zooms in one step about the view origin.
    pub fn zoom_in(&mut self) -> ZoomOutcome {
        self.zoom_step(ZoomDirection::In)
    }

    /// Zooms out one step about the view origin.
    pub fn zoom_out(&mut self) -> ZoomOutcome {
        self.zoom_step(ZoomDirection::Out)
    }

    fn zoom_step(&mut self, direction: ZoomDirection) -> ZoomOutcome {
        if !self.frames.has_frame() {
            log::debug!("zoom {direction:?} ignored: no frame");
            return ZoomOutcome::Ignored;
        }
        let outcome = self.engine.zoom_step(direction, None);
        if outcome.is_applied() {
            self.publish_transform();
        }
        outcome
    }

    /// Fits the frame's logical size into the viewport.
    ///
    /// Returns `Ok(None)` when there is no frame yet.
    pub fn fit_to_view(&mut self) -> Result<Option<FitOutcome>, DisplayError> {
        if !self.frames.has_frame() {
            log::debug!("fit ignored: no frame");
            return Ok(None);
        }
        let viewport = self
            .parts
            .viewport
            .as_ref()
            .ok_or(DisplayError::MissingPart(Part::Viewport))?
            .viewport_size();
        let content = self.frames.current().logical_size();
        let outcome = self.engine.fit_to_viewport(content, viewport)?;
        self.publish_transform();
        Ok(Some(outcome))
    }

    /// Shows the frame at scale 1.0 with no translation.
    ///
    /// Returns `false` when there is no frame yet.
    pub fn reset_to_raw(&mut self) -> bool {
        if !self.frames.has_frame() {
            log::debug!("reset ignored: no frame");
            return false;
        }
        self.engine.reset_to_raw();
        self.publish_transform();
        true
    }

    /// Shows `frame`, moving it in. `None` shows the placeholder.
    pub fn set_frame(&mut self, frame: Option<FrameBuffer>) -> Result<FrameUpdate, DisplayError> {
        let update = self.frames.apply_new_frame(frame)?;
        self.publish_frame(update);
        Ok(update)
    }

    /// Shows a copy of `frame`, leaving the caller's buffer untouched.
    pub fn set_frame_from(
        &mut self,
        frame: Option<&FrameBuffer>,
    ) -> Result<FrameUpdate, DisplayError> {
        let update = self.frames.apply_frame_from(frame)?;
        self.publish_frame(update);
        Ok(update)
    }

    fn push_transform(&mut self) {
        match self.parts.transform_sink.as_mut() {
            Some(sink) => sink.set_render_transform(self.engine.transform().to_affine()),
            None => log::trace!("no transform sink, skipping push"),
        }
    }

    fn publish_transform(&mut self) {
        self.push_transform();
        let transform = self.engine.transform();
        for observer in &mut self.transform_observers {
            observer(&transform);
        }
    }

    fn push_frame(&mut self, update: FrameUpdate) {
        match self.parts.pixel_sink.as_mut() {
            Some(sink) => sink.present(self.frames.current(), update),
            None => log::trace!("no pixel sink, skipping present"),
        }
    }

    fn publish_frame(&mut self, update: FrameUpdate) {
        self.push_frame(update);
        if update.changed_identity() {
            let frame = self.frames.current();
            for observer in &mut self.frame_observers {
                observer(frame, update);
            }
        }
    }
}

impl fmt::Debug for DisplayControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayControl")
            .field("engine", &self.engine)
            .field("frames", &self.frames)
            .field("parts", &self.parts)
            .field("transform_observers", &self.transform_observers.len())
            .field("frame_observers", &self.frame_observers.len())
            .finish()
    }
}
