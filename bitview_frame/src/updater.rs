// Copyright 2025 the Bitview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::copy::blit;
use crate::{FrameBuffer, FrameError, dimensions_match};

/// How an incoming frame will be applied to the displayed one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdatePath {
    /// Nothing writable is displayed yet; take the incoming frame as is.
    Adopt,
    /// Layouts differ; the displayed buffer is replaced.
    Replace,
    /// Layouts match; pixels are copied into the displayed buffer.
    CopyInPlace,
}

/// Decides the cheapest valid way to display `incoming`.
///
/// `current` is `None` while the placeholder is shown. Pure function.
#[must_use]
pub fn plan_update(current: Option<&FrameBuffer>, incoming: &FrameBuffer) -> UpdatePath {
    match current {
        None => UpdatePath::Adopt,
        Some(current) if dimensions_match(current, incoming) => UpdatePath::CopyInPlace,
        Some(_) => UpdatePath::Replace,
    }
}

/// What [`FrameBufferUpdater`] did with a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum FrameUpdate {
    /// No frame was supplied; the placeholder is shown.
    Cleared,
    /// The incoming frame became the displayed buffer.
    Adopted,
    /// The displayed buffer was replaced by one with a different layout.
    Replaced,
    /// Pixels were copied into the existing buffer; its identity is unchanged.
    CopiedInPlace,
}

impl FrameUpdate {
    /// Returns `true` if the displayed buffer is a different allocation now.
    #[must_use]
    pub fn changed_identity(self) -> bool {
        !matches!(self, Self::CopiedInPlace)
    }
}

/// Owns the frame a display surface shows and applies new frames to it.
///
/// The updater always has something to show: until the first frame arrives,
/// and whenever an absent frame is applied, it shows a 1×1 placeholder. The
/// placeholder is never written to; the first real frame is adopted instead.
#[derive(Clone, Debug)]
pub struct FrameBufferUpdater {
    placeholder: FrameBuffer,
    frame: Option<FrameBuffer>,
    generation: u64,
}

impl Default for FrameBufferUpdater {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBufferUpdater {
    /// Creates an updater showing the placeholder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            placeholder: FrameBuffer::placeholder(),
            frame: None,
            generation: 0,
        }
    }

    /// The buffer currently shown.
    #[must_use]
    pub fn current(&self) -> &FrameBuffer {
        self.frame.as_ref().unwrap_or(&self.placeholder)
    }

    /// Returns `true` once a real frame is shown.
    #[must_use]
    pub fn has_frame(&self) -> bool {
        self.frame.is_some()
    }

    /// Incremented whenever the shown buffer becomes a different allocation.
    ///
    /// In-place copies leave it alone, so it can key caches (for example GPU
    /// textures) tied to buffer identity.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Applies an owned frame.
    ///
    /// Adoption and replacement move `incoming` in without copying pixels.
    /// When layouts match, its pixels are copied into the existing buffer
    /// and `incoming` is dropped.
    pub fn apply_new_frame(
        &mut self,
        incoming: Option<FrameBuffer>,
    ) -> Result<FrameUpdate, FrameError> {
        let Some(incoming) = incoming else {
            return Ok(self.clear());
        };
        match plan_update(self.frame.as_ref(), &incoming) {
            UpdatePath::Adopt => Ok(self.install(incoming, FrameUpdate::Adopted)),
            UpdatePath::Replace => Ok(self.install(incoming, FrameUpdate::Replaced)),
            UpdatePath::CopyInPlace => self.copy_in_place(&incoming),
        }
    }

    /// Applies a borrowed frame, leaving the caller's buffer untouched.
    ///
    /// Adoption and replacement duplicate `incoming`, which allocates; the
    /// in-place path copies pixels only.
    pub fn apply_frame_from(
        &mut self,
        incoming: Option<&FrameBuffer>,
    ) -> Result<FrameUpdate, FrameError> {
        let Some(incoming) = incoming else {
            return Ok(self.clear());
        };
        match plan_update(self.frame.as_ref(), incoming) {
            UpdatePath::Adopt => Ok(self.install(incoming.clone(), FrameUpdate::Adopted)),
            UpdatePath::Replace => Ok(self.install(incoming.clone(), FrameUpdate::Replaced)),
            UpdatePath::CopyInPlace => self.copy_in_place(incoming),
        }
    }

    fn clear(&mut self) -> FrameUpdate {
        if self.frame.take().is_some() {
            self.generation += 1;
        }
        log::debug!("no frame supplied, showing placeholder");
        FrameUpdate::Cleared
    }

    fn install(&mut self, frame: FrameBuffer, update: FrameUpdate) -> FrameUpdate {
        log::debug!(
            "{update:?} {}x{} {:?} frame",
            frame.pixel_width(),
            frame.pixel_height(),
            frame.format()
        );
        self.frame = Some(frame);
        self.generation += 1;
        update
    }

    fn copy_in_place(&mut self, incoming: &FrameBuffer) -> Result<FrameUpdate, FrameError> {
        let Some(current) = self.frame.as_mut() else {
            // `plan_update` only copies into a present frame.
            return Ok(self.install(incoming.clone(), FrameUpdate::Adopted));
        };
        let copied = blit(incoming, current)?;
        log::trace!("copied {copied} bytes in place");
        Ok(FrameUpdate::CopiedInPlace)
    }
}
