// Copyright 2025 the Bitview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Zoom range and step configuration.
///
/// The range is symmetric around `1.0`: a `scale_range` of `64.0` permits
/// scale ratios in `[1/64, 64]`. Each discrete zoom action (wheel notch,
/// zoom‑in/zoom‑out command) multiplies or divides the ratio by `scale_step`.
///
/// Values are validated when the config is built, so an engine never
/// observes an unusable range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    scale_range: f64,
    scale_step: f64,
}

impl ZoomConfig {
    /// Default symmetric scale range.
    pub const DEFAULT_SCALE_RANGE: f64 = 64.0;
    /// Default multiplicative step per zoom action.
    pub const DEFAULT_SCALE_STEP: f64 = 2.0;

    /// Creates a validated zoom configuration.
    ///
    /// Both values must be finite and strictly greater than `1.0`.
    pub fn new(scale_range: f64, scale_step: f64) -> Result<Self, ConfigError> {
        if !scale_range.is_finite() || scale_range <= 1.0 {
            return Err(ConfigError::ScaleRange(scale_range));
        }
        if !scale_step.is_finite() || scale_step <= 1.0 {
            return Err(ConfigError::ScaleStep(scale_step));
        }
        Ok(Self {
            scale_range,
            scale_step,
        })
    }

    /// Returns a copy with a different scale range.
    pub fn with_scale_range(self, scale_range: f64) -> Result<Self, ConfigError> {
        Self::new(scale_range, self.scale_step)
    }

    /// Returns a copy with a different scale step.
    pub fn with_scale_step(self, scale_step: f64) -> Result<Self, ConfigError> {
        Self::new(self.scale_range, scale_step)
    }

    /// The symmetric scale range parameter.
    #[must_use]
    pub fn scale_range(&self) -> f64 {
        self.scale_range
    }

    /// Multiplicative factor applied per zoom action.
    #[must_use]
    pub fn scale_step(&self) -> f64 {
        self.scale_step
    }

    /// Largest permitted scale ratio (`scale_range`).
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.scale_range
    }

    /// Smallest permitted scale ratio (`1 / scale_range`).
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        1.0 / self.scale_range
    }

    /// Whether the absolute scale `ratio` lies inside the configured range,
    /// both bounds inclusive.
    #[must_use]
    pub fn contains(&self, ratio: f64) -> bool {
        ratio >= self.min_scale() && ratio <= self.max_scale()
    }

    /// Whether `ratio · factor` stays inside the configured range.
    ///
    /// Shrinking factors are checked against the lower bound and growing
    /// factors against the upper bound; both bounds are inclusive.
    #[must_use]
    pub fn permits(&self, ratio: f64, factor: f64) -> bool {
        let next = ratio * factor;
        if factor < 1.0 {
            next >= self.min_scale()
        } else {
            next <= self.max_scale()
        }
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            scale_range: Self::DEFAULT_SCALE_RANGE,
            scale_step: Self::DEFAULT_SCALE_STEP,
        }
    }
}

/// Error returned when a [`ZoomConfig`] value is rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The scale range was not finite or not greater than `1.0`.
    ScaleRange(f64),
    /// The scale step was not finite or not greater than `1.0`.
    ScaleStep(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScaleRange(v) => write!(f, "invalid scale range {v}: must be greater than 1"),
            Self::ScaleStep(v) => write!(f, "invalid scale step {v}: must be greater than 1"),
        }
    }
}

impl core::error::Error for ConfigError {}
