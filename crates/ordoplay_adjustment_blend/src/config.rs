// SPDX-License-Identifier: MIT OR Apache-2.0
//! Blend settings.

use crate::error::{BlendError, Result};
use crate::provider::TangentMode;
use serde::{Deserialize, Serialize};

/// Default base-layer sampling step, in host time units
pub const DEFAULT_STEP: f64 = 0.2;

/// Slack allowed when comparing a sample time against the end of its span
pub const SAMPLE_EPSILON: f64 = 1e-9;

/// Settings for an adjustment blend.
///
/// Deserialized settings are validated like [`BlendConfig::with_step`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBlendConfig")]
pub struct BlendConfig {
    /// Base-layer sampling step
    step: f64,
    /// Tangent mode forced on both bounds of every key pair before sampling
    pub boundary_tangent: TangentMode,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            boundary_tangent: TangentMode::Linear,
        }
    }
}

/// Unvalidated settings as read from a file
#[derive(Deserialize)]
#[serde(rename = "BlendConfig")]
struct RawBlendConfig {
    #[serde(default = "default_step")]
    step: f64,
    #[serde(default)]
    boundary_tangent: TangentMode,
}

fn default_step() -> f64 {
    DEFAULT_STEP
}

impl TryFrom<RawBlendConfig> for BlendConfig {
    type Error = BlendError;

    fn try_from(raw: RawBlendConfig) -> Result<Self> {
        Ok(Self::with_step(raw.step)?.with_boundary_tangent(raw.boundary_tangent))
    }
}

impl BlendConfig {
    /// Create settings with a custom sampling step
    pub fn with_step(step: f64) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(BlendError::InvalidStep(step));
        }
        Ok(Self {
            step,
            ..Self::default()
        })
    }

    /// Set the boundary tangent mode
    pub fn with_boundary_tangent(mut self, mode: TangentMode) -> Self {
        self.boundary_tangent = mode;
        self
    }

    /// Base-layer sampling step
    pub fn step(&self) -> f64 {
        self.step
    }
}
