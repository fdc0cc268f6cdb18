// SPDX-License-Identifier: MIT OR Apache-2.0
//! Interface to the host animation system.

use crate::layers::{LayerId, LayerStack};
use serde::{Deserialize, Serialize};

/// Tangent mode applied to a keyframe side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Default)]
pub enum TangentMode {
    /// Hold the value until the next key
    Constant,
    /// Straight line toward the neighbouring key
    #[default]
    Linear,
    /// User-shaped bezier handle
    Bezier,
    /// Auto-smooth
    Auto,
}

/// Host animation system consumed by the blend.
///
/// Objects are addressed by name. Every evaluation names the layer it reads
/// from explicitly; hosts that can only evaluate through a global preferred
/// flag should honour [`AnimCurveProvider::set_preferred`], which the blend
/// calls immediately before each evaluating phase.
pub trait AnimCurveProvider {
    /// Root layer and additive layers in stacking order, or `None` without a root layer
    fn all_layers(&self) -> Option<LayerStack>;

    /// Mark `layer` preferred and every other layer not preferred
    fn set_preferred(&mut self, layer: &LayerId);

    /// Whether the object has an animation curve on any layer
    fn has_curve(&self, object: &str) -> bool;

    /// Value of the object's curve on `layer` at `time`
    fn evaluate(&self, object: &str, time: f64, layer: &LayerId) -> Option<f64>;

    /// Times of keys explicitly set on `layer`, ascending
    fn explicit_keyframe_times(&self, object: &str, layer: &LayerId) -> Vec<f64>;

    /// Create or overwrite a key
    fn set_key(&mut self, object: &str, layer: &LayerId, time: f64, value: f64);

    /// Set both the in and out tangent of the key at `time`
    fn set_tangent_mode(&mut self, object: &str, layer: &LayerId, time: f64, mode: TangentMode);

    /// First character in the scene
    fn default_character(&self) -> Option<String>;

    /// Objects belonging to a character, `None` if the character is unknown
    fn character_members(&self, character: &str) -> Option<Vec<String>>;

    /// Non-fatal user notification
    fn warn(&mut self, message: &str) {
        tracing::warn!("{message}");
    }
}
