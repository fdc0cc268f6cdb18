// SPDX-License-Identifier: MIT OR Apache-2.0
//! Blend provider backed by an in-memory scene.

use crate::curve::AnimCurve;
use crate::layer::AnimLayer;
use crate::scene::AnimScene;
use ordoplay_adjustment_blend::{AnimCurveProvider, LayerId, LayerStack, TangentMode};

impl AnimCurveProvider for AnimScene {
    fn all_layers(&self) -> Option<LayerStack> {
        let root = self.root_layer()?.describe();
        Some(LayerStack {
            root,
            additive: self.additive_layers().iter().map(AnimLayer::describe).collect(),
        })
    }

    fn set_preferred(&mut self, layer: &LayerId) {
        self.prefer(layer);
    }

    fn has_curve(&self, object: &str) -> bool {
        self.layers()
            .any(|l| l.curve(object).is_some_and(|c| !c.is_empty()))
    }

    fn evaluate(&self, object: &str, time: f64, layer: &LayerId) -> Option<f64> {
        self.layer(layer)?.curve(object)?.evaluate(time)
    }

    fn explicit_keyframe_times(&self, object: &str, layer: &LayerId) -> Vec<f64> {
        self.layer(layer)
            .and_then(|l| l.curve(object))
            .map(AnimCurve::keyframe_times)
            .unwrap_or_default()
    }

    fn set_key(&mut self, object: &str, layer: &LayerId, time: f64, value: f64) {
        match self.layer_mut(layer) {
            Some(l) => l.curve_entry(object).set_keyframe_at(time, value),
            None => tracing::warn!("Cannot key {object}: layer {layer} not found"),
        }
    }

    fn set_tangent_mode(&mut self, object: &str, layer: &LayerId, time: f64, mode: TangentMode) {
        let found = self
            .layer_mut(layer)
            .and_then(|l| l.curve_mut(object))
            .is_some_and(|c| c.set_tangents_at(time, mode));
        if !found {
            tracing::debug!("No key on {object} at {time} in layer {layer} to set tangents on");
        }
    }

    fn default_character(&self) -> Option<String> {
        self.characters().next().map(|c| c.name.clone())
    }

    fn character_members(&self, character: &str) -> Option<Vec<String>> {
        self.character(character).map(|c| c.members.clone())
    }

    fn warn(&mut self, message: &str) {
        tracing::warn!("{message}");
        self.push_warning(message);
    }
}
