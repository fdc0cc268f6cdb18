// SPDX-License-Identifier: MIT OR Apache-2.0
//! Recording provider used by the unit tests.

use crate::layers::{Layer, LayerId, LayerStack};
use crate::provider::{AnimCurveProvider, TangentMode};
use std::cell::RefCell;
use std::collections::HashMap;

/// A key written through the provider
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Write {
    pub object: String,
    pub layer: LayerId,
    pub time: f64,
    pub value: f64,
}

/// Piecewise-linear provider that records every mutation
#[derive(Debug, Default)]
pub(crate) struct RecordingProvider {
    pub stack: Option<LayerStack>,
    pub preferred: Option<LayerId>,
    pub curves: HashMap<(String, LayerId), Vec<(f64, f64)>>,
    pub characters: Vec<(String, Vec<String>)>,
    pub writes: Vec<Write>,
    pub tangents: Vec<(String, LayerId, f64, TangentMode)>,
    /// Preferred layer at every tangent change
    pub tangent_preferred: Vec<Option<LayerId>>,
    pub warnings: Vec<String>,
    /// (requested layer, preferred layer) for every evaluation
    pub evaluations: RefCell<Vec<(LayerId, Option<LayerId>)>>,
}

impl RecordingProvider {
    /// Provider with a root layer `Base` and one additive layer `Pose`
    pub fn with_pose_layer() -> Self {
        Self {
            stack: Some(
                LayerStack::new(Layer::root("Base")).with_additive(Layer::additive("Pose")),
            ),
            ..Self::default()
        }
    }

    pub fn base() -> LayerId {
        LayerId::from("Base")
    }

    pub fn pose() -> LayerId {
        LayerId::from("Pose")
    }

    /// Add keys to an object's curve on a layer
    pub fn keys(mut self, object: &str, layer: &str, keys: &[(f64, f64)]) -> Self {
        let curve = self
            .curves
            .entry((object.to_string(), LayerId::from(layer)))
            .or_default();
        curve.extend_from_slice(keys);
        curve.sort_by(|a, b| a.0.total_cmp(&b.0));
        self
    }

    pub fn character(mut self, name: &str, members: &[&str]) -> Self {
        self.characters.push((
            name.to_string(),
            members.iter().map(|m| (*m).to_string()).collect(),
        ));
        self
    }
}

impl AnimCurveProvider for RecordingProvider {
    fn all_layers(&self) -> Option<LayerStack> {
        self.stack.clone()
    }

    fn set_preferred(&mut self, layer: &LayerId) {
        self.preferred = Some(layer.clone());
    }

    fn has_curve(&self, object: &str) -> bool {
        self.curves.keys().any(|(o, _)| o == object)
    }

    fn evaluate(&self, object: &str, time: f64, layer: &LayerId) -> Option<f64> {
        self.evaluations
            .borrow_mut()
            .push((layer.clone(), self.preferred.clone()));
        let keys = self.curves.get(&(object.to_string(), layer.clone()))?;
        let first = keys.first()?;
        let last = keys.last()?;
        if time <= first.0 {
            return Some(first.1);
        }
        if time >= last.0 {
            return Some(last.1);
        }
        keys.windows(2).find_map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            (time >= a.0 && time <= b.0).then(|| a.1 + (b.1 - a.1) * (time - a.0) / (b.0 - a.0))
        })
    }

    fn explicit_keyframe_times(&self, object: &str, layer: &LayerId) -> Vec<f64> {
        self.curves
            .get(&(object.to_string(), layer.clone()))
            .map(|keys| keys.iter().map(|k| k.0).collect())
            .unwrap_or_default()
    }

    fn set_key(&mut self, object: &str, layer: &LayerId, time: f64, value: f64) {
        self.writes.push(Write {
            object: object.to_string(),
            layer: layer.clone(),
            time,
            value,
        });
    }

    fn set_tangent_mode(&mut self, object: &str, layer: &LayerId, time: f64, mode: TangentMode) {
        self.tangents
            .push((object.to_string(), layer.clone(), time, mode));
        self.tangent_preferred.push(self.preferred.clone());
    }

    fn default_character(&self) -> Option<String> {
        self.characters.first().map(|(name, _)| name.clone())
    }

    fn character_members(&self, character: &str) -> Option<Vec<String>> {
        self.characters
            .iter()
            .find(|(name, _)| name == character)
            .map(|(_, members)| members.clone())
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}
