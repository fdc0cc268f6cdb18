// SPDX-License-Identifier: MIT OR Apache-2.0
//! Animation layers holding one curve per animated object.

use crate::curve::AnimCurve;
use indexmap::IndexMap;
use ordoplay_adjustment_blend::{Layer, LayerId, LayerRole};
use serde::{Deserialize, Serialize};

/// An animation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimLayer {
    /// Layer name, unique within a scene
    pub name: String,
    /// Root or additive
    pub role: LayerRole,
    /// Whether this layer is used when evaluating curves on several layers
    #[serde(default)]
    pub preferred: bool,
    /// Muted layers do not contribute to the composite
    #[serde(default)]
    pub muted: bool,
    /// Curves by object name
    #[serde(default)]
    curves: IndexMap<String, AnimCurve>,
}

impl AnimLayer {
    /// Create a new layer
    pub fn new(name: impl Into<String>, role: LayerRole) -> Self {
        Self {
            name: name.into(),
            role,
            preferred: false,
            muted: false,
            curves: IndexMap::new(),
        }
    }

    /// Create the root layer
    pub fn root(name: impl Into<String>) -> Self {
        Self::new(name, LayerRole::Root)
    }

    /// Create an additive layer
    pub fn additive(name: impl Into<String>) -> Self {
        Self::new(name, LayerRole::Additive)
    }

    /// Handle used by the blend
    pub fn id(&self) -> LayerId {
        LayerId::new(self.name.clone())
    }

    /// Layer description used by the blend
    pub fn describe(&self) -> Layer {
        Layer {
            id: self.id(),
            role: self.role,
        }
    }

    /// Whether `id` names this layer
    pub fn is(&self, id: &LayerId) -> bool {
        self.name == id.as_str()
    }

    /// Add a curve for an object, replacing any existing one
    pub fn insert_curve(&mut self, object: impl Into<String>, curve: AnimCurve) {
        self.curves.insert(object.into(), curve);
    }

    /// Remove an object's curve
    pub fn remove_curve(&mut self, object: &str) -> Option<AnimCurve> {
        self.curves.shift_remove(object)
    }

    /// Get an object's curve
    pub fn curve(&self, object: &str) -> Option<&AnimCurve> {
        self.curves.get(object)
    }

    /// Get an object's curve mutably
    pub fn curve_mut(&mut self, object: &str) -> Option<&mut AnimCurve> {
        self.curves.get_mut(object)
    }

    /// Get an object's curve, creating an empty one if needed
    pub fn curve_entry(&mut self, object: &str) -> &mut AnimCurve {
        self.curves.entry(object.to_string()).or_default()
    }

    /// Object names with a curve on this layer
    pub fn objects(&self) -> impl Iterator<Item = &str> {
        self.curves.keys().map(String::as_str)
    }

    /// Get curve count
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Set a key on an object's curve
    pub fn key(mut self, object: &str, time: f64, value: f64) -> Self {
        self.curve_entry(object).set_keyframe_at(time, value);
        self
    }
}
