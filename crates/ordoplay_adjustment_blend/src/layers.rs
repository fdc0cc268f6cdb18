// SPDX-License-Identifier: MIT OR Apache-2.0
//! Layer enumeration for the blend.
//!
//! A layer stack is one root (base) layer followed by zero or more additive
//! layers in stacking order. The topmost additive layer is the pose layer
//! whose interpolation gets adjusted.

use crate::provider::AnimCurveProvider;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to an animation layer, compared by name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerId(pub String);

impl LayerId {
    /// Create a layer handle from a name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Layer name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LayerId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Role of a layer within the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LayerRole {
    /// Base layer carrying the primary motion
    Root,
    /// Layer composited as an offset on top of the layers below it
    #[default]
    Additive,
}

/// A layer and its role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    /// Layer handle
    pub id: LayerId,
    /// Layer role
    pub role: LayerRole,
}

impl Layer {
    /// Create the root layer
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            id: LayerId::new(name),
            role: LayerRole::Root,
        }
    }

    /// Create an additive layer
    pub fn additive(name: impl Into<String>) -> Self {
        Self {
            id: LayerId::new(name),
            role: LayerRole::Additive,
        }
    }
}

/// Ordered set of layers relevant to blending
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerStack {
    /// Root layer
    pub root: Layer,
    /// Additive layers, bottom to top
    pub additive: Vec<Layer>,
}

impl LayerStack {
    /// Create a stack with only a root layer
    pub fn new(root: Layer) -> Self {
        Self {
            root,
            additive: Vec::new(),
        }
    }

    /// Push an additive layer on top of the stack
    pub fn with_additive(mut self, layer: Layer) -> Self {
        self.additive.push(layer);
        self
    }

    /// All layers, root first then additive layers in stacking order
    pub fn all_layers(&self) -> impl Iterator<Item = &Layer> {
        std::iter::once(&self.root).chain(self.additive.iter())
    }

    /// Number of layers including the root
    pub fn len(&self) -> usize {
        1 + self.additive.len()
    }

    /// A stack always holds its root layer
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The pose layer under blend, if any additive layer exists
    pub fn topmost_additive_layer(&self) -> Option<&Layer> {
        self.additive.last()
    }

    /// Whether the stack holds a layer with this handle
    pub fn contains(&self, id: &LayerId) -> bool {
        self.all_layers().any(|layer| &layer.id == id)
    }
}

/// Enumerate the provider's layers, root first.
///
/// Returns an empty list when the provider has no root layer.
pub fn enumerate_layers<P: AnimCurveProvider + ?Sized>(provider: &P) -> Vec<Layer> {
    provider
        .all_layers()
        .map(|stack| stack.all_layers().cloned().collect())
        .unwrap_or_default()
}
