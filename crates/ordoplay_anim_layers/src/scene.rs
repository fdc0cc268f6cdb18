// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scene holding the layer stack and characters.

use crate::character::Character;
use crate::error::{Result, SceneError};
use crate::layer::AnimLayer;
use indexmap::IndexMap;
use ordoplay_adjustment_blend::{LayerId, LayerRole};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current scene file format version
pub const SCENE_FORMAT_VERSION: u32 = 1;

fn default_version() -> u32 {
    SCENE_FORMAT_VERSION
}

/// A layered animation scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimScene {
    /// File format version
    #[serde(default = "default_version")]
    pub version: u32,
    /// Scene name
    pub name: String,
    /// Base layer
    #[serde(default)]
    root: Option<AnimLayer>,
    /// Additive layers, bottom to top
    #[serde(default)]
    additive: Vec<AnimLayer>,
    /// Characters by name, in creation order
    #[serde(default)]
    characters: IndexMap<String, Character>,
    /// Warnings raised while working on the scene
    #[serde(skip)]
    warnings: Vec<String>,
}

impl AnimScene {
    /// Create an empty scene without layers
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: SCENE_FORMAT_VERSION,
            name: name.into(),
            root: None,
            additive: Vec::new(),
            characters: IndexMap::new(),
            warnings: Vec::new(),
        }
    }

    /// Set the root layer, replacing any existing one
    pub fn with_root(mut self, mut layer: AnimLayer) -> Self {
        layer.role = LayerRole::Root;
        self.root = Some(layer);
        self
    }

    /// Stack an additive layer on top, builder style
    pub fn with_additive(mut self, layer: AnimLayer) -> Result<Self> {
        self.add_additive_layer(layer)?;
        Ok(self)
    }

    /// Stack an additive layer on top
    pub fn add_additive_layer(&mut self, mut layer: AnimLayer) -> Result<LayerId> {
        if self.layers().any(|l| l.name == layer.name) {
            return Err(SceneError::DuplicateLayer(layer.name));
        }
        layer.role = LayerRole::Additive;
        let id = layer.id();
        self.additive.push(layer);
        Ok(id)
    }

    /// Remove an additive layer
    pub fn remove_additive_layer(&mut self, id: &LayerId) -> Result<AnimLayer> {
        let idx = self
            .additive
            .iter()
            .position(|l| l.is(id))
            .ok_or_else(|| SceneError::LayerNotFound(id.to_string()))?;
        Ok(self.additive.remove(idx))
    }

    /// Add or replace a character
    pub fn add_character(&mut self, character: Character) {
        self.characters.insert(character.name.clone(), character);
    }

    /// Add a character, builder style
    pub fn with_character(mut self, character: Character) -> Self {
        self.add_character(character);
        self
    }

    /// Get a character
    pub fn character(&self, name: &str) -> Option<&Character> {
        self.characters.get(name)
    }

    /// Get all characters
    pub fn characters(&self) -> impl Iterator<Item = &Character> {
        self.characters.values()
    }

    /// Get the root layer
    pub fn root_layer(&self) -> Option<&AnimLayer> {
        self.root.as_ref()
    }

    /// Get the additive layers, bottom to top
    pub fn additive_layers(&self) -> &[AnimLayer] {
        &self.additive
    }

    /// All layers, root first
    pub fn layers(&self) -> impl Iterator<Item = &AnimLayer> {
        self.root.iter().chain(self.additive.iter())
    }

    fn layers_mut(&mut self) -> impl Iterator<Item = &mut AnimLayer> {
        self.root.iter_mut().chain(self.additive.iter_mut())
    }

    /// Get a layer by handle
    pub fn layer(&self, id: &LayerId) -> Option<&AnimLayer> {
        self.layers().find(|l| l.is(id))
    }

    /// Get a layer by handle, mutably
    pub fn layer_mut(&mut self, id: &LayerId) -> Option<&mut AnimLayer> {
        self.layers_mut().find(|l| l.is(id))
    }

    /// Get layer count
    pub fn layer_count(&self) -> usize {
        self.layers().count()
    }

    /// The layer currently marked preferred
    pub fn preferred_layer(&self) -> Option<&AnimLayer> {
        self.layers().find(|l| l.preferred)
    }

    /// Mark one layer preferred and clear the flag everywhere else
    pub fn prefer(&mut self, id: &LayerId) {
        for layer in self.layers_mut() {
            layer.preferred = layer.is(id);
        }
    }

    /// Value of an object on all layers combined.
    ///
    /// Unmuted additive layers are added on top of the root. Returns `None`
    /// when no contributing layer animates the object.
    pub fn evaluate_composite(&self, object: &str, time: f64) -> Option<f64> {
        self.layers()
            .filter(|l| l.role == LayerRole::Root || !l.muted)
            .filter_map(|l| l.curve(object)?.evaluate(time))
            .fold(None, |acc, value| Some(acc.unwrap_or(0.0) + value))
    }

    /// Record a user warning
    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Warnings recorded so far
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Serialize to RON format
    pub fn to_ron(&self) -> Result<String> {
        let config = ron::ser::PrettyConfig::default()
            .struct_names(true)
            .enumerate_arrays(false);
        Ok(ron::ser::to_string_pretty(self, config)?)
    }

    /// Deserialize from RON format
    pub fn from_ron(s: &str) -> Result<Self> {
        Self::checked(ron::from_str(s)?)
    }

    /// Serialize to JSON format
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON format
    pub fn from_json(s: &str) -> Result<Self> {
        Self::checked(serde_json::from_str(s)?)
    }

    fn checked(scene: Self) -> Result<Self> {
        if scene.version > SCENE_FORMAT_VERSION {
            return Err(SceneError::UnsupportedVersion {
                found: scene.version,
                supported: SCENE_FORMAT_VERSION,
            });
        }
        Ok(scene)
    }

    /// Load a scene from a `.ron` or `.json` file
    pub fn load(path: &Path) -> Result<Self> {
        let format = SceneFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;
        let scene = match format {
            SceneFormat::Ron => Self::from_ron(&contents)?,
            SceneFormat::Json => Self::from_json(&contents)?,
        };
        tracing::info!("Loaded scene: {} from {:?}", scene.name, path);
        Ok(scene)
    }

    /// Save the scene to a `.ron` or `.json` file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = match SceneFormat::from_path(path)? {
            SceneFormat::Ron => self.to_ron()?,
            SceneFormat::Json => self.to_json()?,
        };
        std::fs::write(path, contents)?;
        tracing::info!("Saved scene: {} to {:?}", self.name, path);
        Ok(())
    }
}

impl Default for AnimScene {
    fn default() -> Self {
        Self::new("Untitled Scene")
    }
}

/// Scene file encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SceneFormat {
    Ron,
    Json,
}

impl SceneFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ron") => Ok(Self::Ron),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(SceneError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}
