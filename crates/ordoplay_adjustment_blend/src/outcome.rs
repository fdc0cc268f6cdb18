// SPDX-License-Identifier: MIT OR Apache-2.0
//! What a blend did, and why it did nothing when it did nothing.

use serde::{Deserialize, Serialize};

/// Why a character, object or key pair was left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkipReason {
    /// The scene has no root layer
    NoRootLayer,
    /// No additive layer above the root
    NotEnoughLayers,
    /// The object is not animated
    NoCurve,
    /// Fewer than two keys on the pose layer
    NotEnoughKeys,
    /// No character given and none in the scene
    NoCharacter,
    /// The character has no member objects
    NoMembers,
    /// The base layer does not move across the key pair
    DegenerateInterval,
    /// The base layer could not be evaluated across the key pair
    UnevaluableInterval,
}

impl SkipReason {
    /// Get the display description
    pub fn description(&self) -> &'static str {
        match self {
            Self::NoRootLayer => "no root layer",
            Self::NotEnoughLayers => "no additive layer",
            Self::NoCurve => "not animated",
            Self::NotEnoughKeys => "fewer than two pose keys",
            Self::NoCharacter => "no character",
            Self::NoMembers => "character has no objects",
            Self::DegenerateInterval => "base layer is still",
            Self::UnevaluableInterval => "base layer cannot be evaluated",
        }
    }
}

/// Result of blending one key pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntervalOutcome {
    /// Nothing written
    Skipped(SkipReason),
    /// Keys written to the pose layer
    Processed {
        /// Number of keys written
        keys_written: usize,
    },
}

/// Result of blending one object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlendOutcome {
    /// A gate failed before any key pair was considered
    Skipped(SkipReason),
    /// Key pairs were blended
    Processed {
        /// Key pairs that wrote keys
        intervals: usize,
        /// Total keys written
        keys_written: usize,
    },
}

impl BlendOutcome {
    /// Keys written for this object
    pub fn keys_written(&self) -> usize {
        match self {
            Self::Skipped(_) => 0,
            Self::Processed { keys_written, .. } => *keys_written,
        }
    }
}

/// Outcome for one member object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectReport {
    /// Object name
    pub object: String,
    /// What happened to it
    pub outcome: BlendOutcome,
}

/// Character-level outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterOutcome {
    /// The character was not blended
    Skipped(SkipReason),
    /// Every member object was visited
    Processed,
}

/// Report for a whole-character blend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterReport {
    /// Resolved character, if any
    pub character: Option<String>,
    /// Character-level outcome
    pub outcome: CharacterOutcome,
    /// Per-object outcomes, in member order
    pub objects: Vec<ObjectReport>,
}

impl CharacterReport {
    pub(crate) fn skipped(character: Option<String>, reason: SkipReason) -> Self {
        Self {
            character,
            outcome: CharacterOutcome::Skipped(reason),
            objects: Vec::new(),
        }
    }

    /// Total keys written across all objects
    pub fn keys_written(&self) -> usize {
        self.objects.iter().map(|o| o.outcome.keys_written()).sum()
    }

    /// Objects that had at least one key pair blended
    pub fn processed_objects(&self) -> impl Iterator<Item = &ObjectReport> {
        self.objects
            .iter()
            .filter(|o| matches!(o.outcome, BlendOutcome::Processed { .. }))
    }
}
