// SPDX-License-Identifier: MIT OR Apache-2.0
//! Adjustment blending for OrdoPlay animation layers.
//!
//! Adjustment blending reshapes the interpolation of an additive pose layer
//! so that its change between two keys happens where the base layer is
//! already moving, instead of evenly across the interval. This keeps the
//! energy of the base motion and protects contact points.
//!
//! ## Pipeline
//!
//! For every pair of consecutive keys on the topmost additive layer:
//! - The root layer is sampled at a fixed step across the pair
//! - Per-step base-layer change is normalised into fractions
//! - The pose layer's net change is spread along those fractions
//! - The resulting dense keys are written back to the pose layer
//!
//! The host animation system is reached only through [`AnimCurveProvider`].

pub mod config;
pub mod driver;
pub mod error;
pub mod fraction;
pub mod layers;
pub mod outcome;
pub mod provider;
pub mod redistribute;
pub mod sampler;
pub mod segment;

#[cfg(test)]
mod testing;

pub use config::{BlendConfig, DEFAULT_STEP, SAMPLE_EPSILON};
pub use driver::{blend_character, blend_key_pair, blend_object, NO_ADDITIVE_LAYER_WARNING};
pub use error::{BlendError, Result};
pub use fraction::{change_fractions, ChangeFractions, FracSample};
pub use layers::{enumerate_layers, Layer, LayerId, LayerRole, LayerStack};
pub use outcome::{
    BlendOutcome, CharacterOutcome, CharacterReport, IntervalOutcome, ObjectReport, SkipReason,
};
pub use provider::{AnimCurveProvider, TangentMode};
pub use redistribute::{redistribute, write_keys, Direction, RedistributedKey};
pub use sampler::{sample_span, sample_times, SpanSample};
pub use segment::{key_pairs, KeyPair};
