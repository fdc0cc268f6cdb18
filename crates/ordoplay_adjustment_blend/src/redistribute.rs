// SPDX-License-Identifier: MIT OR Apache-2.0
//! Redistribution of pose-layer change along the base-layer change profile.
//!
//! The pose layer's net change over a key pair is spread across the span in
//! proportion to how much the base layer moved in each sample step, so the
//! pose moves where the body is already moving and holds where it is still.

use crate::fraction::FracSample;
use crate::layers::LayerId;
use crate::provider::AnimCurveProvider;
use crate::sampler::SpanSample;
use crate::segment::KeyPair;
use serde::{Deserialize, Serialize};

/// Direction the pose value travels across a key pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Stop value above start value
    Ascending,
    /// Anything else, including equal values
    Descending,
}

impl Direction {
    /// Direction from `start` to `stop`.
    ///
    /// Only a strictly greater stop value ascends, so a pair with equal
    /// values is treated as descending.
    pub fn between(start: f64, stop: f64) -> Self {
        if stop > start {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    /// `1.0` or `-1.0`
    pub fn sign(self) -> f64 {
        match self {
            Self::Ascending => 1.0,
            Self::Descending => -1.0,
        }
    }
}

/// A pose-layer key produced by the redistribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RedistributedKey {
    /// Key time
    pub time: f64,
    /// Value written to the pose layer
    pub value: f64,
    /// Signed pose change contributed by the step ending at `time`
    pub delta: f64,
}

/// Spread the key pair's pose change over `fractions`.
///
/// `span` and `fractions` are aligned by index. Each written value is the
/// running pose value plus the base-layer sample at the same index. Empty
/// fractions (a still base layer) produce no keys.
pub fn redistribute(pair: &KeyPair, span: &[SpanSample], fractions: &[FracSample]) -> Vec<RedistributedKey> {
    let total_pose_change = pair.total_change();
    let direction = Direction::between(pair.start_value, pair.stop_value);

    let mut previous_value = pair.start_value;
    fractions
        .iter()
        .zip(span)
        .map(|(frac, sample)| {
            let delta = direction.sign() * total_pose_change * frac.fraction;
            let current_value = previous_value + delta;
            previous_value = current_value;
            RedistributedKey {
                time: frac.time,
                value: current_value + sample.value,
                delta,
            }
        })
        .collect()
}

/// Write redistributed keys onto the pose layer, returning how many were written
pub fn write_keys<P: AnimCurveProvider + ?Sized>(
    provider: &mut P,
    object: &str,
    pose_layer: &LayerId,
    keys: &[RedistributedKey],
) -> usize {
    provider.set_preferred(pose_layer);
    for key in keys {
        provider.set_key(object, pose_layer, key.time, key.value);
    }
    keys.len()
}
