// SPDX-License-Identifier: MIT OR Apache-2.0
//! Splitting pose-layer keys into independent blend intervals.

use crate::layers::LayerId;
use crate::provider::AnimCurveProvider;
use serde::{Deserialize, Serialize};

/// Two consecutive pose-layer keys bounding one blend interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyPair {
    /// Time of the first key
    pub start_time: f64,
    /// Time of the second key
    pub stop_time: f64,
    /// Pose value at `start_time`
    pub start_value: f64,
    /// Pose value at `stop_time`
    pub stop_value: f64,
}

impl KeyPair {
    /// Length of the interval
    pub fn duration(&self) -> f64 {
        self.stop_time - self.start_time
    }

    /// Absolute pose change across the interval
    pub fn total_change(&self) -> f64 {
        (self.stop_value - self.start_value).abs()
    }
}

/// Build one [`KeyPair`] per consecutive pair of `keys`.
///
/// Fewer than two keys produce no pairs. Values are evaluated on
/// `pose_layer`, which is made preferred first. Pairs whose times are not
/// strictly increasing, or whose bounds cannot be evaluated, are dropped.
pub fn key_pairs<P: AnimCurveProvider + ?Sized>(
    provider: &mut P,
    object: &str,
    pose_layer: &LayerId,
    keys: &[f64],
) -> Vec<KeyPair> {
    if keys.len() < 2 {
        return Vec::new();
    }

    provider.set_preferred(pose_layer);

    let mut pairs = Vec::with_capacity(keys.len() - 1);
    for window in keys.windows(2) {
        let (start_time, stop_time) = (window[0], window[1]);
        if stop_time <= start_time {
            tracing::debug!("{object}: ignoring key pair {start_time}..{stop_time}, times not increasing");
            continue;
        }

        let start_value = provider.evaluate(object, start_time, pose_layer);
        let stop_value = provider.evaluate(object, stop_time, pose_layer);
        let (Some(start_value), Some(stop_value)) = (start_value, stop_value) else {
            tracing::debug!("{object}: no value on {pose_layer} for {start_time}..{stop_time}");
            continue;
        };

        pairs.push(KeyPair {
            start_time,
            stop_time,
            start_value,
            stop_value,
        });
    }
    pairs
}
