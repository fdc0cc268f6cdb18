// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fixed-step sampling of the base layer across a key pair.

use crate::config::SAMPLE_EPSILON;
use crate::layers::LayerId;
use crate::provider::AnimCurveProvider;
use serde::{Deserialize, Serialize};

/// Base-layer value at one sample time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpanSample {
    /// Sample time
    pub time: f64,
    /// Base-layer value at `time`
    pub value: f64,
}

/// Sample times `start, start + step, ...` up to and including `stop`.
///
/// The last time is not snapped onto `stop`: when the span is not a whole
/// number of steps the sequence ends short of it.
pub fn sample_times(start: f64, stop: f64, step: f64) -> impl Iterator<Item = f64> {
    (0u64..)
        .map(move |index| sample_time(start, step, index))
        .take_while(move |time| *time <= stop + SAMPLE_EPSILON)
}

fn sample_time(start: f64, step: f64, index: u64) -> f64 {
    start + index as f64 * step
}

/// Evaluate the root layer at fixed steps across `[start, stop]`.
///
/// The root layer is made preferred first. Returns `None` if the object has
/// no value on the root layer at any sample time.
pub fn sample_span<P: AnimCurveProvider + ?Sized>(
    provider: &mut P,
    object: &str,
    root_layer: &LayerId,
    start: f64,
    stop: f64,
    step: f64,
) -> Option<Vec<SpanSample>> {
    provider.set_preferred(root_layer);

    let provider = &*provider;
    sample_times(start, stop, step)
        .map(|time| {
            provider
                .evaluate(object, time, root_layer)
                .map(|value| SpanSample { time, value })
        })
        .collect()
}
