// SPDX-License-Identifier: MIT OR Apache-2.0
//! Normalised distribution of base-layer change across a span.

use crate::sampler::SpanSample;
use serde::{Deserialize, Serialize};

/// Share of the span's total base-layer change attributed to the step ending at `time`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FracSample {
    /// End time of the step
    pub time: f64,
    /// Fraction of total change, in `[0, 1]`
    pub fraction: f64,
}

/// Change fractions for one span
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChangeFractions {
    /// One entry per span sample; empty when the base layer does not move
    pub samples: Vec<FracSample>,
    /// Sum of absolute per-step base-layer change
    pub total_change: f64,
}

impl ChangeFractions {
    /// True when the base layer has no variation over the span
    pub fn is_degenerate(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Compute where the base layer changed across `span`.
///
/// The first sample gets a fraction of zero; every later sample gets its
/// absolute change from the previous sample divided by the total. A span
/// with zero total change yields no fractions.
pub fn change_fractions(span: &[SpanSample]) -> ChangeFractions {
    let changes: Vec<f64> = std::iter::once(0.0)
        .chain(span.windows(2).map(|w| (w[1].value - w[0].value).abs()))
        .take(span.len())
        .collect();
    let total_change: f64 = changes.iter().sum();

    if total_change == 0.0 {
        return ChangeFractions {
            samples: Vec::new(),
            total_change,
        };
    }

    let samples = span
        .iter()
        .zip(&changes)
        .map(|(sample, change)| FracSample {
            time: sample.time,
            fraction: change / total_change,
        })
        .collect();

    ChangeFractions {
        samples,
        total_change,
    }
}
