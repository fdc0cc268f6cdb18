// SPDX-License-Identifier: MIT OR Apache-2.0
//! Keyframe definitions for layered curves.

use ordoplay_adjustment_blend::TangentMode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a keyframe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyframeId(pub Uuid);

impl KeyframeId {
    /// Create a new random keyframe ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for KeyframeId {
    fn default() -> Self {
        Self::new()
    }
}

/// A keyframe on a curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Unique keyframe ID
    #[serde(default)]
    pub id: KeyframeId,
    /// Time in host time units
    pub time: f64,
    /// Value at this keyframe
    pub value: f64,
    /// Tangent mode arriving at this key
    #[serde(default)]
    pub in_tangent: TangentMode,
    /// Tangent mode leaving this key
    #[serde(default)]
    pub out_tangent: TangentMode,
}

impl Keyframe {
    /// Create a new keyframe with linear tangents
    pub fn new(time: f64, value: f64) -> Self {
        Self {
            id: KeyframeId::new(),
            time,
            value,
            in_tangent: TangentMode::Linear,
            out_tangent: TangentMode::Linear,
        }
    }

    /// Set both tangent modes
    pub fn with_tangents(mut self, mode: TangentMode) -> Self {
        self.in_tangent = mode;
        self.out_tangent = mode;
        self
    }
}

/// Interpolation utilities
pub struct Interpolation;

impl Interpolation {
    /// Linear interpolation between two values
    pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
        a + (b - a) * t
    }

    /// Cubic Hermite interpolation with tangents scaled to the unit interval
    pub fn hermite(p0: f64, m0: f64, p1: f64, m1: f64, t: f64) -> f64 {
        let t2 = t * t;
        let t3 = t2 * t;

        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        h00 * p0 + h10 * m0 + h01 * p1 + h11 * m1
    }

    /// Slope of the straight line between two keys
    pub fn secant(a: &Keyframe, b: &Keyframe) -> f64 {
        let dt = b.time - a.time;
        if dt.abs() < f64::EPSILON {
            0.0
        } else {
            (b.value - a.value) / dt
        }
    }
}
