// SPDX-License-Identifier: MIT OR Apache-2.0
//! Animation curves: sorted scalar keyframes with tangent-aware evaluation.

use crate::keyframe::{Interpolation, Keyframe, KeyframeId};
use ordoplay_adjustment_blend::TangentMode;
use serde::{Deserialize, Serialize};

/// Keys closer than this in time are the same key
pub const KEY_TIME_EPSILON: f64 = 1e-6;

/// A scalar animation curve
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimCurve {
    /// Keyframes, sorted by time
    keyframes: Vec<Keyframe>,
}

impl AnimCurve {
    /// Create an empty curve
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a curve with linear keys at the given (time, value) pairs
    pub fn from_keys(keys: &[(f64, f64)]) -> Self {
        let mut curve = Self::new();
        for &(time, value) in keys {
            curve.set_keyframe_at(time, value);
        }
        curve
    }

    /// Add a keyframe
    pub fn add_keyframe(&mut self, keyframe: Keyframe) {
        self.keyframes.push(keyframe);
        self.sort_keyframes();
    }

    /// Remove a keyframe
    pub fn remove_keyframe(&mut self, keyframe_id: KeyframeId) {
        self.keyframes.retain(|k| k.id != keyframe_id);
    }

    /// Sort keyframes by time
    fn sort_keyframes(&mut self) {
        self.keyframes.sort_by(|a, b| a.time.total_cmp(&b.time));
    }

    fn position_at(&self, time: f64) -> Option<usize> {
        self.keyframes
            .iter()
            .position(|k| (k.time - time).abs() < KEY_TIME_EPSILON)
    }

    /// Get keyframe at time (if exists)
    pub fn keyframe_at(&self, time: f64) -> Option<&Keyframe> {
        self.position_at(time).map(|idx| &self.keyframes[idx])
    }

    /// Insert or update keyframe at time.
    ///
    /// An existing key keeps its tangent modes and only takes the new value.
    pub fn set_keyframe_at(&mut self, time: f64, value: f64) {
        if let Some(idx) = self.position_at(time) {
            self.keyframes[idx].value = value;
        } else {
            self.add_keyframe(Keyframe::new(time, value));
        }
    }

    /// Set both tangent modes of the key at `time`, returning whether a key was found
    pub fn set_tangents_at(&mut self, time: f64, mode: TangentMode) -> bool {
        match self.position_at(time) {
            Some(idx) => {
                self.keyframes[idx].in_tangent = mode;
                self.keyframes[idx].out_tangent = mode;
                true
            }
            None => false,
        }
    }

    /// Times of all keys, ascending
    pub fn keyframe_times(&self) -> Vec<f64> {
        self.keyframes.iter().map(|k| k.time).collect()
    }

    /// First and last key times
    pub fn time_range(&self) -> Option<(f64, f64)> {
        Some((self.keyframes.first()?.time, self.keyframes.last()?.time))
    }

    /// Get keyframes in a time range
    pub fn keyframes_in_range(&self, start: f64, end: f64) -> Vec<&Keyframe> {
        self.keyframes
            .iter()
            .filter(|k| k.time >= start && k.time <= end)
            .collect()
    }

    /// Get all keyframes
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Get keyframe count
    pub fn keyframe_count(&self) -> usize {
        self.keyframes.len()
    }

    /// Whether the curve has no keys
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Evaluate the curve at a given time.
    ///
    /// Holds the first and last values outside the keyed range.
    pub fn evaluate(&self, time: f64) -> Option<f64> {
        let first = self.keyframes.first()?;
        let last = self.keyframes.last()?;
        if time <= first.time {
            return Some(first.value);
        }
        if time >= last.time {
            return Some(last.value);
        }

        // First keyframe strictly after time; at least 1 given the bounds above
        let next = self.keyframes.iter().position(|k| k.time > time)?;
        let prev = next - 1;
        let (a, b) = (&self.keyframes[prev], &self.keyframes[next]);

        let dt = b.time - a.time;
        if dt.abs() < KEY_TIME_EPSILON {
            return Some(b.value);
        }
        let t = (time - a.time) / dt;

        let value = match (a.out_tangent, b.in_tangent) {
            (TangentMode::Constant, _) => a.value,
            (TangentMode::Linear, TangentMode::Linear) => Interpolation::lerp(a.value, b.value, t),
            _ => Interpolation::hermite(
                a.value,
                self.out_slope(prev) * dt,
                b.value,
                self.in_slope(next) * dt,
                t,
            ),
        };
        Some(value)
    }

    fn out_slope(&self, idx: usize) -> f64 {
        match self.keyframes[idx].out_tangent {
            TangentMode::Constant => 0.0,
            TangentMode::Linear => self
                .keyframes
                .get(idx + 1)
                .map_or(0.0, |next| Interpolation::secant(&self.keyframes[idx], next)),
            TangentMode::Bezier | TangentMode::Auto => self.smooth_slope(idx),
        }
    }

    fn in_slope(&self, idx: usize) -> f64 {
        match self.keyframes[idx].in_tangent {
            TangentMode::Constant => 0.0,
            TangentMode::Linear => idx
                .checked_sub(1)
                .map_or(0.0, |prev| Interpolation::secant(&self.keyframes[prev], &self.keyframes[idx])),
            TangentMode::Bezier | TangentMode::Auto => self.smooth_slope(idx),
        }
    }

    /// Catmull-Rom style slope through the neighbouring keys
    fn smooth_slope(&self, idx: usize) -> f64 {
        let prev = idx.checked_sub(1).and_then(|i| self.keyframes.get(i));
        let next = self.keyframes.get(idx + 1);
        match (prev, next) {
            (Some(p), Some(n)) => Interpolation::secant(p, n),
            (Some(p), None) => Interpolation::secant(p, &self.keyframes[idx]),
            (None, Some(n)) => Interpolation::secant(&self.keyframes[idx], n),
            (None, None) => 0.0,
        }
    }
}
