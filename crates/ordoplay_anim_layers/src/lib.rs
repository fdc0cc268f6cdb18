// SPDX-License-Identifier: MIT OR Apache-2.0
//! Layered animation curves for OrdoPlay.
//!
//! This crate provides an in-memory animation scene:
//! - Scalar curves with per-key in/out tangent modes
//! - A root layer with additive layers stacked on top
//! - A single preferred layer at any time
//! - Characters grouping animated objects
//! - RON and JSON scene files
//!
//! [`AnimScene`] implements
//! [`AnimCurveProvider`](ordoplay_adjustment_blend::AnimCurveProvider), so
//! adjustment blending can run directly against it.

pub mod character;
pub mod curve;
pub mod error;
pub mod keyframe;
pub mod layer;
pub mod provider;
pub mod scene;

pub use character::Character;
pub use curve::{AnimCurve, KEY_TIME_EPSILON};
pub use error::{Result, SceneError};
pub use keyframe::{Interpolation, Keyframe, KeyframeId};
pub use layer::AnimLayer;
pub use scene::{AnimScene, SCENE_FORMAT_VERSION};
