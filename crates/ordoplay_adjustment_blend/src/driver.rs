// SPDX-License-Identifier: MIT OR Apache-2.0
//! Per-object and per-character blend orchestration.
//!
//! Blending runs serially: hosts that evaluate through a global preferred
//! layer would otherwise race on that flag. Every gate that finds nothing to
//! do skips quietly and reports why.

use crate::config::BlendConfig;
use crate::fraction::change_fractions;
use crate::layers::LayerId;
use crate::outcome::{
    BlendOutcome, CharacterOutcome, CharacterReport, IntervalOutcome, ObjectReport, SkipReason,
};
use crate::provider::AnimCurveProvider;
use crate::redistribute::{redistribute, write_keys};
use crate::sampler::sample_span;
use crate::segment::{key_pairs, KeyPair};

/// Warning shown when a character cannot be blended
pub const NO_ADDITIVE_LAYER_WARNING: &str = "No additive layer found. Adjustment blending affects \
interpolation between keys on the topmost additive layer.";

/// Blend a single key pair of an object.
///
/// Forces the configured tangent mode on both bounding pose keys, samples
/// the root layer across the pair and writes the redistributed keys. The
/// pose layer is preferred again as soon as sampling is done, whether or not
/// the pair is skipped.
pub fn blend_key_pair<P: AnimCurveProvider + ?Sized>(
    provider: &mut P,
    object: &str,
    root_layer: &LayerId,
    pose_layer: &LayerId,
    pair: &KeyPair,
    config: &BlendConfig,
) -> IntervalOutcome {
    provider.set_preferred(pose_layer);
    provider.set_tangent_mode(object, pose_layer, pair.start_time, config.boundary_tangent);
    provider.set_tangent_mode(object, pose_layer, pair.stop_time, config.boundary_tangent);

    let span = sample_span(
        provider,
        object,
        root_layer,
        pair.start_time,
        pair.stop_time,
        config.step(),
    );
    provider.set_preferred(pose_layer);

    let Some(span) = span else {
        return IntervalOutcome::Skipped(SkipReason::UnevaluableInterval);
    };

    let fractions = change_fractions(&span);
    if fractions.is_degenerate() {
        return IntervalOutcome::Skipped(SkipReason::DegenerateInterval);
    }
    tracing::trace!(
        "{object}: {}..{} base change {} over {} samples",
        pair.start_time,
        pair.stop_time,
        fractions.total_change,
        span.len()
    );

    let keys = redistribute(pair, &span, &fractions.samples);
    let keys_written = write_keys(provider, object, pose_layer, &keys);
    IntervalOutcome::Processed { keys_written }
}

/// Adjustment-blend one object's topmost additive layer against the root layer
pub fn blend_object<P: AnimCurveProvider + ?Sized>(
    provider: &mut P,
    object: &str,
    config: &BlendConfig,
) -> BlendOutcome {
    let skip = |reason: SkipReason| {
        tracing::debug!("Skipping {object}: {}", reason.description());
        BlendOutcome::Skipped(reason)
    };

    let Some(stack) = provider.all_layers() else {
        return skip(SkipReason::NoRootLayer);
    };
    let Some(pose_layer) = stack.topmost_additive_layer().map(|l| l.id.clone()) else {
        return skip(SkipReason::NotEnoughLayers);
    };
    let root_layer = stack.root.id;

    provider.set_preferred(&root_layer);
    if !provider.has_curve(object) {
        return skip(SkipReason::NoCurve);
    }

    provider.set_preferred(&pose_layer);
    let keys = provider.explicit_keyframe_times(object, &pose_layer);
    if keys.len() < 2 {
        return skip(SkipReason::NotEnoughKeys);
    }

    // Pairs are evaluated before any write so later pairs see the original pose
    let pairs = key_pairs(provider, object, &pose_layer, &keys);

    let mut intervals = 0;
    let mut keys_written = 0;
    for pair in &pairs {
        match blend_key_pair(provider, object, &root_layer, &pose_layer, pair, config) {
            IntervalOutcome::Processed { keys_written: written } => {
                intervals += 1;
                keys_written += written;
            }
            IntervalOutcome::Skipped(reason) => {
                tracing::debug!(
                    "{object}: key pair {}..{} left as is: {}",
                    pair.start_time,
                    pair.stop_time,
                    reason.description()
                );
            }
        }
    }

    BlendOutcome::Processed {
        intervals,
        keys_written,
    }
}

/// Adjustment-blend every member object of a character.
///
/// With no character given, the first character in the scene is used. An
/// unresolvable or empty character raises a warning through the provider;
/// a missing additive layer skips quietly.
pub fn blend_character<P: AnimCurveProvider + ?Sized>(
    provider: &mut P,
    character: Option<&str>,
    config: &BlendConfig,
) -> CharacterReport {
    let character = match character {
        Some(name) if !name.is_empty() => Some(name.to_string()),
        _ => provider.default_character(),
    };
    let Some(character) = character else {
        provider.warn(NO_ADDITIVE_LAYER_WARNING);
        return CharacterReport::skipped(None, SkipReason::NoCharacter);
    };

    let members = provider.character_members(&character).unwrap_or_default();
    if members.is_empty() {
        provider.warn(NO_ADDITIVE_LAYER_WARNING);
        return CharacterReport::skipped(Some(character), SkipReason::NoMembers);
    }

    let layer_count = provider.all_layers().map_or(0, |stack| stack.len());
    if layer_count < 2 {
        let reason = if layer_count == 0 {
            SkipReason::NoRootLayer
        } else {
            SkipReason::NotEnoughLayers
        };
        tracing::debug!("Skipping character {character}: {}", reason.description());
        return CharacterReport::skipped(Some(character), reason);
    }

    let objects: Vec<ObjectReport> = members
        .into_iter()
        .filter(|object| !object.is_empty())
        .map(|object| {
            let outcome = blend_object(provider, &object, config);
            ObjectReport { object, outcome }
        })
        .collect();

    let report = CharacterReport {
        character: Some(character),
        outcome: CharacterOutcome::Processed,
        objects,
    };
    tracing::info!(
        "Adjustment blended {}: {} of {} objects, {} keys written",
        report.character.as_deref().unwrap_or_default(),
        report.processed_objects().count(),
        report.objects.len(),
        report.keys_written()
    );
    report
}
