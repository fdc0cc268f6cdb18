// SPDX-License-Identifier: MIT OR Apache-2.0
//! End-to-end adjustment blending against an in-memory scene.

use approx::assert_abs_diff_eq;
use ordoplay_adjustment_blend::{
    blend_character, blend_object, change_fractions, redistribute, sample_span, AnimCurveProvider,
    BlendConfig, BlendOutcome, CharacterOutcome, Direction, KeyPair, LayerId, SkipReason,
    TangentMode, NO_ADDITIVE_LAYER_WARNING,
};
use ordoplay_anim_layers::{AnimLayer, AnimScene, Character, Keyframe};

fn base() -> LayerId {
    LayerId::from("BaseAnimation")
}

fn pose() -> LayerId {
    LayerId::from("Pose")
}

fn scene(base_layer: AnimLayer, pose_layer: AnimLayer) -> AnimScene {
    AnimScene::new("Test")
        .with_root(base_layer)
        .with_additive(pose_layer)
        .unwrap()
        .with_character(Character::with_members("hero", ["hips"]))
}

fn ramp_scene() -> AnimScene {
    scene(
        AnimLayer::root("BaseAnimation").key("hips", 0.0, 0.0).key("hips", 5.0, 1.0),
        AnimLayer::additive("Pose").key("hips", 0.0, 0.0).key("hips", 5.0, 10.0),
    )
}

fn pose_keys(scene: &AnimScene) -> Vec<(f64, f64)> {
    scene
        .layer(&pose())
        .and_then(|l| l.curve("hips"))
        .map(|c| c.keyframes().iter().map(|k| (k.time, k.value)).collect())
        .unwrap_or_default()
}

#[test]
fn test_uniform_base_degenerates_to_linear_blend() {
    let mut scene = ramp_scene();
    let report = blend_character(&mut scene, Some("hero"), &BlendConfig::default());

    assert_eq!(report.outcome, CharacterOutcome::Processed);
    assert_eq!(report.objects[0].outcome, BlendOutcome::Processed { intervals: 1, keys_written: 26 });

    let keys = pose_keys(&scene);
    assert_eq!(keys.len(), 26);
    for (time, value) in keys {
        let base_value = scene.evaluate("hips", time, &base()).unwrap();
        // pose part is the straight line from 0 to 10
        assert_abs_diff_eq!(value - base_value, 2.0 * time, epsilon = 1e-9);
    }
    assert_abs_diff_eq!(scene.evaluate("hips", 5.0, &pose()).unwrap(), 11.0, epsilon = 1e-9);
}

#[test]
fn test_uniform_base_fractions() {
    let mut scene = ramp_scene();
    let span = sample_span(&mut scene, "hips", &base(), 0.0, 5.0, 0.2).unwrap();
    let fractions = change_fractions(&span);

    assert_eq!(fractions.samples.len(), 26);
    assert_eq!(fractions.samples[0].fraction, 0.0);
    for frac in &fractions.samples[1..] {
        assert_abs_diff_eq!(frac.fraction, 1.0 / 25.0, epsilon = 1e-9);
    }
    assert_abs_diff_eq!(fractions.total_change, 1.0, epsilon = 1e-9);
}

#[test]
fn test_sharp_base_step_concentrates_pose_change() {
    let mut scene = scene(
        AnimLayer::root("BaseAnimation")
            .key("hips", 0.0, 0.0)
            .key("hips", 1.8, 0.0)
            .key("hips", 2.0, 1.0)
            .key("hips", 5.0, 1.0),
        AnimLayer::additive("Pose").key("hips", 0.0, 0.0).key("hips", 5.0, 10.0),
    );
    blend_object(&mut scene, "hips", &BlendConfig::default());

    for (time, value) in pose_keys(&scene) {
        let base_value = scene.evaluate("hips", time, &base()).unwrap();
        let pose_part = value - base_value;
        if time < 2.0 - 1e-9 {
            assert_abs_diff_eq!(pose_part, 0.0, epsilon = 1e-9);
        } else {
            assert_abs_diff_eq!(pose_part, 10.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_fractions_normalised_on_irregular_base() {
    let mut scene = scene(
        AnimLayer::root("BaseAnimation")
            .key("hips", 0.0, 0.0)
            .key("hips", 1.3, 2.5)
            .key("hips", 2.1, -0.7)
            .key("hips", 4.0, 0.4),
        AnimLayer::additive("Pose").key("hips", 0.0, 0.0).key("hips", 4.0, 10.0),
    );
    let span = sample_span(&mut scene, "hips", &base(), 0.0, 4.0, 0.2).unwrap();
    let fractions = change_fractions(&span);

    let sum: f64 = fractions.samples.iter().map(|f| f.fraction).sum();
    assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-9);

    let pair = KeyPair { start_time: 0.0, stop_time: 4.0, start_value: 0.0, stop_value: 10.0 };
    let net: f64 = redistribute(&pair, &span, &fractions.samples).iter().map(|k| k.delta).sum();
    assert_abs_diff_eq!(net, 10.0, epsilon = 1e-6);
}

#[test]
fn test_sampling_is_repeatable() {
    let mut scene = ramp_scene();
    let first = sample_span(&mut scene, "hips", &base(), 0.0, 5.0, 0.2);
    let second = sample_span(&mut scene, "hips", &base(), 0.0, 5.0, 0.2);
    assert_eq!(first, second);
}

#[test]
fn test_still_base_writes_nothing() {
    let mut scene = scene(
        AnimLayer::root("BaseAnimation").key("hips", 0.0, 0.5).key("hips", 5.0, 0.5),
        AnimLayer::additive("Pose").key("hips", 0.0, 0.0).key("hips", 5.0, 10.0),
    );
    let outcome = blend_object(&mut scene, "hips", &BlendConfig::default());

    assert_eq!(outcome, BlendOutcome::Processed { intervals: 0, keys_written: 0 });
    assert_eq!(pose_keys(&scene), vec![(0.0, 0.0), (5.0, 10.0)]);
}

#[test]
fn test_single_pose_key_is_skipped() {
    let mut scene = scene(
        AnimLayer::root("BaseAnimation").key("hips", 0.0, 0.0).key("hips", 5.0, 1.0),
        AnimLayer::additive("Pose").key("hips", 2.0, 3.0),
    );
    let outcome = blend_object(&mut scene, "hips", &BlendConfig::default());

    assert_eq!(outcome, BlendOutcome::Skipped(SkipReason::NotEnoughKeys));
    assert_eq!(pose_keys(&scene), vec![(2.0, 3.0)]);
}

#[test]
fn test_each_key_pair_blends_independently() {
    let mut scene = scene(
        AnimLayer::root("BaseAnimation").key("hips", 0.0, 0.0).key("hips", 4.0, 2.0),
        AnimLayer::additive("Pose")
            .key("hips", 0.0, 0.0)
            .key("hips", 2.0, 4.0)
            .key("hips", 4.0, 0.0),
    );
    let outcome = blend_object(&mut scene, "hips", &BlendConfig::default());

    assert_eq!(outcome, BlendOutcome::Processed { intervals: 2, keys_written: 22 });
    // the shared key at 2.0 is written by both pairs
    assert_eq!(pose_keys(&scene).len(), 21);
    assert_abs_diff_eq!(scene.evaluate("hips", 2.0, &pose()).unwrap(), 4.0 + 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scene.evaluate("hips", 4.0, &pose()).unwrap(), 0.0 + 2.0, epsilon = 1e-9);
}

#[test]
fn test_equal_pose_values_count_as_descending() {
    let mut scene = scene(
        AnimLayer::root("BaseAnimation").key("hips", 0.0, 0.0).key("hips", 5.0, 1.0),
        AnimLayer::additive("Pose").key("hips", 0.0, 3.0).key("hips", 5.0, 3.0),
    );
    assert_eq!(Direction::between(3.0, 3.0), Direction::Descending);

    blend_object(&mut scene, "hips", &BlendConfig::default());
    for (time, value) in pose_keys(&scene) {
        let base_value = scene.evaluate("hips", time, &base()).unwrap();
        assert_abs_diff_eq!(value, 3.0 + base_value, epsilon = 1e-9);
    }
}

#[test]
fn test_boundary_tangents_become_linear() {
    let mut scene = scene(
        AnimLayer::root("BaseAnimation").key("hips", 0.0, 0.0).key("hips", 5.0, 1.0),
        AnimLayer::additive("Pose"),
    );
    if let Some(layer) = scene.layer_mut(&pose()) {
        let curve = layer.curve_entry("hips");
        curve.add_keyframe(Keyframe::new(0.0, 0.0).with_tangents(TangentMode::Auto));
        curve.add_keyframe(Keyframe::new(5.0, 10.0).with_tangents(TangentMode::Auto));
    }
    blend_object(&mut scene, "hips", &BlendConfig::default());

    let curve = scene.layer(&pose()).and_then(|l| l.curve("hips")).unwrap();
    for time in [0.0, 5.0] {
        let key = curve.keyframe_at(time).unwrap();
        assert_eq!(key.in_tangent, TangentMode::Linear);
        assert_eq!(key.out_tangent, TangentMode::Linear);
    }
}

#[test]
fn test_exactly_one_layer_preferred_after_blend() {
    let mut scene = ramp_scene().with_additive(AnimLayer::additive("Pose2")).unwrap();
    if let Some(layer) = scene.layer_mut(&LayerId::from("Pose2")) {
        *layer = AnimLayer::additive("Pose2").key("hips", 0.0, 0.0).key("hips", 5.0, 1.0);
    }
    blend_character(&mut scene, None, &BlendConfig::default());

    assert_eq!(scene.layers().filter(|l| l.preferred).count(), 1);
    // only the topmost additive layer is rewritten
    assert_eq!(pose_keys(&scene), vec![(0.0, 0.0), (5.0, 10.0)]);
    let topmost = scene.layer(&LayerId::from("Pose2")).and_then(|l| l.curve("hips")).unwrap();
    assert_eq!(topmost.keyframe_count(), 26);
}

#[test]
fn test_character_gates() {
    let mut empty = AnimScene::new("Empty");
    let report = blend_character(&mut empty, None, &BlendConfig::default());
    assert_eq!(report.outcome, CharacterOutcome::Skipped(SkipReason::NoCharacter));
    assert_eq!(empty.warnings().to_vec(), vec![NO_ADDITIVE_LAYER_WARNING.to_string()]);

    let mut base_only = AnimScene::new("BaseOnly")
        .with_root(AnimLayer::root("BaseAnimation").key("hips", 0.0, 0.0))
        .with_character(Character::with_members("hero", ["hips"]));
    let report = blend_character(&mut base_only, Some("hero"), &BlendConfig::default());
    assert_eq!(report.outcome, CharacterOutcome::Skipped(SkipReason::NotEnoughLayers));
    assert!(base_only.warnings().is_empty());

    let mut unknown = ramp_scene();
    let report = blend_character(&mut unknown, Some("villain"), &BlendConfig::default());
    assert_eq!(report.outcome, CharacterOutcome::Skipped(SkipReason::NoMembers));
    assert_eq!(unknown.warnings().len(), 1);
}

#[test]
fn test_blend_survives_scene_file_round_trip() {
    let ron = ramp_scene().to_ron().unwrap();
    let mut scene = AnimScene::from_ron(&ron).unwrap();
    let report = blend_character(&mut scene, None, &BlendConfig::default());
    assert_eq!(report.keys_written(), 26);

    let reloaded = AnimScene::from_ron(&scene.to_ron().unwrap()).unwrap();
    assert_eq!(pose_keys(&reloaded), pose_keys(&scene));
}
