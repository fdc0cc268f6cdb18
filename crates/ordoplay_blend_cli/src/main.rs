// SPDX-License-Identifier: MIT OR Apache-2.0
//! `OrdoPlay` adjustment blend command.
//!
//! Loads a layered animation scene, adjustment-blends the topmost additive
//! layer of one character against the root layer, and writes the scene back
//! to the same file.
//!
//! Set `RUST_LOG` to change verbosity, e.g. `RUST_LOG=ordoplay_adjustment_blend=debug`
//! to see why objects or key pairs were skipped.

mod args;

use args::BlendArgs;
use clap::Parser;
use ordoplay_adjustment_blend::{blend_character, BlendConfig, BlendOutcome, CharacterReport};
use ordoplay_anim_layers::{AnimScene, SceneError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "ordoplay_blend=info,ordoplay_adjustment_blend=info,ordoplay_anim_layers=info";

fn main() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = BlendArgs::parse();

    if let Err(e) = run(&args) {
        tracing::error!("Adjustment blend failed: {e}");
        std::process::exit(1);
    }
}

fn run(args: &BlendArgs) -> Result<(), SceneError> {
    let mut scene = AnimScene::load(&args.scene)?;
    let report = blend_character(&mut scene, args.character.as_deref(), &BlendConfig::default());
    log_report(&report);
    if report.keys_written() == 0 {
        tracing::info!("Nothing blended, {:?} left unchanged", args.scene);
        return Ok(());
    }
    scene.save(&args.scene)
}

fn log_report(report: &CharacterReport) {
    for object in &report.objects {
        match object.outcome {
            BlendOutcome::Processed {
                intervals,
                keys_written,
            } => tracing::info!(
                "{}: {intervals} key pairs blended, {keys_written} keys written",
                object.object
            ),
            BlendOutcome::Skipped(reason) => {
                tracing::info!("{}: skipped ({})", object.object, reason.description());
            }
        }
    }
}
