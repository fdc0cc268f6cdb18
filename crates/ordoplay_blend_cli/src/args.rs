// SPDX-License-Identifier: MIT OR Apache-2.0
//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Adjustment-blend a character in a scene file
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "ordoplay_blend", version, about = "OrdoPlay adjustment blend")]
pub struct BlendArgs {
    /// Scene file to blend in place (`.ron` or `.json`)
    pub scene: PathBuf,
    /// Character to blend, first in the scene when absent
    pub character: Option<String>,
}
