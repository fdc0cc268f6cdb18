// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scene errors.

use std::path::PathBuf;

/// Errors raised while building, loading or saving a scene
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// File could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// RON text could not be parsed
    #[error("RON parse error: {0}")]
    RonParse(#[from] ron::error::SpannedError),

    /// Scene could not be written as RON
    #[error("RON serialization error: {0}")]
    RonWrite(#[from] ron::Error),

    /// JSON could not be read or written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is neither `.ron` nor `.json`
    #[error("Unsupported scene file: {0:?}")]
    UnsupportedFormat(PathBuf),

    /// Scene was written by a newer format version
    #[error("Scene version {found} is newer than supported version {supported}")]
    UnsupportedVersion {
        /// Version in the file
        found: u32,
        /// Newest version this build reads
        supported: u32,
    },

    /// A layer with this name already exists
    #[error("Duplicate layer: {0}")]
    DuplicateLayer(String),

    /// No layer with this name
    #[error("Layer not found: {0}")]
    LayerNotFound(String),
}

/// Result type for scene operations
pub type Result<T> = std::result::Result<T, SceneError>;
