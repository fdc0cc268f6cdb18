// SPDX-License-Identifier: MIT OR Apache-2.0
//! Errors raised while configuring a blend.

/// Blend configuration errors
#[derive(Debug, thiserror::Error)]
pub enum BlendError {
    /// Sampling step is zero, negative or not finite
    #[error("Invalid sampling step: {0}")]
    InvalidStep(f64),
}

/// Result type for blend configuration
pub type Result<T> = std::result::Result<T, BlendError>;
