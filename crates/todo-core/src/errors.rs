//! Cross-cutting error types for the todo tracker.
//!
//! Storage errors (`DatabaseError`) and configuration errors (`ConfigError`)
//! live in their own crates. The binary converges everything into `anyhow`.

use thiserror::Error;

/// Errors raised while building or checking core values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),
}
