//! Cross-cutting error types.
//!
//! Crate-specific errors (`ApiError`, `ConfigError`, ...) live in their own
//! crates. The binary converges them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any piano teacher crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A record is missing fields required before it can be saved.
    #[error("Validation error: {entity_type} is missing required field(s): {}", fields.join(", "))]
    MissingFields {
        entity_type: &'static str,
        fields: Vec<&'static str>,
    },

    /// Data failed validation (format, range).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
