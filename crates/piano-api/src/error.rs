//! API client error types.

use piano_core::errors::CoreError;
use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connection refused, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// Backend rejected the session's credentials.
    #[error("unauthorized: {endpoint} returned 401")]
    Unauthorized {
        /// Endpoint, relative to the API base, that was refused.
        endpoint: String,
    },

    /// Response body was not the JSON we expected.
    #[error("parse error: {0}")]
    Parse(String),

    /// Record failed local validation; nothing was sent.
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// No record with the given id.
    #[error("{resource} {id} not found")]
    NotFound {
        resource: &'static str,
        id: String,
    },

    /// Configured base URL is not an absolute http(s) URL.
    #[error("invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ApiError {
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}
