//! Error types for the Netlify API client
//!
//! This module defines all error types used throughout the crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error body returned by the API alongside a non-success status
///
/// The documented shape is `{"code": <number>, "message": <string>}`. Some
/// upstream proxies answer with plain text or HTML instead; those bodies are
/// carried verbatim in `message` so the caller never loses the response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Numeric error code reported by the API (usually mirrors the status)
    #[serde(default)]
    pub code: Option<i64>,

    /// Human-readable error message
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorPayload {
    /// Parse an error body, falling back to the raw text when it is not the
    /// JSON shape the API documents.
    pub fn from_raw(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|_| Self {
            code: None,
            message: if body.is_empty() {
                None
            } else {
                Some(body.to_string())
            },
        })
    }
}

impl std::fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.message, self.code) {
            (Some(message), Some(code)) => write!(f, "{} (code {})", message, code),
            (Some(message), None) => write!(f, "{}", message),
            (None, Some(code)) => write!(f, "code {}", code),
            (None, None) => write!(f, "no error body"),
        }
    }
}

/// Core error type for the Netlify API client
#[derive(Error, Debug)]
pub enum Error {
    /// The API answered with a non-success status
    #[error("API error ({status}): {payload}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Parsed error body
        payload: ErrorPayload,
    },

    /// Transport-level failures (connection, TLS, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an API error from a status code and parsed body
    pub fn api(status: u16, payload: ErrorPayload) -> Self {
        Self::Api { status, payload }
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// HTTP status of the failed exchange, for `Api` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
