//! Error types for the syllabus MCP server
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Query logic produces two kinds of failures: HTTP status errors (non-2xx
//! responses) and unexpected errors (network faults, malformed JSON). The
//! tool surface folds both into text responses at the handler boundary.

use thiserror::Error;

/// The main error type for the syllabus MCP server
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid or missing configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong
        message: String,
    },

    /// Transport-level HTTP failure (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the syllabus API
    #[error("API request failed: {status} {status_text}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status
        status_text: String,
    },

    /// Response body was not the expected JSON shape
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Malformed base or request URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for errors without a dedicated variant
    #[error("{0}")]
    Other(String),

    /// Interop with anyhow-returning callees
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a status error from a code and reason phrase
    pub fn status(status: u16, status_text: impl Into<String>) -> Self {
        Self::Status {
            status,
            status_text: status_text.into(),
        }
    }

    /// Create a catch-all error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

/// Result type alias for the syllabus MCP server
pub type Result<T> = std::result::Result<T, Error>;
