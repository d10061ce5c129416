//! Error types for FinAdvisor
//!
//! One enum covers the three failure domains (identity exchange, local
//! retrieval, generation) plus the usual transport conversions.

use thiserror::Error;

/// Main error type for the advisor
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Identity endpoint returned a bad status or an unusable body
    #[error("IAM token exchange failed (HTTP {status}): {body}")]
    Auth { status: u16, body: String },

    /// A keyword matched but the mapped knowledge-base file was unreadable
    #[error("Failed to read knowledge-base file {file}: {source}")]
    Retrieval {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// Completion endpoint returned a non-200 status
    #[error("Completion request failed (HTTP {status}): {body}")]
    Generation { status: u16, body: String },

    /// Transport or decode fault while consuming the response stream
    #[error("Streaming error: {0}")]
    Streaming(String),

    /// Missing or invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;
