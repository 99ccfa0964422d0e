//! Error types for square_wine_feed

use thiserror::Error;

/// Unified error type for feed export operations
#[derive(Error, Debug)]
pub enum FeedError {
    /// Required environment value is missing or blank
    #[error("Missing required configuration: {0} is not set")]
    MissingConfig(&'static str),

    /// HTTP request failed (connection refused, TLS, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Square answered with a non-success status
    #[error("Square API error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Writing the feed file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for feed export operations
pub type Result<T> = std::result::Result<T, FeedError>;
