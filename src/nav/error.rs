//! Error types for the navigation core.

use thiserror::Error;

/// Failure of an outbound request made on behalf of the navigation bar.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(String),

    /// No browser to issue the request from (server-side render)
    #[error("HTTP client is only available in the browser")]
    Unavailable,
}

/// Rejected navigation configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
