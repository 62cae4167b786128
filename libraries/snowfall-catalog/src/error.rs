//! Error types for the catalog provider.

use thiserror::Error;

/// Errors that can occur when fetching the catalog or probing durations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Invalid endpoint URL
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse the catalog response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Audio metadata could not be read from probed bytes
    #[error("Metadata error: {0}")]
    Metadata(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),

    /// IO error while reading probed bytes
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
