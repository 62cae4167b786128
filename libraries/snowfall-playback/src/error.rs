//! Error types for player control

use thiserror::Error;

/// Player errors
#[derive(Debug, Error)]
pub enum PlayerError {
    /// No track is currently selected
    #[error("No track selected")]
    NoTrackSelected,

    /// Catalog holds no tracks
    #[error("Catalog is empty")]
    CatalogEmpty,

    /// Audio output error
    #[error("Audio output error: {0}")]
    Output(String),
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;
