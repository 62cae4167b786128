//! Snowfall Player Core
//!
//! Platform-agnostic core types and error handling for Snowfall Player.
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Catalog`, `PlaybackState`
//! - **Duration Cache**: shared, lazily populated track duration map
//! - **Error Handling**: unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use snowfall_core::types::{Catalog, Track};
//!
//! let tracks = vec![
//!     Track::new("Starlight", "Nova", "https://cdn.example.com/starlight.mp3"),
//!     Track::new("Viscous", "Nova", "https://cdn.example.com/viscous.mp3"),
//! ];
//!
//! // A freshly built catalog selects its first track
//! let catalog = Catalog::new(tracks);
//! assert_eq!(catalog.selected().map(|t| t.name.as_str()), Some("Starlight"));
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use types::{
    format_duration, Catalog, DurationCache, PlaybackState, Track, TrackId,
};
