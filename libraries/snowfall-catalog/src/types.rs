//! Configuration and wire types for the content API.

use serde::{Deserialize, Serialize};
use snowfall_core::{Track, TrackId};

/// Default CMS endpoint serving the track collection
pub const DEFAULT_ENDPOINT: &str = "https://cms.samespace.com/items/songs";

/// Default base URL for cover art assets
pub const DEFAULT_ASSET_BASE: &str = "https://cms.samespace.com/assets";

/// Catalog provider configuration
///
/// There is no environment configuration beyond these fixed URLs; the
/// endpoint takes no query parameters and no auth headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Endpoint returning the track collection
    pub endpoint: String,

    /// Base URL that cover asset ids resolve against
    pub asset_base: String,
}

impl CatalogConfig {
    /// Create a config pointing at a custom endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            asset_base: DEFAULT_ASSET_BASE.to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

/// Top-level catalog response body
///
/// The CMS wraps the track list in a `data` field.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogResponse {
    /// Track list in display order
    pub data: Vec<WireTrack>,
}

/// Track object as served by the content API
///
/// Unknown fields are ignored; the CMS sends more bookkeeping columns than
/// the player needs.
#[derive(Debug, Clone, Deserialize)]
pub struct WireTrack {
    /// Track display name
    pub name: String,

    /// Artist name
    pub artist: String,

    /// Audio resource URL
    pub url: String,

    /// Cover art asset id
    #[serde(default)]
    pub cover: String,

    /// Accent color (hex string)
    #[serde(default)]
    pub accent: String,

    /// Whether the track belongs to the "top tracks" subset
    #[serde(default)]
    pub top_track: bool,
}

impl WireTrack {
    /// Convert into a domain track, assigning a fresh stable id
    ///
    /// The API keys tracks by display name only, which is not guaranteed
    /// unique, so every load mints a synthetic id.
    pub fn into_track(self) -> Track {
        Track {
            id: TrackId::generate(),
            name: self.name,
            artist: self.artist,
            url: self.url,
            cover: self.cover,
            accent: self.accent,
            top_track: self.top_track,
        }
    }
}
