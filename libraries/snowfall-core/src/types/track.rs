/// Track domain type
use crate::types::TrackId;
use serde::{Deserialize, Serialize};

/// Audio track from the remote catalog
///
/// Immutable once fetched. The audio resource and cover art are referenced by
/// URL/asset id; the core never fetches either itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier (assigned at load time)
    pub id: TrackId,

    /// Track display name
    pub name: String,

    /// Artist name
    pub artist: String,

    /// Audio resource URL
    pub url: String,

    /// Cover art asset id (resolved against the CMS asset base)
    pub cover: String,

    /// Accent color for display (hex string)
    pub accent: String,

    /// Whether the track belongs to the "top tracks" subset
    pub top_track: bool,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(
        name: impl Into<String>,
        artist: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: TrackId::generate(),
            name: name.into(),
            artist: artist.into(),
            url: url.into(),
            cover: String::new(),
            accent: String::new(),
            top_track: false,
        }
    }

    /// Resolve the cover asset id against an asset base URL
    pub fn cover_url(&self, asset_base: &str) -> String {
        format!("{}/{}", asset_base.trim_end_matches('/'), self.cover)
    }
}
