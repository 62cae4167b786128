//! View filters for the track list
//!
//! Pure presentation state: a search term and a top-tracks toggle. Filtering
//! never re-sorts - the visible list keeps catalog order - and never touches
//! selection or transport state (the pause-on-toggle side effect lives in
//! the player, not here).

use serde::{Deserialize, Serialize};
use snowfall_core::{Catalog, Track};

/// Active list filters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewFilter {
    /// Case-insensitive substring matched against name OR artist
    pub search_term: String,

    /// Restrict the list to tracks with `top_track == true`
    pub top_tracks_only: bool,
}

impl ViewFilter {
    /// Whether a single track passes the filter
    pub fn matches(&self, track: &Track) -> bool {
        if self.top_tracks_only && !track.top_track {
            return false;
        }
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        track.name.to_lowercase().contains(&needle)
            || track.artist.to_lowercase().contains(&needle)
    }

    /// The visible list: top-tracks subset (if toggled) then search predicate,
    /// in stable catalog order
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Track> {
        catalog.tracks().iter().filter(|t| self.matches(t)).collect()
    }
}
