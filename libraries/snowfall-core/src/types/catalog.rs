//! Track catalog with a single optional selection
//!
//! The catalog is fetched once and never mutated after load; insertion order
//! is the API response order and stays the display order. Selection is the
//! one piece of mutable state, owned by whoever holds the catalog (single
//! writer, no ambient globals).

use crate::error::{CoreError, Result};
use crate::types::{Track, TrackId};
use serde::{Deserialize, Serialize};

/// Ordered track collection plus the currently selected track
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    tracks: Vec<Track>,
    selected: Option<TrackId>,
}

impl Catalog {
    /// Build a catalog from fetched tracks
    ///
    /// Selection defaults to the first track when the list is non-empty.
    pub fn new(tracks: Vec<Track>) -> Self {
        let selected = tracks.first().map(|t| t.id.clone());
        Self { tracks, selected }
    }

    /// All tracks in catalog order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the catalog holds no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Look up a track by id
    pub fn get(&self, id: &TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| &t.id == id)
    }

    /// Position of a track in catalog order
    pub fn index_of(&self, id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| &t.id == id)
    }

    /// Currently selected track, if any
    pub fn selected(&self) -> Option<&Track> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    /// Id of the currently selected track, if any
    pub fn selected_id(&self) -> Option<&TrackId> {
        self.selected.as_ref()
    }

    /// Select a track by id
    ///
    /// Errors if the id is not in the catalog; selection is left unchanged.
    pub fn select(&mut self, id: &TrackId) -> Result<()> {
        if self.get(id).is_none() {
            return Err(CoreError::TrackNotFound(id.clone()));
        }
        self.selected = Some(id.clone());
        Ok(())
    }

    /// Reset selection to the first track (no-op on an empty catalog)
    pub fn select_first(&mut self) {
        self.selected = self.tracks.first().map(|t| t.id.clone());
    }

    /// Next track after `id` in full catalog order, wrapping at the end
    ///
    /// A stale id that is no longer in the catalog falls back to the first
    /// track rather than wrapping from a -1 index.
    pub fn next_after(&self, id: &TrackId) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }
        match self.index_of(id) {
            Some(index) => self.tracks.get((index + 1) % self.tracks.len()),
            None => self.tracks.first(),
        }
    }

    /// Previous track before `id` in full catalog order, wrapping at the start
    ///
    /// Same stale-id fallback as [`Catalog::next_after`].
    pub fn previous_before(&self, id: &TrackId) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }
        match self.index_of(id) {
            Some(index) => self
                .tracks
                .get((index + self.tracks.len() - 1) % self.tracks.len()),
            None => self.tracks.first(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_of(names: &[&str]) -> Catalog {
        Catalog::new(
            names
                .iter()
                .map(|n| Track::new(*n, "Artist", format!("https://cdn.example.com/{n}.mp3")))
                .collect(),
        )
    }

    #[test]
    fn new_catalog_selects_first_track() {
        let catalog = catalog_of(&["A", "B", "C"]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.selected().map(|t| t.name.as_str()), Some("A"));
    }

    #[test]
    fn empty_catalog_has_no_selection() {
        let catalog = Catalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.selected().is_none());
    }

    #[test]
    fn select_unknown_id_is_an_error_and_keeps_selection() {
        let mut catalog = catalog_of(&["A", "B"]);
        let stale = TrackId::generate();

        let result = catalog.select(&stale);
        assert!(matches!(result, Err(CoreError::TrackNotFound(_))));
        assert_eq!(catalog.selected().map(|t| t.name.as_str()), Some("A"));
    }

    #[test]
    fn next_wraps_at_the_end() {
        let catalog = catalog_of(&["A", "B", "C"]);
        let last = catalog.tracks()[2].id.clone();

        let next = catalog.next_after(&last).expect("non-empty catalog");
        assert_eq!(next.name, "A");
    }

    #[test]
    fn previous_wraps_at_the_start() {
        let catalog = catalog_of(&["A", "B", "C"]);
        let first = catalog.tracks()[0].id.clone();

        let prev = catalog.previous_before(&first).expect("non-empty catalog");
        assert_eq!(prev.name, "C");
    }

    #[test]
    fn stale_id_falls_back_to_first_track() {
        let catalog = catalog_of(&["A", "B", "C"]);
        let stale = TrackId::generate();

        assert_eq!(catalog.next_after(&stale).map(|t| t.name.as_str()), Some("A"));
        assert_eq!(
            catalog.previous_before(&stale).map(|t| t.name.as_str()),
            Some("A")
        );
    }

    #[test]
    fn navigation_on_empty_catalog_yields_none() {
        let catalog = Catalog::new(Vec::new());
        let id = TrackId::generate();
        assert!(catalog.next_after(&id).is_none());
        assert!(catalog.previous_before(&id).is_none());
    }

    #[test]
    fn duplicate_names_stay_distinguishable_by_id() {
        let catalog = catalog_of(&["Same", "Same"]);
        let second = catalog.tracks()[1].id.clone();

        let next = catalog.next_after(&second).expect("non-empty catalog");
        assert_eq!(next.id, catalog.tracks()[0].id);
    }
}
