//! Per-track duration cache and display formatting
//!
//! Durations are learned lazily by probing each track's audio resource in the
//! background. The cache is shared between the probe tasks and the player and
//! is safe to read at any point; absent entries simply format as "00:00".

use crate::types::TrackId;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

/// Shared map from track id to measured duration
///
/// Cloning the cache clones the handle, not the contents. Inserts are
/// idempotent, so a stale probe completing after a newer one is harmless.
#[derive(Debug, Clone, Default)]
pub struct DurationCache {
    inner: Arc<RwLock<HashMap<TrackId, Duration>>>,
}

impl DurationCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a measured duration for a track
    pub fn insert(&self, id: TrackId, duration: Duration) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, duration);
    }

    /// Measured duration for a track, if a probe has completed
    pub fn get(&self, id: &TrackId) -> Option<Duration> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .copied()
    }

    /// Number of measured tracks
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no probe has completed yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Display label for a track's duration ("00:00" while unknown)
    pub fn label(&self, id: &TrackId) -> String {
        format_duration(self.get(id))
    }
}

/// Format a duration as "MM:SS"
///
/// Unknown durations render as "00:00". Minutes are not capped at 59, so
/// 3661 seconds formats as "61:01".
pub fn format_duration(duration: Option<Duration>) -> String {
    let total_secs = duration.map_or(0, |d| d.as_secs());
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_unknown_as_zero() {
        assert_eq!(format_duration(None), "00:00");
        assert_eq!(format_duration(Some(Duration::ZERO)), "00:00");
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_duration(Some(Duration::from_secs(65))), "01:05");
    }

    #[test]
    fn minutes_are_not_capped() {
        assert_eq!(format_duration(Some(Duration::from_secs(3661))), "61:01");
    }

    #[test]
    fn cache_label_falls_back_to_placeholder() {
        let cache = DurationCache::new();
        let id = TrackId::generate();
        assert_eq!(cache.label(&id), "00:00");

        cache.insert(id.clone(), Duration::from_secs(125));
        assert_eq!(cache.label(&id), "02:05");
    }

    #[test]
    fn cloned_handles_share_contents() {
        let cache = DurationCache::new();
        let handle = cache.clone();
        let id = TrackId::generate();

        handle.insert(id.clone(), Duration::from_secs(10));
        assert_eq!(cache.get(&id), Some(Duration::from_secs(10)));
    }

    #[test]
    fn insert_is_idempotent() {
        let cache = DurationCache::new();
        let id = TrackId::generate();

        cache.insert(id.clone(), Duration::from_secs(10));
        cache.insert(id.clone(), Duration::from_secs(10));
        assert_eq!(cache.len(), 1);
    }
}
