//! Player - selection, filtering, and transport control
//!
//! Owns the catalog (single writer for its selection), the view filters,
//! and the playback state machine, and drives the host's [`AudioOutput`].
//!
//! State machine per selection:
//! `Idle -> Loading -> Playing <-> Paused -> (ended) -> Loading(next)`.
//! Every selection - including re-selecting the current track - is "start
//! this track from zero": progress resets and the output is reloaded.

use crate::{
    error::{PlayerError, Result},
    events::PlayerEvent,
    filter::ViewFilter,
    output::AudioOutput,
};
use snowfall_core::{Catalog, DurationCache, PlaybackState, Track, TrackId};
use std::time::Duration;
use tracing::{debug, warn};

/// Player controller
pub struct Player {
    catalog: Catalog,
    output: Box<dyn AudioOutput>,
    durations: DurationCache,

    state: PlaybackState,
    progress_percent: f32,
    filter: ViewFilter,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl Player {
    /// Create a player over a loaded catalog
    ///
    /// The catalog arrives with its selection already defaulted to the first
    /// track; nothing plays until the host selects a track or toggles
    /// play/pause.
    pub fn new(catalog: Catalog, durations: DurationCache, output: Box<dyn AudioOutput>) -> Self {
        Self {
            catalog,
            output,
            durations,
            state: PlaybackState::Idle,
            progress_percent: 0.0,
            filter: ViewFilter::default(),
            pending_events: Vec::new(),
        }
    }

    // ===== State Queries =====

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Currently selected track
    pub fn selected_track(&self) -> Option<&Track> {
        self.catalog.selected()
    }

    /// Progress through the current track, 0.0..=100.0
    pub fn progress_percent(&self) -> f32 {
        self.progress_percent
    }

    /// The full catalog (read-only)
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Active view filter
    pub fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    /// Display label for a track's duration ("00:00" until its probe lands)
    pub fn duration_label(&self, id: &TrackId) -> String {
        self.durations.label(id)
    }

    /// Drain pending events for the host
    pub fn take_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ===== Selection & Filtering =====

    /// Tracks visible under the active filters, in catalog order
    pub fn visible_tracks(&self) -> Vec<&Track> {
        self.filter.visible(&self.catalog)
    }

    /// Update the search term
    pub fn search(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    /// Toggle the top-tracks view
    ///
    /// Switching the list pauses playback but does NOT change the selection,
    /// which may therefore point at a track outside the visible list.
    pub fn set_top_tracks(&mut self, top_tracks_only: bool) -> Result<()> {
        if self.filter.top_tracks_only == top_tracks_only {
            return Ok(());
        }
        self.filter.top_tracks_only = top_tracks_only;

        if self.state == PlaybackState::Playing {
            self.output.pause()?;
            self.set_state(PlaybackState::Paused);
        }

        self.pending_events
            .push(PlayerEvent::FilterChanged { top_tracks_only });
        Ok(())
    }

    /// Select a track and start it from zero
    ///
    /// Not idempotent: re-selecting the current track also resets progress
    /// and reloads the output. An id that is no longer in the catalog falls
    /// back to the first track.
    pub fn select_track(&mut self, id: &TrackId) -> Result<()> {
        if self.catalog.is_empty() {
            return Err(PlayerError::CatalogEmpty);
        }

        let previous = self.catalog.selected_id().cloned();
        if self.catalog.select(id).is_err() {
            warn!(track_id = %id, "Selected track no longer in catalog, falling back to first");
            self.catalog.select_first();
        }

        self.restart_selected(previous)
    }

    // ===== Transport Control =====

    /// Toggle between playing and paused
    ///
    /// No-op when nothing is selected. From `Idle` with a selection this
    /// starts the selected track from zero.
    pub fn play_pause(&mut self) -> Result<()> {
        match self.state {
            PlaybackState::Playing => {
                self.output.pause()?;
                self.set_state(PlaybackState::Paused);
                Ok(())
            }
            PlaybackState::Paused => {
                self.output.play()?;
                self.set_state(PlaybackState::Playing);
                Ok(())
            }
            PlaybackState::Idle => {
                if self.catalog.selected_id().is_none() {
                    return Ok(());
                }
                let previous = self.catalog.selected_id().cloned();
                self.restart_selected(previous)
            }
            // Load is synchronous from the player's point of view; a tick in
            // Loading would already have moved us to Playing
            PlaybackState::Loading => Ok(()),
        }
    }

    /// Advance to the next track in full catalog order, wrapping at the end
    ///
    /// Navigation always walks the FULL catalog, not the filtered view.
    pub fn forward(&mut self) -> Result<()> {
        let Some(current) = self.catalog.selected_id().cloned() else {
            return Ok(());
        };
        let next_id = self.catalog.next_after(&current).map(|t| t.id.clone());
        match next_id {
            Some(id) => self.select_track(&id),
            None => Ok(()),
        }
    }

    /// Go back to the previous track, wrapping at the start
    pub fn backward(&mut self) -> Result<()> {
        let Some(current) = self.catalog.selected_id().cloned() else {
            return Ok(());
        };
        let prev_id = self.catalog.previous_before(&current).map(|t| t.id.clone());
        match prev_id {
            Some(id) => self.select_track(&id),
            None => Ok(()),
        }
    }

    /// Host callback: the output reached the natural end of the resource
    ///
    /// Auto-advances exactly like [`Player::forward`], wrapping from the last
    /// catalog track back to the first.
    pub fn on_track_ended(&mut self) -> Result<()> {
        debug!("Track ended, auto-advancing");
        self.forward()
    }

    /// Host callback: periodic position update from the output
    ///
    /// Unknown or zero duration clamps progress to 0 rather than letting a
    /// division by zero poison the value.
    pub fn on_progress_tick(&mut self, position: Duration, total: Option<Duration>) {
        let percent = match total {
            Some(total) if !total.is_zero() => {
                ((position.as_secs_f32() / total.as_secs_f32()) * 100.0).clamp(0.0, 100.0)
            }
            _ => 0.0,
        };

        self.progress_percent = percent;
        self.pending_events
            .push(PlayerEvent::ProgressChanged { percent });
    }

    // ===== Internal =====

    /// Reset-and-restart for the currently selected track
    fn restart_selected(&mut self, previous: Option<TrackId>) -> Result<()> {
        let track = self
            .catalog
            .selected()
            .cloned()
            .ok_or(PlayerError::NoTrackSelected)?;

        self.progress_percent = 0.0;
        self.set_state(PlaybackState::Loading);

        self.output.load(&track.url)?;
        self.output.play()?;

        self.set_state(PlaybackState::Playing);
        self.pending_events.push(PlayerEvent::TrackChanged {
            track_id: track.id,
            previous_track_id: previous,
        });
        self.pending_events
            .push(PlayerEvent::ProgressChanged { percent: 0.0 });
        Ok(())
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state == state {
            return;
        }
        debug!(from = ?self.state, to = ?state, "Playback state changed");
        self.state = state;
        self.pending_events.push(PlayerEvent::StateChanged { state });
    }
}
