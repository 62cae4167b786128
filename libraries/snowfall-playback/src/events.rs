//! Player events
//!
//! Event-based communication for UI synchronization. Instead of the host
//! observing state implicitly, every externally visible change is pushed
//! onto a queue the host drains with [`crate::Player::take_events`].

use serde::{Deserialize, Serialize};
use snowfall_core::{PlaybackState, TrackId};

/// Events emitted by the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Playback state changed (playing, paused, loading, idle)
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// Selection moved to a different (or the same, restarted) track
    TrackChanged {
        /// Id of the newly selected track
        track_id: TrackId,
        /// Id of the previously selected track (if any)
        previous_track_id: Option<TrackId>,
    },

    /// Progress through the current track changed
    ProgressChanged {
        /// Progress in percent, 0.0..=100.0
        percent: f32,
    },

    /// The visible-list filter changed
    FilterChanged {
        /// Whether the list is restricted to top tracks
        top_tracks_only: bool,
    },
}
