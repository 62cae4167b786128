/// Playback state machine
use serde::{Deserialize, Serialize};

/// Playback state
///
/// `Idle -> Loading -> Playing <-> Paused`. A natural end of track goes back
/// through `Loading` for the next selection; there is no terminal stop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No track loaded into the output yet
    Idle,

    /// Selected track is being loaded into the output
    Loading,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,
}

impl PlaybackState {
    /// Whether audio is actively playing
    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }
}
