//! Audio output boundary
//!
//! The player treats playback as an opaque native capability. Hosts
//! implement this trait over whatever primitive they have (HTML5 audio,
//! rodio sink, mpv) and feed position updates and end-of-track events back
//! through [`crate::Player::on_progress_tick`] and
//! [`crate::Player::on_track_ended`]. The core never decodes, buffers, or
//! streams audio itself.

use crate::error::Result;

/// Opaque audio playback primitive
pub trait AudioOutput: Send {
    /// Load a new audio resource, replacing whatever was loaded before.
    ///
    /// Implementations must stop the previous resource synchronously so a
    /// selection change never races the old track's playback.
    fn load(&mut self, url: &str) -> Result<()>;

    /// Start or resume playback of the loaded resource
    fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the current position
    fn pause(&mut self) -> Result<()>;
}
