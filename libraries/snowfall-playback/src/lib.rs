//! Snowfall Player - Player Control
//!
//! Platform-agnostic selection, filtering, and transport control.
//!
//! This crate provides:
//! - Selection over a loaded catalog (stable synthetic ids, fail-safe
//!   fallback for stale references)
//! - Transport control (play/pause toggle, cyclic forward/backward over the
//!   full catalog, auto-advance on natural track end)
//! - Progress tracking with an explicit divide-by-zero guard
//! - View filters (case-insensitive search over name/artist, top-tracks
//!   toggle that pauses playback without moving the selection)
//! - An event queue for UI synchronization
//!
//! # Architecture
//!
//! `snowfall-playback` is completely platform-agnostic: audio playback is an
//! opaque [`AudioOutput`] the host implements, and the host feeds position
//! updates and end-of-track notifications back into the player. No decoding,
//! buffering, or streaming happens here.
//!
//! # Example
//!
//! ```rust
//! use snowfall_core::{Catalog, DurationCache, Track};
//! use snowfall_playback::{AudioOutput, Player, Result};
//!
//! struct NullOutput;
//!
//! impl AudioOutput for NullOutput {
//!     fn load(&mut self, _url: &str) -> Result<()> { Ok(()) }
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) -> Result<()> { Ok(()) }
//! }
//!
//! let catalog = Catalog::new(vec![
//!     Track::new("Starlight", "Nova", "https://cdn.example.com/starlight.mp3"),
//!     Track::new("Viscous", "Nova", "https://cdn.example.com/viscous.mp3"),
//! ]);
//!
//! let mut player = Player::new(catalog, DurationCache::new(), Box::new(NullOutput));
//!
//! // Selection defaults to the first track; nothing plays until asked
//! player.play_pause().unwrap();
//! assert!(player.state().is_playing());
//!
//! player.forward().unwrap();
//! assert_eq!(player.selected_track().map(|t| t.name.as_str()), Some("Viscous"));
//! ```

#![forbid(unsafe_code)]

mod error;
mod events;
mod filter;
mod output;
mod player;

// Public exports
pub use error::{PlayerError, Result};
pub use events::PlayerEvent;
pub use filter::ViewFilter;
pub use output::AudioOutput;
pub use player::Player;
