//! Domain types for Snowfall Player

mod catalog;
mod duration;
mod ids;
mod playback_state;
mod track;

pub use catalog::Catalog;
pub use duration::{format_duration, DurationCache};
pub use ids::TrackId;
pub use playback_state::PlaybackState;
pub use track::Track;
