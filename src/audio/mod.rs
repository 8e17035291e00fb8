//! Audio playback control for lesson clips.
//!
//! This module provides:
//! - [`PlaybackControl`]: Play/pause state and progress mirror for one clip
//! - [`ClockMedia`]: Clock-driven clip simulator implementing the media
//!   contract, used by the binary and integration tests

mod clock_media;
mod playback;

pub use clock_media::ClockMedia;
pub use playback::PlaybackControl;
