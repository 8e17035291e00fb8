use tracing::{debug, warn};

use crate::traits::media::MediaSource;

/// Drives play/pause and scrub position for one audio clip, independent of
/// any other instance.
///
/// The control mirrors the media source rather than owning its state: the
/// flag and progress value are re-derived from the source's notifications,
/// and the source stays authoritative. One instance is created each time
/// its slide becomes visible and dropped when the slide is left.
pub struct PlaybackControl {
    is_playing: bool,
    progress_percent: f64,
}

impl PlaybackControl {
    /// Create a control at rest: not playing, zero progress.
    pub fn new() -> Self {
        Self {
            is_playing: false,
            progress_percent: 0.0,
        }
    }

    /// Flip between playing and paused.
    ///
    /// Silent no-op while the media source is not mounted. A play/pause
    /// fault from the source is logged and leaves the flag unchanged.
    pub fn toggle<M: MediaSource>(&mut self, media: Option<&mut M>) {
        let Some(media) = media else {
            debug!("toggle ignored, media not mounted");
            return;
        };

        if self.is_playing {
            match media.pause() {
                Ok(()) => self.is_playing = false,
                Err(err) => warn!("pause failed: {err:#}"),
            }
        } else {
            match media.play() {
                Ok(()) => self.is_playing = true,
                Err(err) => warn!("play failed: {err:#}"),
            }
        }
    }

    /// Recompute progress from a position notification.
    ///
    /// Progress is left unchanged while the duration is unknown or zero.
    pub fn on_time_update(&mut self, position: f64, duration: f64) {
        if duration > 0.0 {
            self.progress_percent = (position / duration * 100.0).clamp(0.0, 100.0);
        }
    }

    /// The clip finished on its own: back to rest.
    pub fn on_ended(&mut self) {
        self.is_playing = false;
        self.progress_percent = 0.0;
    }

    /// Scrub to a fraction of the clip, clamped to `[0, 1]`.
    ///
    /// No-op while the media source is not mounted or its duration is
    /// unknown or zero. Progress updates on the next position notification
    /// rather than here; the source stays the authority.
    pub fn seek_fraction<M: MediaSource>(&mut self, media: Option<&mut M>, fraction: f64) {
        let Some(media) = media else {
            debug!("seek ignored, media not mounted");
            return;
        };
        let Some(duration) = media.duration() else {
            debug!("seek ignored, duration unknown");
            return;
        };
        if duration <= 0.0 {
            return;
        }

        let fraction = fraction.clamp(0.0, 1.0);
        media.seek(fraction * duration);
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Playback position as a percentage of total duration, 0-100.
    pub fn progress_percent(&self) -> f64 {
        self.progress_percent
    }

    /// Whether the progress indicator should be shown: hidden at rest
    /// before first play, shown during playback and after pause or seek
    /// until completion resets it.
    pub fn indicator_visible(&self) -> bool {
        self.is_playing || self.progress_percent > 0.0
    }
}

impl Default for PlaybackControl {
    fn default() -> Self {
        Self::new()
    }
}
