use anyhow::Result;
use tracing::debug;

use crate::traits::media::{MediaEvent, MediaSource};
use crate::traits::time::TimeProvider;

/// Clip simulator that derives its playback position from a clock.
///
/// Stands in for a real decoded audio clip: while playing, the position
/// runs forward with the time provider, and each poll reports it as a
/// position notification. Reaching the end emits a final notification
/// followed by an end-of-stream event and rewinds to the start, ready
/// for replay.
pub struct ClockMedia<T: TimeProvider> {
    clock: T,
    duration: f64,
    base_position: f64,
    /// Clock reading when playback started, None while paused.
    playing_since: Option<u64>,
    /// Notifications raised outside the regular poll, e.g. by a seek
    /// while paused.
    pending: Vec<MediaEvent>,
}

impl<T: TimeProvider> ClockMedia<T> {
    /// Create a stopped clip of `duration` seconds at position zero.
    pub fn new(clock: T, duration: f64) -> Self {
        Self {
            clock,
            duration: duration.max(0.0),
            base_position: 0.0,
            playing_since: None,
            pending: Vec::new(),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing_since.is_some()
    }

    /// The clock this clip runs on.
    pub fn clock(&self) -> &T {
        &self.clock
    }

    fn elapsed_secs(&self) -> f64 {
        match self.playing_since {
            Some(since) => self.clock.now_ms().saturating_sub(since) as f64 / 1_000.0,
            None => 0.0,
        }
    }
}

impl<T: TimeProvider> MediaSource for ClockMedia<T> {
    fn play(&mut self) -> Result<()> {
        if self.playing_since.is_none() {
            self.playing_since = Some(self.clock.now_ms());
            debug!(position = self.base_position, "clip play");
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        if self.playing_since.is_some() {
            self.base_position = self.position();
            self.playing_since = None;
            debug!(position = self.base_position, "clip pause");
        }
        Ok(())
    }

    fn position(&self) -> f64 {
        (self.base_position + self.elapsed_secs()).min(self.duration)
    }

    fn duration(&self) -> Option<f64> {
        Some(self.duration)
    }

    fn seek(&mut self, position: f64) {
        self.base_position = position.clamp(0.0, self.duration);
        if let Some(since) = self.playing_since.as_mut() {
            *since = self.clock.now_ms();
        } else {
            // A real element reports the new position even while paused.
            self.pending.push(MediaEvent::TimeUpdate {
                position: self.base_position,
                duration: self.duration,
            });
        }
        debug!(position = self.base_position, "clip seek");
    }

    fn poll_events(&mut self) -> Vec<MediaEvent> {
        let mut events = std::mem::take(&mut self.pending);

        let Some(since) = self.playing_since else {
            return events;
        };

        let elapsed = self.clock.now_ms().saturating_sub(since) as f64 / 1_000.0;
        let position = self.base_position + elapsed;

        if position >= self.duration {
            // Natural completion: final report, end event, rewind.
            self.playing_since = None;
            self.base_position = 0.0;
            debug!("clip ended");
            events.push(MediaEvent::TimeUpdate {
                position: self.duration,
                duration: self.duration,
            });
            events.push(MediaEvent::Ended);
        } else {
            events.push(MediaEvent::TimeUpdate {
                position,
                duration: self.duration,
            });
        }
        events
    }
}
