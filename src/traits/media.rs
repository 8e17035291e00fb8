use anyhow::Result;

/// Notification pushed by a media source as playback progresses.
///
/// The surrounding layer drains these each tick and forwards them to the
/// control that owns the source; the control itself never polls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Periodic position report, both values in seconds.
    TimeUpdate { position: f64, duration: f64 },
    /// The clip reached its natural end.
    Ended,
}

/// Abstraction over one audio clip's playback.
/// Implementations: ClockMedia (clock-driven simulator), MockMedia (testing).
///
/// The playback layer only consumes this contract; decoding and streaming
/// live behind it.
pub trait MediaSource {
    fn play(&mut self) -> Result<()>;
    fn pause(&mut self) -> Result<()>;

    /// Current playback position in seconds.
    fn position(&self) -> f64;

    /// Total clip duration in seconds. None until the source has loaded
    /// its metadata.
    fn duration(&self) -> Option<f64>;

    /// Jump to an absolute position in seconds.
    fn seek(&mut self, position: f64);

    /// Drain pending position/end notifications.
    fn poll_events(&mut self) -> Vec<MediaEvent>;
}

/// Scripted media source for deterministic testing.
///
/// Records every call and lets tests queue events to be drained.
pub struct MockMedia {
    pub playing: bool,
    pub position: f64,
    pub duration: Option<f64>,
    pub play_calls: u32,
    pub pause_calls: u32,
    pub seeks: Vec<f64>,
    queued: Vec<MediaEvent>,
}

impl MockMedia {
    pub fn new(duration: Option<f64>) -> Self {
        Self {
            playing: false,
            position: 0.0,
            duration,
            play_calls: 0,
            pause_calls: 0,
            seeks: Vec::new(),
            queued: Vec::new(),
        }
    }

    /// Queue an event for the next poll_events call.
    pub fn push_event(&mut self, event: MediaEvent) {
        self.queued.push(event);
    }
}

impl MediaSource for MockMedia {
    fn play(&mut self) -> Result<()> {
        self.play_calls += 1;
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.pause_calls += 1;
        self.playing = false;
        Ok(())
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn seek(&mut self, position: f64) {
        self.seeks.push(position);
        self.position = position;
    }

    fn poll_events(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.queued)
    }
}
