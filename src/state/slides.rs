use tracing::debug;

/// Tracks which slide of a fixed-length sequence is shown and enforces
/// valid transitions.
///
/// States are the integers `0..=last_index`; advance and retreat clamp at
/// the boundaries instead of erroring, and reset always returns to the
/// first slide. Every operation is a total function over the valid range.
pub struct SlideController {
    position: usize,
    last_index: usize,
}

impl SlideController {
    /// Create a controller over `slide_count` slides, starting at slide 0.
    ///
    /// A zero count collapses to a single-slide sequence; callers validate
    /// their deck before building a controller.
    pub fn new(slide_count: usize) -> Self {
        Self {
            position: 0,
            last_index: slide_count.saturating_sub(1),
        }
    }

    /// Step forward one slide. No-op at the last slide.
    pub fn advance(&mut self) {
        if self.position < self.last_index {
            self.position += 1;
            debug!(position = self.position, "slide advance");
        } else {
            debug!(position = self.position, "slide advance clamped at end");
        }
    }

    /// Step back one slide. No-op at the first slide.
    pub fn retreat(&mut self) {
        if self.position > 0 {
            self.position -= 1;
            debug!(position = self.position, "slide retreat");
        } else {
            debug!("slide retreat clamped at start");
        }
    }

    /// Return to the first slide unconditionally.
    pub fn reset(&mut self) {
        self.position = 0;
        debug!("slide reset");
    }

    /// The current slide index.
    pub fn current(&self) -> usize {
        self.position
    }

    pub fn last_index(&self) -> usize {
        self.last_index
    }

    pub fn is_first(&self) -> bool {
        self.position == 0
    }

    pub fn is_last(&self) -> bool {
        self.position == self.last_index
    }
}
