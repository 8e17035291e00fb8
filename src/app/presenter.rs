use anyhow::Result;
use tracing::debug;

use crate::audio::PlaybackControl;
use crate::content::{AudioBinding, Deck, Nav, Slide};
use crate::state::SlideController;
use crate::traits::media::{MediaEvent, MediaSource};

/// One audio clip of the visible slide: its binding, the control mirroring
/// it, and the media slot the surrounding layer mounts a source into.
///
/// A slot starts unmounted; playback commands against an unmounted slot
/// are silent no-ops until the source arrives.
pub struct AudioSlot<M: MediaSource> {
    binding: AudioBinding,
    control: PlaybackControl,
    media: Option<M>,
}

impl<M: MediaSource> AudioSlot<M> {
    pub fn binding(&self) -> &AudioBinding {
        &self.binding
    }

    pub fn control(&self) -> &PlaybackControl {
        &self.control
    }

    pub fn is_mounted(&self) -> bool {
        self.media.is_some()
    }

    pub fn media(&self) -> Option<&M> {
        self.media.as_ref()
    }
}

/// Maps the slide controller's position to a slide record and owns the
/// playback controls for the visible slide.
///
/// Controls and media slots are rebuilt fresh on every slide entry, so a
/// revisited slide starts unplayed; dropping the old slots releases their
/// sources, which stops any running clip.
pub struct Presenter<M: MediaSource> {
    deck: Deck,
    controller: SlideController,
    slots: Vec<AudioSlot<M>>,
}

impl<M: MediaSource> Presenter<M> {
    /// Validate the deck and open the session on its first slide.
    pub fn new(deck: Deck) -> Result<Self> {
        deck.validate()?;
        let controller = SlideController::new(deck.len());
        let mut presenter = Self {
            deck,
            controller,
            slots: Vec::new(),
        };
        presenter.enter_slide();
        Ok(presenter)
    }

    /// Open the session further in, as if advanced there slide by slide.
    pub fn jump_to(&mut self, index: usize) {
        while self.controller.current() < index && !self.controller.is_last() {
            self.advance();
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn position(&self) -> usize {
        self.controller.current()
    }

    pub fn slide_count(&self) -> usize {
        self.deck.len()
    }

    pub fn current_slide(&self) -> &Slide {
        &self.deck.slides[self.controller.current()]
    }

    /// Navigation affordances of the visible slide.
    pub fn nav(&self) -> &Nav {
        &self.current_slide().nav
    }

    pub fn advance(&mut self) {
        let before = self.controller.current();
        self.controller.advance();
        if self.controller.current() != before {
            self.enter_slide();
        }
    }

    pub fn retreat(&mut self) {
        let before = self.controller.current();
        self.controller.retreat();
        if self.controller.current() != before {
            self.enter_slide();
        }
    }

    pub fn restart(&mut self) {
        let before = self.controller.current();
        self.controller.reset();
        if self.controller.current() != before {
            self.enter_slide();
        }
    }

    /// Audio slots of the visible slide, in binding order.
    pub fn audio_slots(&self) -> &[AudioSlot<M>] {
        &self.slots
    }

    /// Mount a media source into slot `index`. Ignored for a slot that
    /// does not exist on the visible slide.
    pub fn mount_audio(&mut self, index: usize, media: M) {
        match self.slots.get_mut(index) {
            Some(slot) => {
                debug!(index, source = %slot.binding.source, "media mounted");
                slot.media = Some(media);
            }
            None => debug!(index, "mount ignored, no such audio slot"),
        }
    }

    pub fn toggle_audio(&mut self, index: usize) {
        let Some(slot) = self.slots.get_mut(index) else {
            debug!(index, "toggle ignored, no such audio slot");
            return;
        };
        slot.control.toggle(slot.media.as_mut());
    }

    pub fn seek_audio(&mut self, index: usize, fraction: f64) {
        let Some(slot) = self.slots.get_mut(index) else {
            debug!(index, "seek ignored, no such audio slot");
            return;
        };
        slot.control.seek_fraction(slot.media.as_mut(), fraction);
    }

    /// Drain pending media notifications and forward them to the owning
    /// controls. Call once per tick.
    pub fn pump_media(&mut self) {
        for slot in &mut self.slots {
            let Some(media) = slot.media.as_mut() else {
                continue;
            };
            for event in media.poll_events() {
                match event {
                    MediaEvent::TimeUpdate { position, duration } => {
                        slot.control.on_time_update(position, duration);
                    }
                    MediaEvent::Ended => slot.control.on_ended(),
                }
            }
        }
    }

    fn enter_slide(&mut self) {
        let slide = &self.deck.slides[self.controller.current()];
        self.slots = slide
            .audio
            .iter()
            .map(|binding| AudioSlot {
                binding: binding.clone(),
                control: PlaybackControl::new(),
                media: None,
            })
            .collect();
        debug!(
            position = self.controller.current(),
            title = %slide.title,
            clips = self.slots.len(),
            "slide entered"
        );
    }
}
