//! Static lesson content consumed by the presenter.
//!
//! A deck is an ordered, fixed-length catalogue of slide records, immutable
//! for the lifetime of a session. The navigation and playback layers consume
//! only the slide count and each slide's affordances and audio bindings; the
//! display content rides along untouched.

mod carolus;
mod deck;
mod model;

pub use carolus::carolus_rex;
pub use deck::{Deck, normalize_token};
pub use model::{
    AudioBinding, ChoiceQuestion, LyricLine, Nav, Paragraph, Quiz, Section, Slide, SlideBody,
    StatFigure, StoryPanel, TrueFalseQuestion, VocabEntry, WordClass,
};
