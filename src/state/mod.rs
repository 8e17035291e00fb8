//! Session state for the running presentation.

mod slides;

pub use slides::SlideController;
