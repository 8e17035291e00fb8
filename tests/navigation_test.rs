//! Integration tests for slide navigation.

use sjung::app::Presenter;
use sjung::content::carolus_rex;
use sjung::state::SlideController;
use sjung::traits::media::MockMedia;

/// The end-to-end sequence from the navigation contract: advance, advance,
/// retreat, reset over an eleven-slide sequence visits 1, 2, 1, 0.
#[test]
fn end_to_end_sequence_visits_expected_positions() {
    let mut controller = SlideController::new(11);
    let mut visited = Vec::new();

    controller.advance();
    visited.push(controller.current());
    controller.advance();
    visited.push(controller.current());
    controller.retreat();
    visited.push(controller.current());
    controller.reset();
    visited.push(controller.current());

    assert_eq!(visited, vec![1, 2, 1, 0]);
}

/// Walk the built-in lesson front to back and check the affordances the
/// deck supplies along the way.
#[test]
fn full_walkthrough_of_the_builtin_lesson() {
    let mut presenter: Presenter<MockMedia> = Presenter::new(carolus_rex()).unwrap();

    assert_eq!(presenter.position(), 0);
    assert_eq!(presenter.nav().advance.as_deref(), Some("Begin"));
    assert!(!presenter.nav().back);

    let mut advances = 0;
    while presenter.nav().advance.is_some() {
        presenter.advance();
        advances += 1;
        assert!(advances <= presenter.slide_count(), "walk did not terminate");
    }

    assert_eq!(presenter.position(), presenter.slide_count() - 1);
    assert!(presenter.nav().restart);

    // The closing slide clamps forward motion; only restart leaves it.
    presenter.advance();
    assert_eq!(presenter.position(), presenter.slide_count() - 1);
    presenter.restart();
    assert_eq!(presenter.position(), 0);
}

#[test]
fn retreat_from_title_slide_stays_put() {
    let mut presenter: Presenter<MockMedia> = Presenter::new(carolus_rex()).unwrap();
    presenter.retreat();
    presenter.retreat();
    assert_eq!(presenter.position(), 0);
}

/// Playback state is scoped to a slide's visibility: coming back to an
/// audio slide yields unmounted slots and rested controls.
#[test]
fn revisited_audio_slide_is_fresh() {
    let mut presenter: Presenter<MockMedia> = Presenter::new(carolus_rex()).unwrap();
    presenter.jump_to(5);

    presenter.mount_audio(0, MockMedia::new(Some(30.0)));
    presenter.mount_audio(1, MockMedia::new(Some(30.0)));
    presenter.toggle_audio(0);
    assert!(presenter.audio_slots()[0].control().is_playing());

    presenter.advance();
    presenter.retreat();

    for slot in presenter.audio_slots() {
        assert!(!slot.is_mounted());
        assert!(!slot.control().is_playing());
        assert!(!slot.control().indicator_visible());
    }
}
