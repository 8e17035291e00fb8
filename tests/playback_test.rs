//! Integration tests for playback control over a clock-driven clip.

use sjung::app::Presenter;
use sjung::audio::{ClockMedia, PlaybackControl};
use sjung::content::carolus_rex;
use sjung::traits::media::MediaSource;
use sjung::traits::time::MockTimeProvider;

type Player = Presenter<ClockMedia<MockTimeProvider>>;

fn player_on_lyrics_slide() -> Player {
    let mut presenter: Player = Presenter::new(carolus_rex()).unwrap();
    // Slide 6 is the first line-by-line page, one verse clip.
    presenter.jump_to(6);
    assert_eq!(presenter.audio_slots().len(), 1);
    presenter.mount_audio(0, ClockMedia::new(MockTimeProvider::new(), 30.0));
    presenter
}

#[test]
fn progress_mirrors_the_running_clip() {
    let mut presenter = player_on_lyrics_slide();

    presenter.toggle_audio(0);
    presenter.audio_slots()[0].media().unwrap().clock().advance(7_500);
    presenter.pump_media();

    let control = presenter.audio_slots()[0].control();
    assert!(control.is_playing());
    assert_eq!(control.progress_percent(), 25.0);
    assert!(control.indicator_visible());
}

#[test]
fn pause_freezes_progress_where_it_stopped() {
    let mut presenter = player_on_lyrics_slide();

    presenter.toggle_audio(0);
    presenter.audio_slots()[0].media().unwrap().clock().advance(15_000);
    presenter.pump_media();
    presenter.toggle_audio(0);

    presenter.audio_slots()[0].media().unwrap().clock().advance(60_000);
    presenter.pump_media();

    let control = presenter.audio_slots()[0].control();
    assert!(!control.is_playing());
    assert_eq!(control.progress_percent(), 50.0);
    // Paused mid-clip keeps the indicator visible.
    assert!(control.indicator_visible());
}

#[test]
fn natural_completion_returns_the_control_to_rest() {
    let mut presenter = player_on_lyrics_slide();

    presenter.toggle_audio(0);
    presenter.audio_slots()[0].media().unwrap().clock().advance(31_000);
    presenter.pump_media();

    let control = presenter.audio_slots()[0].control();
    assert!(!control.is_playing());
    assert_eq!(control.progress_percent(), 0.0);
    assert!(!control.indicator_visible());

    // The clip rewound: playing again starts from the top.
    presenter.toggle_audio(0);
    presenter.audio_slots()[0].media().unwrap().clock().advance(3_000);
    presenter.pump_media();
    assert_eq!(presenter.audio_slots()[0].control().progress_percent(), 10.0);
}

#[test]
fn seek_fraction_moves_the_clip_position() {
    let mut presenter = player_on_lyrics_slide();

    presenter.seek_audio(0, 0.5);
    assert_eq!(presenter.audio_slots()[0].media().unwrap().position(), 15.0);

    // Out-of-range fractions clamp to the clip bounds.
    presenter.seek_audio(0, 1.5);
    assert_eq!(presenter.audio_slots()[0].media().unwrap().position(), 30.0);
    presenter.seek_audio(0, -1.0);
    assert_eq!(presenter.audio_slots()[0].media().unwrap().position(), 0.0);
}

/// Seeking while paused surfaces the indicator on the next pump, as the
/// visibility rule requires.
#[test]
fn seek_while_paused_shows_the_indicator() {
    let mut presenter = player_on_lyrics_slide();
    assert!(!presenter.audio_slots()[0].control().indicator_visible());

    presenter.seek_audio(0, 0.25);
    presenter.pump_media();

    let control = presenter.audio_slots()[0].control();
    assert!(!control.is_playing());
    assert_eq!(control.progress_percent(), 25.0);
    assert!(control.indicator_visible());
}

/// Two clips on the first-listen slide stay independent.
#[test]
fn sibling_clips_do_not_share_state() {
    let mut presenter: Presenter<ClockMedia<MockTimeProvider>> =
        Presenter::new(carolus_rex()).unwrap();
    presenter.jump_to(5);
    presenter.mount_audio(0, ClockMedia::new(MockTimeProvider::new(), 30.0));
    presenter.mount_audio(1, ClockMedia::new(MockTimeProvider::new(), 60.0));

    presenter.toggle_audio(0);
    presenter.audio_slots()[0].media().unwrap().clock().advance(6_000);
    presenter.audio_slots()[1].media().unwrap().clock().advance(6_000);
    presenter.pump_media();

    assert_eq!(presenter.audio_slots()[0].control().progress_percent(), 20.0);
    assert!(presenter.audio_slots()[0].control().is_playing());
    assert_eq!(presenter.audio_slots()[1].control().progress_percent(), 0.0);
    assert!(!presenter.audio_slots()[1].control().is_playing());
}

/// Commands before any media is mounted fall into the silent guards.
#[test]
fn unmounted_slot_ignores_playback_commands() {
    let mut presenter: Player = Presenter::new(carolus_rex()).unwrap();
    presenter.jump_to(6);

    presenter.toggle_audio(0);
    presenter.seek_audio(0, 0.5);
    presenter.pump_media();

    let control = presenter.audio_slots()[0].control();
    assert!(!control.is_playing());
    assert_eq!(control.progress_percent(), 0.0);
}

/// The control is a passive mirror: progress only changes on notifications.
#[test]
fn progress_requires_a_pump() {
    let mut control = PlaybackControl::new();
    let mut media = ClockMedia::new(MockTimeProvider::new(), 30.0);

    control.toggle(Some(&mut media));
    media.clock().advance(10_000);
    assert_eq!(control.progress_percent(), 0.0);

    for event in media.poll_events() {
        match event {
            sjung::traits::media::MediaEvent::TimeUpdate { position, duration } => {
                control.on_time_update(position, duration);
            }
            sjung::traits::media::MediaEvent::Ended => control.on_ended(),
        }
    }
    assert!(control.progress_percent() > 0.0);
}
