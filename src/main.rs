use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use sjung::app::Presenter;
use sjung::audio::ClockMedia;
use sjung::config::{AppConfig, DeviceClass};
use sjung::content::{self, Deck};
use sjung::input::{self, Command};
use sjung::traits::time::SystemTimeProvider;
use sjung::util::logging;

/// Simulated clip length; stands in for the metadata a real source reports.
const DEFAULT_CLIP_SECS: f64 = 30.0;

type Player = Presenter<ClockMedia<SystemTimeProvider>>;

#[derive(Parser)]
#[command(name = "sjung", about = "Slide-based language lesson player")]
struct Args {
    /// Config file path
    #[arg(long, env = "SJUNG_CONFIG")]
    config: Option<PathBuf>,

    /// Lesson deck JSON (defaults to the built-in lesson)
    #[arg(long)]
    deck: Option<PathBuf>,

    /// Viewport width used to resolve the device class
    #[arg(long)]
    width: Option<u32>,

    /// Show debug logs
    #[arg(short, long)]
    verbose: bool,

    /// Semicolon-separated commands to run instead of reading stdin
    #[arg(long)]
    script: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if let Some(width) = args.width {
        config.viewport_width = width;
    }
    if args.verbose {
        config.verbose = true;
    }
    if let Some(deck) = &args.deck {
        config.deck_path = Some(deck.to_string_lossy().into_owned());
    }

    logging::init_logging(config.log_dir.as_deref().map(Path::new), config.verbose)?;

    let deck = match &config.deck_path {
        Some(path) => Deck::load_from(path)?,
        None => content::carolus_rex(),
    };
    info!(title = %deck.title, slides = deck.len(), "deck loaded");

    let mut presenter: Player = Presenter::new(deck)?;
    presenter.jump_to(config.start_slide);
    mount_clips(&mut presenter);

    let device = DeviceClass::from_width(config.viewport_width);

    match &args.script {
        Some(script) => run_script(&mut presenter, device, script),
        None => run_interactive(&mut presenter, device)?,
    }
    Ok(())
}

/// Mount a simulated clip into every still-empty audio slot of the
/// visible slide.
fn mount_clips(presenter: &mut Player) {
    let unmounted: Vec<usize> = presenter
        .audio_slots()
        .iter()
        .enumerate()
        .filter(|(_, slot)| !slot.is_mounted())
        .map(|(i, _)| i)
        .collect();
    for index in unmounted {
        presenter.mount_audio(
            index,
            ClockMedia::new(SystemTimeProvider::new(), DEFAULT_CLIP_SECS),
        );
    }
}

/// Run one command. Returns true when the session should end.
fn apply(presenter: &mut Player, command: Command) -> bool {
    match command {
        Command::Advance => {
            presenter.advance();
            mount_clips(presenter);
        }
        Command::Retreat => {
            presenter.retreat();
            mount_clips(presenter);
        }
        Command::Restart => {
            presenter.restart();
            mount_clips(presenter);
        }
        Command::Toggle(index) => presenter.toggle_audio(index),
        Command::Seek(index, fraction) => presenter.seek_audio(index, fraction),
        Command::Wait(ms) => thread::sleep(Duration::from_millis(ms)),
        Command::Tick => {}
        Command::Quit => return true,
    }
    presenter.pump_media();
    false
}

fn run_script(presenter: &mut Player, device: DeviceClass, script: &str) {
    for step in script.split(';') {
        match input::parse(step) {
            Some(Command::Quit) => break,
            Some(command) => {
                if apply(presenter, command) {
                    break;
                }
                render(presenter, device);
            }
            None => eprintln!("unrecognized command: {step:?}"),
        }
    }
}

fn run_interactive(presenter: &mut Player, device: DeviceClass) -> Result<()> {
    println!("commands: n(ext) b(ack) r(estart) p [clip] s <clip> <0..1> w <ms> q(uit)");
    render(presenter, device);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match input::parse(&line) {
            Some(Command::Quit) => break,
            Some(command) => {
                apply(presenter, command);
                render(presenter, device);
            }
            None => println!("unrecognized input, try: n b r p s w q"),
        }
    }
    Ok(())
}

fn render(presenter: &Player, device: DeviceClass) {
    let slide = presenter.current_slide();
    let layout = device.layout();

    println!();
    println!(
        "[{}/{}] {}  ({}, {} col)",
        presenter.position() + 1,
        presenter.slide_count(),
        slide.title,
        device,
        layout.columns,
    );

    for (i, slot) in presenter.audio_slots().iter().enumerate() {
        let control = slot.control();
        let state = if control.is_playing() {
            "playing"
        } else if slot.is_mounted() {
            "paused"
        } else {
            "loading"
        };
        if control.indicator_visible() {
            println!(
                "  audio {i}: {} [{state}] {:3.0}%",
                slot.binding().label,
                control.progress_percent(),
            );
        } else {
            println!("  audio {i}: {} [{state}]", slot.binding().label);
        }
    }

    let nav = presenter.nav();
    let mut affordances = Vec::new();
    if nav.back {
        affordances.push("[b] Back".to_string());
    }
    if let Some(label) = &nav.advance {
        affordances.push(format!("[n] {label}"));
    }
    if nav.restart {
        affordances.push("[r] Start again".to_string());
    }
    println!("  {}", affordances.join("  "));
}
