/// A user command against the running session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Advance,
    Retreat,
    Restart,
    /// Toggle play/pause on the slide's nth audio clip.
    Toggle(usize),
    /// Scrub the nth audio clip to a fraction of its duration.
    Seek(usize, f64),
    /// Let time pass, in milliseconds. Useful in scripted runs.
    Wait(u64),
    /// No input: just drain media notifications and redraw.
    Tick,
    Quit,
}

/// Parse one input line. Empty input is a tick; unrecognized input is None.
pub fn parse(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    match parts.next() {
        None => Some(Command::Tick),
        Some("n") | Some("next") => Some(Command::Advance),
        Some("b") | Some("back") => Some(Command::Retreat),
        Some("r") | Some("restart") => Some(Command::Restart),
        Some("q") | Some("quit") => Some(Command::Quit),
        Some("p") | Some("play") => match parts.next() {
            None => Some(Command::Toggle(0)),
            Some(arg) => arg.parse().ok().map(Command::Toggle),
        },
        Some("s") | Some("seek") => {
            let index = parts.next()?.parse().ok()?;
            let fraction = parts.next()?.parse().ok()?;
            Some(Command::Seek(index, fraction))
        }
        Some("w") | Some("wait") => parts.next()?.parse().ok().map(Command::Wait),
        _ => None,
    }
}
