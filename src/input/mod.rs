//! Parsing of the text commands that drive a session.

mod command;

pub use command::{Command, parse};
