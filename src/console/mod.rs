//! Console I/O abstraction used by every prompt
//!
//! The layers are:
//! - the [`Console`] trait, independent of any UI library
//! - `terminal`: concrete implementation using the dialoguer library
//! - `scripted`: replays queued answers and records what was shown

use crate::error::Result;

pub mod scripted;
pub mod terminal;

pub use scripted::{Exchange, ScriptedConsole};
pub use terminal::TerminalConsole;

/// Blocking I/O boundary shared by prompts.
pub trait Console {
    /// Displays `prompt` and returns the line the user typed, possibly empty.
    fn ask(&self, prompt: &str) -> Result<String>;

    /// Like [`Console::ask`] but the input is not echoed.
    fn getpass(&self, prompt: &str) -> Result<String>;

    /// Shows an error to the user.
    fn error(&self, message: &str);

    /// Shows an informational line to the user.
    fn tell(&self, message: &str);
}
