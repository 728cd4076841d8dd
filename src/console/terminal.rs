//! Dialoguer-based console
//!
//! Reads answers from the controlling terminal. Prompts are printed exactly as
//! given: the plain theme adds no `": "` suffix and no default hint, since the
//! prompt texts already carry their own punctuation.

use super::Console;
use crate::error::Result;
use dialoguer::{theme::Theme, Input, Password};
use std::fmt;

/// Theme that writes prompts verbatim.
struct PlainTheme;

impl Theme for PlainTheme {
    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        _default: Option<&str>,
    ) -> fmt::Result {
        write!(f, "{prompt}")
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        write!(f, "{prompt}{sel}")
    }

    fn format_password_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        write!(f, "{prompt}")
    }

    fn format_password_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
    ) -> fmt::Result {
        write!(f, "{prompt}********")
    }
}

/// Console reading from the user's terminal.
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn ask(&self, prompt: &str) -> Result<String> {
        Ok(Input::<String>::with_theme(&PlainTheme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?)
    }

    fn getpass(&self, prompt: &str) -> Result<String> {
        Ok(Password::with_theme(&PlainTheme)
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?)
    }

    fn error(&self, message: &str) {
        eprintln!("{message}");
    }

    fn tell(&self, message: &str) {
        println!("{message}");
    }
}
