use super::{apply_default, Prompt};
use crate::{
    console::Console,
    constants::validation::YES_OR_NO,
    error::Result,
    validation::{ValidationError, ValidationResult},
};

/// Asks a yes/no question answered with "y" or "n".
pub struct BinaryPrompt<'a> {
    question: String,
    console: &'a dyn Console,
    default: Option<String>,
}

impl<'a> BinaryPrompt<'a> {
    pub fn new(question: impl Into<String>, console: &'a dyn Console) -> Self {
        Self { question: question.into(), console, default: None }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Runs the prompt and reports whether the user answered yes.
    pub fn confirm(&self) -> Result<bool> {
        Ok(self.prompt()?.eq_ignore_ascii_case("y"))
    }
}

impl Prompt for BinaryPrompt<'_> {
    /// Returns the accepted answer as typed, e.g. `"Y"` or `"n"`.
    fn prompt(&self) -> Result<String> {
        loop {
            let answer = self.console.ask(&self.question)?;
            let answer = apply_default(answer, self.default.as_deref());
            match self.validate(&answer) {
                Ok(()) => return Ok(answer),
                Err(err) => {
                    log::debug!("Rejected answer for '{}': {err}", self.question);
                    self.console.error(err.message());
                }
            }
        }
    }

    fn validate(&self, input: &str) -> ValidationResult {
        match input.to_lowercase().as_str() {
            "y" | "n" => Ok(()),
            _ => Err(ValidationError::new(YES_OR_NO)),
        }
    }
}
