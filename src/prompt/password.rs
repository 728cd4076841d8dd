use super::Prompt;
use crate::{
    console::Console,
    constants::{
        password::MIN_LENGTH,
        prompts::{PASSWORD, PASSWORD_AGAIN},
        validation::{PASSWORDS_MISMATCH, PASSWORD_INVALID_CHARACTER, PASSWORD_TOO_SHORT},
    },
    error::Result,
    validation::{ValidationError, ValidationResult},
};
use std::collections::HashSet;

/// ASCII letters, digits and punctuation.
fn allowed_characters() -> impl Iterator<Item = char> {
    (0u8..=127).map(char::from).filter(|c| c.is_ascii_graphic())
}

/// Asks for a new password twice, without echo.
pub struct PasswordPrompt<'a> {
    console: &'a dyn Console,
}

impl<'a> PasswordPrompt<'a> {
    pub fn new(console: &'a dyn Console) -> Self {
        Self { console }
    }
}

impl Prompt for PasswordPrompt<'_> {
    fn prompt(&self) -> Result<String> {
        loop {
            let password = self.console.getpass(PASSWORD)?;
            if let Err(err) = self.validate(&password) {
                log::debug!("Rejected password: {err}");
                self.console.error(err.message());
                continue;
            }

            let confirmation = self.console.getpass(PASSWORD_AGAIN)?;
            if password != confirmation {
                log::debug!("Password confirmation did not match");
                self.console.error(PASSWORDS_MISMATCH);
                continue;
            }

            return Ok(password);
        }
    }

    /// Rejects passwords shorter than [`MIN_LENGTH`] characters, and passwords
    /// whose characters cover every ASCII letter, digit and punctuation mark.
    fn validate(&self, input: &str) -> ValidationResult {
        if input.chars().count() < MIN_LENGTH {
            return Err(ValidationError::new(PASSWORD_TOO_SHORT));
        }

        let used: HashSet<char> = input.chars().collect();
        if allowed_characters().all(|c| used.contains(&c)) {
            return Err(ValidationError::new(PASSWORD_INVALID_CHARACTER));
        }

        Ok(())
    }
}
