//! Answer validators
//!
//! A validator inspects a raw answer and either accepts it or rejects it with
//! a [`ValidationError`] whose message is shown to the user before the
//! question is asked again.

use crate::error::Result;
use regex::Regex;
use thiserror::Error;

/// Rejection of a single answer. Always handled inside the prompt loop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outcome of validating one answer.
pub type ValidationResult = std::result::Result<(), ValidationError>;

/// Boxed validator function injected into prompts.
pub type Validator<'a> = Box<dyn Fn(&str) -> ValidationResult + 'a>;

/// Rejects the empty answer.
pub fn non_empty<'a>(message: impl Into<String>) -> Validator<'a> {
    let message = message.into();
    Box::new(move |s: &str| {
        if s.is_empty() {
            Err(ValidationError::new(message.clone()))
        } else {
            Ok(())
        }
    })
}

/// Accepts answers whose character count lies in `[min, max]`.
pub fn length_between<'a>(
    min: usize,
    max: usize,
    message: impl Into<String>,
) -> Validator<'a> {
    let message = message.into();
    Box::new(move |s: &str| {
        let len = s.chars().count();
        if (min..=max).contains(&len) {
            Ok(())
        } else {
            Err(ValidationError::new(message.clone()))
        }
    })
}

/// Accepts answers matched by `pattern`.
///
/// The pattern is used as given, so anchor it (`^...$`) to match whole answers.
pub fn matches<'a>(pattern: &str, message: impl Into<String>) -> Result<Validator<'a>> {
    let regex = Regex::new(pattern)?;
    let message = message.into();
    Ok(Box::new(move |s: &str| {
        if regex.is_match(s) {
            Ok(())
        } else {
            log::trace!("Answer did not match pattern '{}'", regex.as_str());
            Err(ValidationError::new(message.clone()))
        }
    }))
}
