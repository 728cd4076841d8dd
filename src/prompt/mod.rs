//! Validated interactive prompts
//!
//! Every prompt asks the console for input, validates it and asks again until
//! the answer is accepted. Validation failures are shown through the console
//! and never returned to the caller; only console failures are.

use crate::{error::Result, validation::ValidationResult};

pub mod ask;
pub mod binary;
pub mod choice;
pub mod password;

pub use ask::AskPrompt;
pub use binary::BinaryPrompt;
pub use choice::MultipleChoicePrompt;
pub use password::PasswordPrompt;

/// Common interface for all prompt types
pub trait Prompt {
    /// Asks until an answer passes [`Prompt::validate`] and returns it.
    fn prompt(&self) -> Result<String>;

    /// Checks a raw answer against this prompt's policy.
    fn validate(&self, input: &str) -> ValidationResult;
}

/// Replaces an empty answer with a non-empty default.
pub(crate) fn apply_default(answer: String, default: Option<&str>) -> String {
    match default {
        Some(default) if answer.is_empty() && !default.is_empty() => default.to_string(),
        _ => answer,
    }
}
