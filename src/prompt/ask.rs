use super::{apply_default, Prompt};
use crate::{
    console::Console,
    error::Result,
    validation::{ValidationResult, Validator},
};

/// Asks for a single free-text value.
pub struct AskPrompt<'a> {
    question: String,
    console: &'a dyn Console,
    validator: Option<Validator<'a>>,
    default: Option<String>,
}

impl<'a> AskPrompt<'a> {
    pub fn new(question: impl Into<String>, console: &'a dyn Console) -> Self {
        Self { question: question.into(), console, validator: None, default: None }
    }

    /// Sets the function deciding whether an answer is accepted.
    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> ValidationResult + 'a,
    {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Same as [`AskPrompt::with_validator`] for an already boxed validator.
    pub fn with_boxed_validator(mut self, validator: Validator<'a>) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Sets the value used when the user just presses enter.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn question(&self) -> &str {
        &self.question
    }
}

impl Prompt for AskPrompt<'_> {
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
        match &self.validator {
            Some(validator) => validator(input),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{Exchange, ScriptedConsole};
    use crate::validation::{non_empty, ValidationError};

    #[test]
    fn returns_first_accepted_answer() {
        let console = ScriptedConsole::new(["Alice", "unused"]);
        let prompt = AskPrompt::new("Name?", &console);
        assert_eq!(prompt.prompt().unwrap(), "Alice");
        assert_eq!(console.remaining(), 1);
    }

    #[test]
    fn empty_answer_uses_default() {
        let console = ScriptedConsole::new([""]);
        let prompt = AskPrompt::new("Name?", &console).with_default("Bob");
        assert_eq!(prompt.prompt().unwrap(), "Bob");
    }

    #[test]
    fn default_is_validated_too() {
        let console = ScriptedConsole::new(["", "Carol"]);
        let prompt = AskPrompt::new("Name?", &console)
            .with_default("x")
            .with_validator(|s: &str| {
                if s.len() > 1 {
                    Ok(())
                } else {
                    Err(ValidationError::new("too short"))
                }
            });
        assert_eq!(prompt.prompt().unwrap(), "Carol");
        assert_eq!(console.errors(), vec!["too short".to_string()]);
    }

    #[test]
    fn rejected_answer_reasks_same_question() {
        let console = ScriptedConsole::new(["", "Dave"]);
        let prompt = AskPrompt::new("Name?", &console)
            .with_boxed_validator(non_empty("A name is required"));
        assert_eq!(prompt.prompt().unwrap(), "Dave");
        assert_eq!(
            console.transcript(),
            vec![
                Exchange::Ask("Name?".into()),
                Exchange::Error("A name is required".into()),
                Exchange::Ask("Name?".into()),
            ]
        );
    }

    #[test]
    fn without_validator_everything_is_accepted() {
        let console = ScriptedConsole::new([""]);
        let prompt = AskPrompt::new("Anything?", &console);
        assert!(prompt.validate("").is_ok());
        assert_eq!(prompt.prompt().unwrap(), "");
    }
}
