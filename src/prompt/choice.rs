use super::Prompt;
use crate::{
    console::Console,
    constants::validation::{NOT_IN_RANGE, NOT_NUMERIC},
    error::Result,
    validation::{ValidationError, ValidationResult},
};

/// Asks the user to pick one of a numbered list of options.
///
/// The accepted answer is returned as typed; use [`MultipleChoicePrompt::resolve`]
/// to map it back to an option.
pub struct MultipleChoicePrompt<'a> {
    question: String,
    options: Vec<String>,
    console: &'a dyn Console,
    default: Option<String>,
}

impl<'a> MultipleChoicePrompt<'a> {
    pub fn new<I, S>(question: impl Into<String>, options: I, console: &'a dyn Console) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
            console,
            default: None,
        }
    }

    /// Allows an empty answer, which [`MultipleChoicePrompt::resolve`] maps to `default`.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Question followed by one `"<n>. <option>"` line per option.
    fn numbered_question(&self) -> String {
        let mut lines = Vec::with_capacity(self.options.len() + 1);
        lines.push(self.question.clone());
        lines.extend(
            self.options.iter().enumerate().map(|(i, opt)| format!("{}. {}", i + 1, opt)),
        );
        lines.join("\n")
    }

    /// Maps an accepted answer to the chosen option.
    ///
    /// `validate` also accepts `options.len() + 1`; that index has no option
    /// and resolves to `None`.
    pub fn resolve(&self, answer: &str) -> Option<&str> {
        if answer.is_empty() {
            return self.default.as_deref();
        }
        let index: usize = answer.parse().ok()?;
        index.checked_sub(1).and_then(|i| self.options.get(i)).map(String::as_str)
    }
}

impl Prompt for MultipleChoicePrompt<'_> {
    fn prompt(&self) -> Result<String> {
        let mut answer = self.console.ask(&self.numbered_question())?;
        loop {
            match self.validate(&answer) {
                Ok(()) => return Ok(answer),
                Err(err) => {
                    log::debug!("Rejected choice '{answer}' for '{}': {err}", self.question);
                    self.console.error(err.message());
                    answer = self.console.ask(&self.question)?;
                }
            }
        }
    }

    fn validate(&self, input: &str) -> ValidationResult {
        if self.default.is_some() && input.is_empty() {
            return Ok(());
        }

        if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::new(NOT_NUMERIC));
        }

        // Upper bound is one past the last option.
        let upper = self.options.len() + 1;
        match input.parse::<usize>() {
            Ok(index) if (1..=upper).contains(&index) => Ok(()),
            _ => Err(ValidationError::new(NOT_IN_RANGE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{Exchange, ScriptedConsole};

    fn abc(console: &ScriptedConsole) -> MultipleChoicePrompt<'_> {
        MultipleChoicePrompt::new("Pick", ["a", "b", "c"], console)
    }

    #[test]
    fn returns_raw_answer() {
        let console = ScriptedConsole::new(["2"]);
        assert_eq!(abc(&console).prompt().unwrap(), "2");
        assert_eq!(console.asked(), vec!["Pick\n1. a\n2. b\n3. c".to_string()]);
    }

    #[test]
    fn retry_shows_bare_question() {
        let console = ScriptedConsole::new(["x", "9", "3"]);
        assert_eq!(abc(&console).prompt().unwrap(), "3");
        assert_eq!(
            console.transcript(),
            vec![
                Exchange::Ask("Pick\n1. a\n2. b\n3. c".into()),
                Exchange::Error(NOT_NUMERIC.into()),
                Exchange::Ask("Pick".into()),
                Exchange::Error(NOT_IN_RANGE.into()),
                Exchange::Ask("Pick".into()),
            ]
        );
    }

    #[test]
    fn validates_range_including_one_past_the_end() {
        let console = ScriptedConsole::default();
        let prompt = abc(&console);
        assert_eq!(prompt.validate("0"), Err(ValidationError::new(NOT_IN_RANGE)));
        assert!(prompt.validate("1").is_ok());
        assert!(prompt.validate("3").is_ok());
        assert!(prompt.validate("4").is_ok());
        assert_eq!(prompt.validate("5"), Err(ValidationError::new(NOT_IN_RANGE)));
        assert_eq!(
            prompt.validate("99999999999999999999999999"),
            Err(ValidationError::new(NOT_IN_RANGE))
        );
    }

    #[test]
    fn rejects_non_digits() {
        let console = ScriptedConsole::default();
        let prompt = abc(&console);
        for input in ["-1", "1.0", " 1", "one", "١"] {
            assert_eq!(prompt.validate(input), Err(ValidationError::new(NOT_NUMERIC)));
        }
    }

    #[test]
    fn empty_answer_needs_default() {
        let console = ScriptedConsole::default();
        assert_eq!(abc(&console).validate(""), Err(ValidationError::new(NOT_NUMERIC)));
        assert!(abc(&console).with_default("").validate("").is_ok());
    }

    #[test]
    fn resolve_maps_answers_to_options() {
        let console = ScriptedConsole::default();
        let prompt = abc(&console).with_default("new");
        assert_eq!(prompt.resolve("1"), Some("a"));
        assert_eq!(prompt.resolve("3"), Some("c"));
        assert_eq!(prompt.resolve("4"), None);
        assert_eq!(prompt.resolve("0"), None);
        assert_eq!(prompt.resolve(""), Some("new"));
    }
}
