//! Prompts bound to a named parameter
//!
//! A [`ParameterPrompt`] owns one key of an answers map. When the key was
//! already supplied (for example through `--answers`) and its value passes
//! validation, the value is kept and echoed to the user; otherwise the user
//! is asked for it.

use crate::{
    console::Console,
    error::Result,
    prompt::{AskPrompt, Prompt},
    validation::{ValidationResult, Validator},
};
use serde_json::{Map, Value};

pub struct ParameterPrompt<'a> {
    name: String,
    label: String,
    step: String,
    default: Option<String>,
    validator: Option<Validator<'a>>,
    console: &'a dyn Console,
}

impl<'a> ParameterPrompt<'a> {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        console: &'a dyn Console,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            step: String::new(),
            default: None,
            validator: None,
            console,
        }
    }

    /// Prefix shown before the question, e.g. `[2/5]`.
    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.step = step.into();
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> ValidationResult + 'a,
    {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn with_boxed_validator(mut self, validator: Validator<'a>) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, value: &str) -> ValidationResult {
        match &self.validator {
            Some(validator) => validator(value),
            None => Ok(()),
        }
    }

    fn with_step_prefix(&self, message: String) -> String {
        if self.step.is_empty() {
            message
        } else {
            format!("{} {}", self.step, message)
        }
    }

    fn question(&self) -> String {
        match &self.default {
            Some(default) => self.with_step_prefix(format!(
                "Enter a value for {} or leave blank to use\n[{}]: ",
                self.label, default
            )),
            None => self.with_step_prefix(format!("Enter a value for {}: ", self.label)),
        }
    }

    /// Returns the supplied value when it is a string that validates.
    fn supplied_value(&self, answers: &Map<String, Value>) -> Option<String> {
        let value = match answers.get(&self.name)? {
            Value::String(s) => s.clone(),
            other => {
                log::warn!("Ignoring non-string answer for '{}': {other}", self.name);
                return None;
            }
        };

        match self.validate(&value) {
            Ok(()) => {
                self.console.tell(&self.with_step_prefix(format!("{}: {}", self.name, value)));
                Some(value)
            }
            Err(err) => {
                self.console.error(err.message());
                None
            }
        }
    }

    /// Resolves this parameter, asking only when no valid value was supplied.
    pub fn resolve(&self, answers: &mut Map<String, Value>) -> Result<String> {
        if let Some(value) = self.supplied_value(answers) {
            log::debug!("Using supplied answer for '{}'", self.name);
            return Ok(value);
        }

        let question = self.question();
        let mut prompt = AskPrompt::new(question, self.console)
            .with_validator(|s: &str| self.validate(s));
        if let Some(default) = &self.default {
            prompt = prompt.with_default(default.clone());
        }

        let value = prompt.prompt()?;
        answers.insert(self.name.clone(), Value::String(value.clone()));
        Ok(value)
    }
}

/// Resolves every parameter in order and returns the completed answers.
pub fn resolve_all(
    parameters: &[ParameterPrompt<'_>],
    mut answers: Map<String, Value>,
) -> Result<Map<String, Value>> {
    for parameter in parameters {
        parameter.resolve(&mut answers)?;
    }
    Ok(answers)
}
