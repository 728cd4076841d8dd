//! Console that answers from a predefined script
//!
//! Useful for automation, testing, or CI/CD environments. Every interaction is
//! recorded so callers can inspect what a prompt displayed.

use super::Console;
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::VecDeque;

/// One recorded console interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exchange {
    Ask(String),
    GetPass(String),
    Error(String),
    Tell(String),
}

/// Console that pops answers from a queue.
///
/// `ask` and `getpass` share one queue. Once it is empty, reads fail with
/// [`Error::AnswersExhausted`] so a retry loop cannot spin forever.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: RefCell<VecDeque<String>>,
    transcript: RefCell<Vec<Exchange>>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
            transcript: RefCell::new(Vec::new()),
        }
    }

    /// Builds a console from a JSON array of strings, e.g. `["Bob", "y"]`.
    pub fn from_json(content: &str) -> Result<Self> {
        let answers: Vec<String> = serde_json::from_str(content)?;
        Ok(Self::new(answers))
    }

    /// Every interaction so far, in order.
    pub fn transcript(&self) -> Vec<Exchange> {
        self.transcript.borrow().clone()
    }

    /// Prompts passed to `ask`, in order.
    pub fn asked(&self) -> Vec<String> {
        self.collect(|exchange| match exchange {
            Exchange::Ask(prompt) => Some(prompt.clone()),
            _ => None,
        })
    }

    /// Error messages shown so far.
    pub fn errors(&self) -> Vec<String> {
        self.collect(|exchange| match exchange {
            Exchange::Error(message) => Some(message.clone()),
            _ => None,
        })
    }

    /// Number of answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn collect(&self, pick: impl Fn(&Exchange) -> Option<String>) -> Vec<String> {
        self.transcript.borrow().iter().filter_map(pick).collect()
    }

    fn next_answer(&self, prompt: &str) -> Result<String> {
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::AnswersExhausted { prompt: prompt.to_string() })
    }
}

impl Console for ScriptedConsole {
    fn ask(&self, prompt: &str) -> Result<String> {
        self.transcript.borrow_mut().push(Exchange::Ask(prompt.to_string()));
        let answer = self.next_answer(prompt)?;
        log::debug!("Auto-answering prompt '{prompt}' with: '{answer}'");
        Ok(answer)
    }

    fn getpass(&self, prompt: &str) -> Result<String> {
        self.transcript.borrow_mut().push(Exchange::GetPass(prompt.to_string()));
        let answer = self.next_answer(prompt)?;
        log::debug!("Auto-answering masked prompt '{prompt}'");
        Ok(answer)
    }

    fn error(&self, message: &str) {
        self.transcript.borrow_mut().push(Exchange::Error(message.to_string()));
    }

    fn tell(&self, message: &str) {
        self.transcript.borrow_mut().push(Exchange::Tell(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_answers_in_order() {
        let console = ScriptedConsole::new(["first", "second"]);
        assert_eq!(console.ask("One?").unwrap(), "first");
        assert_eq!(console.getpass("Two?").unwrap(), "second");
        assert_eq!(console.remaining(), 0);
        assert_eq!(
            console.transcript(),
            vec![Exchange::Ask("One?".into()), Exchange::GetPass("Two?".into())]
        );
    }

    #[test]
    fn fails_when_script_runs_out() {
        let console = ScriptedConsole::new(Vec::<String>::new());
        match console.ask("Anything?") {
            Err(Error::AnswersExhausted { prompt }) => assert_eq!(prompt, "Anything?"),
            other => panic!("Expected AnswersExhausted, got {other:?}"),
        }
    }

    #[test]
    fn records_errors_and_messages() {
        let console = ScriptedConsole::default();
        console.error("bad");
        console.tell("hello");
        assert_eq!(console.errors(), vec!["bad".to_string()]);
        assert_eq!(
            console.transcript(),
            vec![Exchange::Error("bad".into()), Exchange::Tell("hello".into())]
        );
    }

    #[test]
    fn parses_json_script() {
        let console = ScriptedConsole::from_json(r#"["Bob", ""]"#).unwrap();
        assert_eq!(console.remaining(), 2);
        assert!(ScriptedConsole::from_json(r#"{"name": "Bob"}"#).is_err());
    }
}
