use crate::{
    cli::{AskArgs, ChooseArgs, Cli, Commands, ConfirmArgs},
    console::{Console, ScriptedConsole, TerminalConsole},
    constants::{validation::INVALID_ANSWER, STDIN_INDICATOR},
    error::Result,
    prompt::{AskPrompt, BinaryPrompt, MultipleChoicePrompt, PasswordPrompt, Prompt},
    validation,
};
use std::io::Read;

/// Runs one prompt subcommand and prints the accepted answer
pub struct Runner {
    command: Commands,
    answers: Option<String>,
}

impl Runner {
    pub fn new(cli: Cli) -> Self {
        Self { command: cli.command, answers: cli.answers }
    }

    /// Picks the console, runs the prompt and prints the answer on stdout
    pub fn run(self) -> Result<()> {
        let answer = match self.scripted_console()? {
            Some(console) => {
                log::info!("Answering from script ({} answers)", console.remaining());
                self.run_with_console(&console)?
            }
            None => self.run_with_console(&TerminalConsole::new())?,
        };
        println!("{answer}");
        Ok(())
    }

    /// Runs the selected prompt against `console` and returns the answer to print
    pub fn run_with_console(&self, console: &dyn Console) -> Result<String> {
        match &self.command {
            Commands::Ask(args) => self.ask(args, console),
            Commands::Choose(args) => self.choose(args, console),
            Commands::Confirm(args) => self.confirm(args, console),
            Commands::Password => PasswordPrompt::new(console).prompt(),
        }
    }

    fn scripted_console(&self) -> Result<Option<ScriptedConsole>> {
        let Some(answers) = &self.answers else {
            return Ok(None);
        };
        let content = if answers == STDIN_INDICATOR {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            answers.clone()
        };
        Ok(Some(ScriptedConsole::from_json(&content)?))
    }

    fn ask(&self, args: &AskArgs, console: &dyn Console) -> Result<String> {
        let mut prompt = AskPrompt::new(args.question.as_str(), console);
        if let Some(pattern) = &args.pattern {
            let message = args.pattern_error.as_deref().unwrap_or(INVALID_ANSWER);
            prompt = prompt.with_boxed_validator(validation::matches(pattern, message)?);
        }
        if let Some(default) = &args.default {
            prompt = prompt.with_default(default.as_str());
        }
        prompt.prompt()
    }

    fn choose(&self, args: &ChooseArgs, console: &dyn Console) -> Result<String> {
        let mut prompt =
            MultipleChoicePrompt::new(args.question.as_str(), &args.options, console);
        if let Some(default) = &args.default {
            prompt = prompt.with_default(default.as_str());
        }
        let answer = prompt.prompt()?;
        if !args.resolve {
            return Ok(answer);
        }
        match prompt.resolve(&answer) {
            Some(option) => Ok(option.to_string()),
            None => {
                log::warn!("Answer '{answer}' does not name an option");
                Ok(String::new())
            }
        }
    }

    fn confirm(&self, args: &ConfirmArgs, console: &dyn Console) -> Result<String> {
        let mut prompt = BinaryPrompt::new(args.question.as_str(), console);
        if let Some(default) = &args.default {
            prompt = prompt.with_default(default.as_str());
        }
        prompt.prompt()
    }
}

/// Runs the CLI command described by `cli`
pub fn run(cli: Cli) -> Result<()> {
    Runner::new(cli).run()
}
