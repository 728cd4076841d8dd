use crate::constants::verbosity;
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

/// Ask validated questions on the terminal and print the accepted answer.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Scripted answers as a JSON array of strings, or `-` to read it from stdin.
    #[arg(short, long, global = true)]
    pub answers: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Ask for a free-text value.
    Ask(AskArgs),
    /// Pick one of several numbered options.
    Choose(ChooseArgs),
    /// Answer a yes/no question with "y" or "n".
    Confirm(ConfirmArgs),
    /// Enter a new password twice.
    Password,
}

#[derive(Args, Debug, Clone)]
pub struct AskArgs {
    /// Question shown to the user.
    #[arg(value_name = "QUESTION")]
    pub question: String,

    /// Value used when the answer is left blank.
    #[arg(short, long)]
    pub default: Option<String>,

    /// Regular expression the answer must match.
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Message shown when the answer does not match `--pattern`.
    #[arg(long = "pattern-error")]
    pub pattern_error: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ChooseArgs {
    /// Question shown above the options.
    #[arg(value_name = "QUESTION")]
    pub question: String,

    /// Options, numbered from 1.
    #[arg(value_name = "OPTION", required = true)]
    pub options: Vec<String>,

    /// Allow a blank answer, which selects this value.
    #[arg(short, long)]
    pub default: Option<String>,

    /// Print the chosen option instead of its number.
    #[arg(long)]
    pub resolve: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ConfirmArgs {
    /// Question shown to the user.
    #[arg(value_name = "QUESTION")]
    pub question: String,

    /// Answer used when left blank ("y" or "n").
    #[arg(short, long)]
    pub default: Option<String>,
}

/// Parse command line arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_ask_with_options() {
        let cli = Cli::parse_from([
            "promptkit",
            "ask",
            "Name?",
            "--default",
            "Bob",
            "--pattern",
            "^[A-Z]",
            "--pattern-error",
            "Capitalize it",
        ]);
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Commands::Ask(args) => {
                assert_eq!(args.question, "Name?");
                assert_eq!(args.default.as_deref(), Some("Bob"));
                assert_eq!(args.pattern.as_deref(), Some("^[A-Z]"));
                assert_eq!(args.pattern_error.as_deref(), Some("Capitalize it"));
            }
            other => panic!("Expected ask, got {other:?}"),
        }
    }

    #[test]
    fn parses_choose_with_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "promptkit", "choose", "Pick", "a", "b", "c", "--resolve", "-vv", "--answers",
            "[\"2\"]",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.answers.as_deref(), Some("[\"2\"]"));
        match cli.command {
            Commands::Choose(args) => {
                assert_eq!(args.options, vec!["a", "b", "c"]);
                assert!(args.resolve);
                assert!(args.default.is_none());
            }
            other => panic!("Expected choose, got {other:?}"),
        }
    }

    #[test]
    fn choose_requires_options() {
        assert!(Cli::try_parse_from(["promptkit", "choose", "Pick"]).is_err());
    }

    #[test]
    fn parses_confirm_and_password() {
        let cli = Cli::parse_from(["promptkit", "confirm", "Sure?", "-d", "Y"]);
        assert!(matches!(
            cli.command,
            Commands::Confirm(ConfirmArgs { ref default, .. }) if default.as_deref() == Some("Y")
        ));
        let cli = Cli::parse_from(["promptkit", "password"]);
        assert!(matches!(cli.command, Commands::Password));
    }
}
