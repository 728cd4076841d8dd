use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// The terminal refused to read input (closed stdin, not a tty, ...).
    #[error("Failed to read from the terminal. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("Failed to parse answers. Original error: {0}")]
    AnswersParseError(#[from] serde_json::Error),

    /// A scripted console was asked for more input than it was given.
    #[error("No scripted answer left for prompt '{prompt}'.")]
    AnswersExhausted { prompt: String },

    #[error("Invalid validation pattern. Original error: {0}")]
    PatternError(#[from] regex::Error),
}

/// Convenience type alias for Results with the crate error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
