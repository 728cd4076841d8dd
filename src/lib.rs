/// Handles argument parsing and runs prompt subcommands.
pub mod cli;

/// Console I/O abstraction and its implementations.
pub mod console;

/// Shared messages, prompt texts and exit codes.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Prompts bound to named parameters of an answers map.
pub mod parameter;

/// Validated interactive prompts.
pub mod prompt;

/// Answer validators
pub mod validation;
