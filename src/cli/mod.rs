pub mod args;
pub mod runner;

pub use args::{
    get_log_level_from_verbose, parse_cli, AskArgs, ChooseArgs, Cli, Commands, ConfirmArgs,
};
pub use runner::{run, Runner};
