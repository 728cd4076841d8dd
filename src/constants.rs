//! Constants used throughout promptkit

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Fixed prompt texts
pub mod prompts {
    pub const PASSWORD: &str = "Password: ";
    pub const PASSWORD_AGAIN: &str = "Password (again): ";
}

/// Password policy
pub mod password {
    /// Passwords with fewer characters than this are rejected.
    pub const MIN_LENGTH: usize = 5;
}

/// Validation messages shown to the user
pub mod validation {
    pub const NOT_NUMERIC: &str = "Please enter a numeric value";
    pub const NOT_IN_RANGE: &str = "Value is not in range";
    pub const YES_OR_NO: &str = "Please respond using \"y\" or \"n\"";
    pub const PASSWORD_TOO_SHORT: &str = "Passwords must be at least 6 characters long";
    pub const PASSWORD_INVALID_CHARACTER: &str =
        "Invalid character in password: use letters, numbers and punctuation";
    pub const PASSWORDS_MISMATCH: &str = "Passwords do not match, please try again";
    pub const INVALID_ANSWER: &str = "Invalid answer";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
