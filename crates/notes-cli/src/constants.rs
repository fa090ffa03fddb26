//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// No note with the given number.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong password, too many attempts).
    pub const AUTH_FAILED: i32 = 5;

    /// The notes file could not be parsed.
    pub const MALFORMED_DATA: i32 = 6;
}

/// Password prompts before giving up.
pub const MAX_PASSWORD_ATTEMPTS: usize = 3;

/// File name of the notes file inside the data directory.
pub const DATA_FILE_NAME: &str = "notes_data.json";

/// Suffix given to an unreadable notes file before it is replaced.
pub const MALFORMED_SUFFIX: &str = "malformed";
