//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use notes_core::NotesError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Authentication failed (wrong password, too many attempts)
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::AuthFailed { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create an AuthFailed error with message and hint.
    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Exit code for a core error surfaced by a one-shot command.
pub fn notes_exit_code(err: &NotesError) -> i32 {
    match err {
        NotesError::Index { .. } => exit_codes::NOT_FOUND,
        NotesError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        NotesError::Decryption => exit_codes::AUTH_FAILED,
        NotesError::MalformedData(_) => exit_codes::MALFORMED_DATA,
        NotesError::Crypto(_) | NotesError::Storage(_) => 1,
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    if let Some(notes_err) = err.downcast_ref::<NotesError>() {
        return notes_exit_code(notes_err);
    }
    1
}

/// User-facing hint for a core error, if one helps.
pub fn hint_for(err: &NotesError) -> Option<&'static str> {
    match err {
        NotesError::Index { .. } => Some("Use `notes list` to see note numbers."),
        NotesError::Decryption => Some("Check the password you entered."),
        NotesError::MalformedData(_) => Some("The notes file may have been edited by hand."),
        _ => None,
    }
}
