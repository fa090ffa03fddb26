//! Password resolution with retry logic.

use notes_core::{NoteStore, NotesError, Password};

use crate::cli::Cli;
use crate::constants::MAX_PASSWORD_ATTEMPTS;
use crate::errors::CliError;
use crate::ui::prompt;

/// Obtain a password that opens `store`.
///
/// `--password`/`NOTES_PASSWORD` is checked once; otherwise the user is
/// prompted up to `MAX_PASSWORD_ATTEMPTS` times.
pub fn resolve_password(
    cli: &Cli,
    store: &NoteStore,
    interactive: bool,
) -> anyhow::Result<Password> {
    if let Some(value) = cli.password.as_deref().filter(|v| !v.is_empty()) {
        let password = Password::new(value)?;
        return match store.check_password(&password) {
            Ok(()) => Ok(password),
            Err(NotesError::Decryption) => Err(CliError::auth_failed_with_hint(
                "Incorrect password",
                "Check --password or NOTES_PASSWORD.",
            )
            .into()),
            Err(err) => Err(err.into()),
        };
    }

    if !interactive {
        return Err(CliError::invalid_input(
            "No password provided and no TTY available. Use --password or set NOTES_PASSWORD.",
        )
        .into());
    }

    for attempt in 1..=MAX_PASSWORD_ATTEMPTS {
        let password = Password::new(prompt::password("Enter password")?)?;
        match store.check_password(&password) {
            Ok(()) => return Ok(password),
            Err(NotesError::Decryption) => {
                tracing::debug!(attempt, "password rejected");
                if attempt < MAX_PASSWORD_ATTEMPTS {
                    eprintln!("Incorrect password, try again.");
                }
            }
            Err(err) => return Err(err.into()),
        }
    }

    Err(CliError::auth_failed_with_hint(
        "Incorrect password",
        format!("Gave up after {} attempts.", MAX_PASSWORD_ATTEMPTS),
    )
    .into())
}
