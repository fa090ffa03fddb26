//! Output mode routing logic.

use crate::errors::CliError;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON
    Json,
    /// Space-separated lines, stable for scripts
    #[default]
    Plain,
    /// Tables and colors (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and terminal state.
    ///
    /// `--json` wins outright; `--format plain` and `TERM=dumb` force plain;
    /// otherwise pretty on a TTY and plain elsewhere.
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Result<Self, CliError> {
        if json_flag {
            if format_flag.is_some() {
                return Err(CliError::invalid_input("--format cannot be used with --json"));
            }
            return Ok(Self::Json);
        }

        match format_flag {
            None | Some("table") => {}
            Some("plain") => return Ok(Self::Plain),
            Some(other) => {
                return Err(CliError::invalid_input(format!(
                    "Unknown format \"{}\" (expected table or plain)",
                    other
                )))
            }
        }

        if is_tty && !term_is_dumb {
            Ok(Self::Pretty)
        } else {
            Ok(Self::Plain)
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
