//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use super::mode::OutputMode;
use crate::errors::CliError;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode table borders are enabled
    pub unicode: bool,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from environment and output flags.
    pub fn from_env(json_flag: bool, format_flag: Option<&str>) -> Result<Self, CliError> {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        Ok(Self {
            color: is_tty && !no_color_env && !term_is_dumb,
            unicode: !term_is_dumb,
            mode: OutputMode::resolve(json_flag, format_flag, is_tty, term_is_dumb)?,
        })
    }

    /// Context for commands without output flags (and the interactive menu).
    pub fn detect() -> Self {
        Self::from_env(false, None).unwrap_or_else(|_| Self::plain())
    }

    /// Uncolored plain-text context.
    pub fn plain() -> Self {
        Self {
            color: false,
            unicode: false,
            mode: OutputMode::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_from_flag() {
        let ctx = UiContext::from_env(true, None).unwrap();
        assert_eq!(ctx.mode, OutputMode::Json);
    }

    #[test]
    fn test_plain_context_has_no_color() {
        let ctx = UiContext::plain();
        assert!(!ctx.color);
        assert_eq!(ctx.mode, OutputMode::Plain);
    }
}
