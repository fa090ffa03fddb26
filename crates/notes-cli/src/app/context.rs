//! Application context for the Notes CLI.
//!
//! Bundles the parsed arguments with the lazily-loaded config file so
//! handlers do not thread both around.

use std::io::IsTerminal;
use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use notes_core::{Cipher, CipherParams};

use crate::cli::Cli;
use crate::config::{default_config_path, default_data_path, read_config, NotesConfig};

use super::password::resolve_password;
use super::session::{load_store, LoadPolicy, Session};

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<NotesConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Whether prompts can be shown.
    pub fn interactive(&self) -> bool {
        std::io::stdin().is_terminal()
    }

    /// Get the config file contents, loading them on first use.
    pub fn config(&self) -> anyhow::Result<&NotesConfig> {
        self.config
            .get_or_try_init(|| read_config(&resolve_config_path()?))
    }

    /// Notes file location: `--file`/`NOTES_FILE`, then config, then the XDG default.
    pub fn data_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = self.cli.file.as_deref().filter(|p| !p.trim().is_empty()) {
            return Ok(PathBuf::from(path));
        }
        if let Some(path) = self.config()?.notes.path.as_deref() {
            return Ok(PathBuf::from(path));
        }
        default_data_path()
    }

    pub fn cipher(&self) -> anyhow::Result<Cipher> {
        let params = match self.config()?.cipher.work_factor {
            Some(work_factor) => CipherParams::with_work_factor(work_factor)?,
            None => CipherParams::default(),
        };
        Ok(Cipher::new(params))
    }

    /// Load the notes file and obtain a password that opens it.
    pub fn open_session(&self, policy: LoadPolicy) -> anyhow::Result<Session> {
        let path = self.data_path()?;
        let store = load_store(&path, self.cipher()?, policy)?;
        let password = resolve_password(self.cli, &store, self.interactive())?;
        tracing::debug!(path = %path.display(), notes = store.len(), "session opened");
        Ok(Session::new(path, store, password))
    }
}

pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("NOTES_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}
