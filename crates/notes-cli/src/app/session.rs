//! The open notes file: store, password and location.

use std::path::{Path, PathBuf};

use notes_core::storage::{read_store, write_store};
use notes_core::{Cipher, NoteStore, NotesError, Password};

use crate::constants::MALFORMED_SUFFIX;
use crate::ui::{badge, Badge, UiContext};

/// What to do when the notes file cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Fail with `MalformedData`.
    Strict,
    /// Set the bad file aside and start with an empty store.
    Recover,
}

/// Everything an action needs: the store, its file and the password.
pub struct Session {
    path: PathBuf,
    store: NoteStore,
    password: Password,
}

impl Session {
    pub fn new(path: PathBuf, store: NoteStore, password: Password) -> Self {
        Self {
            path,
            store,
            password,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Mutable store together with the password for encrypting operations.
    pub fn parts_mut(&mut self) -> (&mut NoteStore, &Password) {
        (&mut self.store, &self.password)
    }

    /// Write the store back to its file.
    pub fn save(&self) -> anyhow::Result<()> {
        write_store(&self.path, &self.store)?;
        Ok(())
    }
}

/// Read the notes file according to `policy`.
pub fn load_store(path: &Path, cipher: Cipher, policy: LoadPolicy) -> anyhow::Result<NoteStore> {
    match read_store(path, cipher) {
        Ok(store) => Ok(store),
        Err(NotesError::MalformedData(message)) if policy == LoadPolicy::Recover => {
            let backup = set_aside(path)?;
            tracing::debug!(path = %path.display(), %message, "notes file is malformed");
            eprintln!(
                "{}",
                badge(
                    &UiContext::detect(),
                    Badge::Warn,
                    &format!(
                        "Could not read {} ({}). Starting with no notes; the old file was copied to {}.",
                        path.display(),
                        message,
                        backup.display()
                    ),
                )
            );
            Ok(NoteStore::new(cipher))
        }
        Err(err) => Err(err.into()),
    }
}

/// Copy an unreadable notes file to `<name>.malformed` before it is overwritten.
fn set_aside(path: &Path) -> anyhow::Result<PathBuf> {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(format!(".{}", MALFORMED_SUFFIX));
    let backup = path.with_file_name(name);
    std::fs::copy(path, &backup).map_err(|e| {
        anyhow::anyhow!(
            "Failed to copy malformed notes file to {}: {}",
            backup.display(),
            e
        )
    })?;
    Ok(backup)
}
