//! In-memory handling of the note password.
//!
//! The password is supplied once per process and never written anywhere.
//! It is held in a [`SecretString`] so the backing buffer is zeroized on drop.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{NotesError, Result};

/// The process-wide secret every note field is encrypted under.
pub struct Password(SecretString);

impl Password {
    /// Wrap a password, rejecting the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use notes_core::crypto::Password;
    ///
    /// assert!(Password::new("hunter2").is_ok());
    /// assert!(Password::new("").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(NotesError::InvalidInput(
                "Password cannot be empty".to_string(),
            ));
        }
        Ok(Self(SecretString::from(value)))
    }

    /// Borrow the password text.
    ///
    /// Avoid storing or logging this value.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Fresh secret handle for handing to the age library.
    pub(crate) fn to_secret(&self) -> SecretString {
        SecretString::from(self.expose().to_owned())
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}
