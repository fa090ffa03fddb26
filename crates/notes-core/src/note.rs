//! The note entity.
//!
//! A note never holds plaintext: its title and body are ciphertexts produced
//! by [`Cipher::encrypt`] and only turned back into text on demand.

use std::fmt;

use chrono::NaiveDate;
use zeroize::Zeroize;

use crate::crypto::{Cipher, Password};
use crate::date::check_date;
use crate::error::{NotesError, Result};

/// One of the two encrypted fields of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteField {
    Title,
    Body,
}

impl fmt::Display for NoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteField::Title => write!(f, "title"),
            NoteField::Body => write!(f, "body"),
        }
    }
}

/// A dated note with an encrypted title and body.
#[derive(Debug, PartialEq, Eq)]
pub struct Note {
    date: NaiveDate,
    title: Vec<u8>,
    body: Vec<u8>,
}

impl Note {
    /// Encrypt `title` and `body` and build a complete note.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::InvalidInput` if either plaintext is empty or the
    /// year does not fit four digits, and
    /// `NotesError::Crypto` if encryption fails.
    pub fn seal(
        date: NaiveDate,
        title: &str,
        body: &str,
        cipher: &Cipher,
        password: &Password,
    ) -> Result<Self> {
        check_date(date)?;
        let title = seal_field(NoteField::Title, title, cipher, password)?;
        let body = seal_field(NoteField::Body, body, cipher, password)?;
        Ok(Self { date, title, body })
    }

    /// Rebuild a note from persisted ciphertexts.
    pub(crate) fn from_ciphertext(date: NaiveDate, title: Vec<u8>, body: Vec<u8>) -> Result<Self> {
        if title.is_empty() || body.is_empty() {
            return Err(NotesError::MalformedData(
                "Note ciphertext cannot be empty".to_string(),
            ));
        }
        Ok(Self { date, title, body })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn ciphertext(&self, field: NoteField) -> &[u8] {
        match field {
            NoteField::Title => &self.title,
            NoteField::Body => &self.body,
        }
    }

    pub(crate) fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Replace one field. The new ciphertext is fully built before the old
    /// one is dropped, so a failure leaves the note untouched.
    pub(crate) fn reseal(
        &mut self,
        field: NoteField,
        plaintext: &str,
        cipher: &Cipher,
        password: &Password,
    ) -> Result<()> {
        let sealed = seal_field(field, plaintext, cipher, password)?;
        match field {
            NoteField::Title => self.title = sealed,
            NoteField::Body => self.body = sealed,
        }
        Ok(())
    }

    /// Decrypt one field to text.
    pub fn open(&self, field: NoteField, cipher: &Cipher, password: &Password) -> Result<String> {
        let plaintext = cipher.decrypt(self.ciphertext(field), password)?;
        String::from_utf8(plaintext).map_err(|err| {
            err.into_bytes().zeroize();
            NotesError::Decryption
        })
    }
}

fn seal_field(
    field: NoteField,
    plaintext: &str,
    cipher: &Cipher,
    password: &Password,
) -> Result<Vec<u8>> {
    if plaintext.is_empty() {
        return Err(NotesError::InvalidInput(format!(
            "Note {} cannot be empty",
            field
        )));
    }
    cipher.encrypt(plaintext.as_bytes(), password)
}
