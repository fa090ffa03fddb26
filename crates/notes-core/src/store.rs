//! Ordered, encrypted note collection.
//!
//! Notes are kept ascending by date. Sorting is stable, so notes sharing a
//! date stay in insertion order. A position is a zero-based index into the
//! current sorted sequence and is recomputed after every insert or date
//! change; it is a view index, not an identity.

use chrono::NaiveDate;

use crate::crypto::{Cipher, Password};
use crate::date::check_date;
use crate::error::{NotesError, Result};
use crate::note::{Note, NoteField};

/// A fully decrypted note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteView {
    pub date: NaiveDate,
    pub title: String,
    pub body: String,
}

/// One line of a listing: the note's position, date and decrypted title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSummary {
    pub position: usize,
    pub date: NaiveDate,
    pub title: String,
}

/// In-memory note collection sorted by date.
///
/// The store owns the cipher configuration but never the password; every
/// operation that encrypts or decrypts takes the password explicitly.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
    cipher: Cipher,
}

impl NoteStore {
    pub fn new(cipher: Cipher) -> Self {
        Self {
            notes: Vec::new(),
            cipher,
        }
    }

    /// Build a store from already-encrypted notes, restoring date order.
    pub(crate) fn from_notes(notes: Vec<Note>, cipher: Cipher) -> Self {
        let mut store = Self { notes, cipher };
        store.sort();
        store
    }

    pub fn cipher(&self) -> &Cipher {
        &self.cipher
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// The encrypted notes in sorted order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Translate a one-based note number, as shown to users, into a position.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::Index` for `0` and for numbers past the end.
    /// Number `0` is the position before the first note and is reported
    /// with `position` set to `usize::MAX`.
    pub fn position_for_number(&self, number: usize) -> Result<usize> {
        let position = number.checked_sub(1).ok_or(NotesError::Index {
            position: usize::MAX,
            len: self.notes.len(),
        })?;
        self.check_position(position)?;
        Ok(position)
    }

    /// Encrypt and insert a new note, returning the position it landed at.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::InvalidInput` for an empty title or body and
    /// `NotesError::Crypto` if encryption fails. The store is unchanged on error.
    pub fn add(
        &mut self,
        date: NaiveDate,
        title: &str,
        body: &str,
        password: &Password,
    ) -> Result<usize> {
        let note = Note::seal(date, title, body, &self.cipher, password)?;
        self.notes.push(note);
        self.sort();

        // Stable sort leaves the new note last among its date.
        let position = self.notes.partition_point(|n| n.date() <= date) - 1;
        tracing::debug!(position, len = self.notes.len(), "note added");
        Ok(position)
    }

    /// Decrypt the note at `position`.
    pub fn get(&self, position: usize, password: &Password) -> Result<NoteView> {
        let note = self.note_at(position)?;
        Ok(NoteView {
            date: note.date(),
            title: note.open(NoteField::Title, &self.cipher, password)?,
            body: note.open(NoteField::Body, &self.cipher, password)?,
        })
    }

    /// Change a note's date and re-sort, returning the note's new position.
    pub fn update_date(&mut self, position: usize, date: NaiveDate) -> Result<usize> {
        self.check_position(position)?;
        check_date(date)?;

        let new_position = self
            .notes
            .iter()
            .enumerate()
            .filter(|(i, n)| {
                *i != position && (n.date() < date || (n.date() == date && *i < position))
            })
            .count();

        self.notes[position].set_date(date);
        self.sort();
        tracing::debug!(from = position, to = new_position, "note date updated");
        Ok(new_position)
    }

    /// Replace the title of the note at `position`. Does not re-sort.
    pub fn update_title(&mut self, position: usize, title: &str, password: &Password) -> Result<()> {
        self.update_field(position, NoteField::Title, title, password)
    }

    /// Replace the body of the note at `position`. Does not re-sort.
    pub fn update_body(&mut self, position: usize, body: &str, password: &Password) -> Result<()> {
        self.update_field(position, NoteField::Body, body, password)
    }

    /// Replace one encrypted field of the note at `position`.
    pub fn update_field(
        &mut self,
        position: usize,
        field: NoteField,
        plaintext: &str,
        password: &Password,
    ) -> Result<()> {
        self.check_position(position)?;
        let cipher = self.cipher;
        self.notes[position].reseal(field, plaintext, &cipher, password)?;
        tracing::debug!(position, %field, "note field updated");
        Ok(())
    }

    /// Delete the note at `position`; later notes shift down by one.
    pub fn remove(&mut self, position: usize) -> Result<()> {
        self.check_position(position)?;
        self.notes.remove(position);
        tracing::debug!(position, len = self.notes.len(), "note removed");
        Ok(())
    }

    /// Every note's position, date and decrypted title. Bodies are not touched.
    pub fn list(&self, password: &Password) -> Result<Vec<NoteSummary>> {
        self.notes
            .iter()
            .enumerate()
            .map(|(position, note)| {
                Ok(NoteSummary {
                    position,
                    date: note.date(),
                    title: note.open(NoteField::Title, &self.cipher, password)?,
                })
            })
            .collect()
    }

    /// Confirm `password` opens this store by decrypting the first title.
    ///
    /// An empty store accepts any password.
    pub fn check_password(&self, password: &Password) -> Result<()> {
        match self.notes.first() {
            Some(note) => note
                .open(NoteField::Title, &self.cipher, password)
                .map(|_| ()),
            None => Ok(()),
        }
    }

    fn note_at(&self, position: usize) -> Result<&Note> {
        self.notes.get(position).ok_or(NotesError::Index {
            position,
            len: self.notes.len(),
        })
    }

    fn check_position(&self, position: usize) -> Result<()> {
        self.note_at(position).map(|_| ())
    }

    fn sort(&mut self) {
        // `sort_by_key` is stable.
        self.notes.sort_by_key(Note::date);
    }
}
