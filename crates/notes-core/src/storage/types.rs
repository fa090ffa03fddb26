//! On-disk data model for the notes file.
//!
//! The file is a JSON document; each record carries the note date in
//! `dd.mm.yyyy` form and both ciphertexts in standard base64.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::date::{format_date, parse_date};
use crate::error::{NotesError, Result};
use crate::note::{Note, NoteField};

/// Current file format version.
pub const FORMAT_VERSION: u32 = 1;

/// Top-level document written to the notes file.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotesDocument {
    /// Format version (currently 1)
    pub version: u32,

    /// Notes in sorted order
    pub notes: Vec<NoteRecord>,
}

/// A single persisted note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoteRecord {
    /// Note date (`dd.mm.yyyy`)
    pub date: String,

    /// Title ciphertext (base64)
    pub title: String,

    /// Body ciphertext (base64)
    pub body: String,
}

impl NoteRecord {
    pub fn from_note(note: &Note) -> Self {
        Self {
            date: format_date(note.date()),
            title: STANDARD.encode(note.ciphertext(NoteField::Title)),
            body: STANDARD.encode(note.ciphertext(NoteField::Body)),
        }
    }

    pub fn into_note(self) -> Result<Note> {
        let date = parse_date(&self.date)
            .map_err(|_| NotesError::MalformedData(format!("Invalid date: {:?}", self.date)))?;
        let title = decode_field(NoteField::Title, &self.title)?;
        let body = decode_field(NoteField::Body, &self.body)?;
        Note::from_ciphertext(date, title, body)
    }
}

fn decode_field(field: NoteField, encoded: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(encoded)
        .map_err(|e| NotesError::MalformedData(format!("Invalid {} encoding: {}", field, e)))
}
