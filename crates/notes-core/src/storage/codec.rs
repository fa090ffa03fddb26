//! Serialization of a [`NoteStore`] to and from the notes file.

use std::fs;
use std::io;
use std::path::Path;

use super::types::{NoteRecord, NotesDocument, FORMAT_VERSION};
use crate::crypto::Cipher;
use crate::error::{NotesError, Result};
use crate::store::NoteStore;

/// Serialize the store in its current sorted order.
pub fn save(store: &NoteStore) -> Result<Vec<u8>> {
    let document = NotesDocument {
        version: FORMAT_VERSION,
        notes: store.notes().iter().map(NoteRecord::from_note).collect(),
    };
    let mut bytes = serde_json::to_vec_pretty(&document)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Parse serialized notes into a store using `cipher` for later operations.
///
/// Empty or whitespace-only input yields an empty store. Records are
/// re-sorted by date after parsing, so a hand-edited file with
/// out-of-order notes is corrected rather than rejected.
///
/// # Errors
///
/// Returns `NotesError::MalformedData` if the document or any record is
/// structurally invalid. Nothing is partially loaded.
pub fn load(bytes: &[u8], cipher: Cipher) -> Result<NoteStore> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(NoteStore::new(cipher));
    }

    let document: NotesDocument = serde_json::from_slice(bytes)?;
    if document.version != FORMAT_VERSION {
        return Err(NotesError::MalformedData(format!(
            "Unsupported format version {} (expected {})",
            document.version, FORMAT_VERSION
        )));
    }

    let notes = document
        .notes
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            record.into_note().map_err(|err| match err {
                NotesError::MalformedData(message) => {
                    NotesError::MalformedData(format!("Record {}: {}", index + 1, message))
                }
                other => other,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(NoteStore::from_notes(notes, cipher))
}

/// Load the store from `path`.
///
/// A missing or zero-length file is a fresh installation and yields an
/// empty store.
///
/// # Errors
///
/// Returns `NotesError::Storage` if the file exists but cannot be read and
/// `NotesError::MalformedData` if its contents are invalid.
pub fn read_store(path: &Path, cipher: Cipher) -> Result<NoteStore> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no notes file yet");
            return Ok(NoteStore::new(cipher));
        }
        Err(err) => {
            return Err(NotesError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            )))
        }
    };

    let store = load(&bytes, cipher)?;
    tracing::debug!(path = %path.display(), notes = store.len(), "notes loaded");
    Ok(store)
}

/// Atomically replace the notes file at `path` with the serialized store.
pub fn write_store(path: &Path, store: &NoteStore) -> Result<()> {
    let bytes = save(store)?;
    crate::fs::write_atomic(path, &bytes).map_err(|err| {
        NotesError::Storage(format!("Failed to write {}: {}", path.display(), err))
    })?;
    tracing::debug!(path = %path.display(), notes = store.len(), "notes saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{CipherParams, Password};
    use crate::date::parse_date;

    fn cipher() -> Cipher {
        Cipher::new(CipherParams::with_work_factor(10).unwrap())
    }

    #[test]
    fn test_empty_input_yields_empty_store() {
        assert!(load(b"", cipher()).unwrap().is_empty());
        assert!(load(b"  \n\t", cipher()).unwrap().is_empty());
    }

    #[test]
    fn test_save_empty_store() {
        let bytes = save(&NoteStore::new(cipher())).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value, serde_json::json!({"version": 1, "notes": []}));
    }

    #[test]
    fn test_save_writes_sorted_records() {
        let pw = Password::new("codec-password").unwrap();
        let mut store = NoteStore::new(cipher());
        store
            .add(parse_date("01.01.2021").unwrap(), "A", "X", &pw)
            .unwrap();
        store
            .add(parse_date("05.05.2020").unwrap(), "B", "Y", &pw)
            .unwrap();

        let document: NotesDocument = serde_json::from_slice(&save(&store).unwrap()).unwrap();
        let dates: Vec<_> = document.notes.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["05.05.2020", "01.01.2021"]);
    }

    #[test]
    fn test_load_rejects_structural_errors() {
        let cases: [&[u8]; 6] = [
            b"not json",
            b"[]",
            br#"{"version": 2, "notes": []}"#,
            br#"{"version": 1, "notes": [{"date": "01.01.2021", "title": "AQ=="}]}"#,
            br#"{"version": 1, "notes": [{"date": "01.01.2021", "title": "AQ==", "body": "AQ==", "extra": 1}]}"#,
            br#"{"version": 1, "notes": [{"date": "1.1.2021", "title": "AQ==", "body": "AQ=="}]}"#,
        ];
        for case in cases {
            let result = load(case, cipher());
            assert!(
                matches!(result, Err(NotesError::MalformedData(_))),
                "expected malformed data for {}",
                String::from_utf8_lossy(case)
            );
        }
    }

    #[test]
    fn test_load_reports_record_number() {
        let input = br#"{"version": 1, "notes": [
            {"date": "01.01.2021", "title": "AQ==", "body": "AQ=="},
            {"date": "01.01.2021", "title": "%%%", "body": "AQ=="}
        ]}"#;
        let err = load(input, cipher()).unwrap_err();
        assert!(err.to_string().contains("Record 2"));
    }

    #[test]
    fn test_load_resorts_out_of_order_records() {
        let input = br#"{"version": 1, "notes": [
            {"date": "03.01.2021", "title": "Aw==", "body": "AQ=="},
            {"date": "01.01.2021", "title": "AQ==", "body": "AQ=="},
            {"date": "03.01.2021", "title": "BA==", "body": "AQ=="},
            {"date": "02.01.2021", "title": "Ag==", "body": "AQ=="}
        ]}"#;
        let store = load(input, cipher()).unwrap();
        let document: NotesDocument = serde_json::from_slice(&save(&store).unwrap()).unwrap();
        let titles: Vec<_> = document.notes.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["AQ==", "Ag==", "Aw==", "BA=="]);
    }
}
