//! Persistence for the note store.
//!
//! The store is written as a single JSON document. Ciphertexts are stored
//! exactly as the cipher produced them (base64 encoded), so nothing on disk
//! is ever plaintext. Writes go through a temp file and an atomic rename.

pub mod codec;
pub mod types;

pub use codec::{load, read_store, save, write_store};
pub use types::{NoteRecord, NotesDocument, FORMAT_VERSION};
