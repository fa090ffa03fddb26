//! # Notes Core
//!
//! Core library for Notes - a personal note store where every note title and
//! body is encrypted at rest under a single password.
//!
//! This crate provides the domain logic independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **crypto**: password handling and per-field age encryption
//! - **note**: the note entity (date + two ciphertexts)
//! - **store**: date-ordered note collection addressed by position
//! - **storage**: JSON persistence with atomic file replacement
//! - **date**: the `dd.mm.yyyy` date representation

pub mod crypto;
pub mod date;
pub mod error;
pub mod fs;
pub mod note;
pub mod storage;
pub mod store;

pub use crypto::{Cipher, CipherParams, Password};
pub use error::{NotesError, Result};
pub use note::{Note, NoteField};
pub use store::{NoteStore, NoteSummary, NoteView};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
