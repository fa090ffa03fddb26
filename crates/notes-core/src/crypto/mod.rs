//! Cryptographic operations for note fields.
//!
//! Each note title and body is encrypted on its own using the age file
//! format with a passphrase (scrypt) recipient:
//! - **scrypt**: derives the wrapping key from the password and a fresh salt
//! - **ChaCha20-Poly1305**: seals the payload, so tampering is detected
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft of the notes data file
//! - Offline inspection revealing equal plaintexts (ciphertexts never repeat)
//!
//! We do NOT defend against:
//! - Compromised OS / keylogger
//! - Access to the running process memory

pub mod cipher;
pub mod password;

pub use cipher::{decrypt, encrypt, Cipher, CipherParams};
pub use password::Password;
