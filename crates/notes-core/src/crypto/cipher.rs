//! Field-level encryption using age passphrase recipients.
//!
//! Every call to [`Cipher::encrypt`] produces a complete age file: the header
//! carries a fresh random scrypt salt and the wrapped file key, and the
//! payload is sealed with ChaCha20-Poly1305 under a fresh nonce. Decryption
//! therefore needs nothing beyond the ciphertext and the password, and any
//! wrong password or flipped byte is detected by the header MAC or the
//! payload tag instead of yielding garbage.

use std::io::{Read, Write};
use std::iter;

use age::scrypt;

use super::password::Password;
use crate::error::{NotesError, Result};

/// Default scrypt work factor (log2 of N) for encryption.
///
/// Each note stores two independently encrypted fields and a listing
/// decrypts every title, so this is tuned well below age's interactive
/// whole-file default.
pub const DEFAULT_WORK_FACTOR: u8 = 15;

/// Highest work factor accepted when decrypting.
pub const DEFAULT_MAX_WORK_FACTOR: u8 = 20;

/// Upper bound accepted by [`CipherParams::with_work_factor`].
const WORK_FACTOR_LIMIT: u8 = 30;

/// Tunable scrypt parameters for a [`Cipher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherParams {
    work_factor: u8,
    max_work_factor: u8,
}

impl CipherParams {
    /// Use `work_factor` for encryption and accept up to
    /// `max(work_factor, DEFAULT_MAX_WORK_FACTOR)` on decryption.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::InvalidInput` if `work_factor` is zero or above 30.
    pub fn with_work_factor(work_factor: u8) -> Result<Self> {
        if work_factor == 0 || work_factor > WORK_FACTOR_LIMIT {
            return Err(NotesError::InvalidInput(format!(
                "Work factor must be between 1 and {} (got {})",
                WORK_FACTOR_LIMIT, work_factor
            )));
        }
        Ok(Self {
            work_factor,
            max_work_factor: work_factor.max(DEFAULT_MAX_WORK_FACTOR),
        })
    }

    pub fn work_factor(&self) -> u8 {
        self.work_factor
    }

    pub fn max_work_factor(&self) -> u8 {
        self.max_work_factor
    }
}

impl Default for CipherParams {
    fn default() -> Self {
        Self {
            work_factor: DEFAULT_WORK_FACTOR,
            max_work_factor: DEFAULT_MAX_WORK_FACTOR,
        }
    }
}

/// Password-based symmetric cipher for note fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cipher {
    params: CipherParams,
}

impl Cipher {
    pub fn new(params: CipherParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> CipherParams {
        self.params
    }

    /// Encrypt `plaintext` under `password`.
    ///
    /// Output is non-deterministic: two calls with identical inputs never
    /// return the same bytes.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::Crypto` if the age library fails.
    pub fn encrypt(&self, plaintext: &[u8], password: &Password) -> Result<Vec<u8>> {
        let mut recipient = scrypt::Recipient::new(password.to_secret());
        recipient.set_work_factor(self.params.work_factor);

        let encryptor =
            age::Encryptor::with_recipients(iter::once(&recipient as &dyn age::Recipient))
                .map_err(|e| NotesError::Crypto(format!("Failed to create encryptor: {}", e)))?;

        let mut encrypted = Vec::new();
        let mut writer = encryptor
            .wrap_output(&mut encrypted)
            .map_err(|e| NotesError::Crypto(format!("Failed to create encryptor: {}", e)))?;

        writer
            .write_all(plaintext)
            .map_err(|e| NotesError::Crypto(format!("Encryption write failed: {}", e)))?;

        writer
            .finish()
            .map_err(|e| NotesError::Crypto(format!("Encryption finish failed: {}", e)))?;

        tracing::trace!(
            plaintext_len = plaintext.len(),
            ciphertext_len = encrypted.len(),
            "encrypted field"
        );
        Ok(encrypted)
    }

    /// Decrypt bytes produced by [`Cipher::encrypt`].
    ///
    /// # Errors
    ///
    /// Returns `NotesError::Decryption` if the password is wrong or the
    /// ciphertext was altered, and `NotesError::Crypto` if the ciphertext
    /// demands more scrypt work than this cipher accepts.
    pub fn decrypt(&self, ciphertext: &[u8], password: &Password) -> Result<Vec<u8>> {
        let decryptor = age::Decryptor::new(ciphertext).map_err(map_decrypt_error)?;

        let mut identity = scrypt::Identity::new(password.to_secret());
        identity.set_max_work_factor(self.params.max_work_factor);

        let mut reader = decryptor
            .decrypt(iter::once(&identity as &dyn age::Identity))
            .map_err(map_decrypt_error)?;

        let mut decrypted = Vec::new();
        reader.read_to_end(&mut decrypted).map_err(|e| {
            tracing::debug!(error = %e, "payload authentication failed");
            NotesError::Decryption
        })?;

        Ok(decrypted)
    }
}

fn map_decrypt_error(err: age::DecryptError) -> NotesError {
    match err {
        age::DecryptError::NoMatchingKeys
        | age::DecryptError::DecryptionFailed
        | age::DecryptError::KeyDecryptionFailed
        | age::DecryptError::InvalidMac
        | age::DecryptError::InvalidHeader
        | age::DecryptError::UnknownFormat
        | age::DecryptError::Io(_) => NotesError::Decryption,
        other => NotesError::Crypto(format!("Decryption failed: {}", other)),
    }
}

/// Encrypt with default parameters.
///
/// # Examples
///
/// ```
/// use notes_core::crypto::{decrypt, encrypt, Password};
///
/// let password = Password::new("my-secure-password").unwrap();
/// let encrypted = encrypt(b"secret data", &password).unwrap();
/// assert_ne!(encrypted.as_slice(), b"secret data");
/// assert_eq!(decrypt(&encrypted, &password).unwrap(), b"secret data");
/// ```
pub fn encrypt(plaintext: &[u8], password: &Password) -> Result<Vec<u8>> {
    Cipher::default().encrypt(plaintext, password)
}

/// Decrypt with default parameters.
pub fn decrypt(ciphertext: &[u8], password: &Password) -> Result<Vec<u8>> {
    Cipher::default().decrypt(ciphertext, password)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_cipher() -> Cipher {
        Cipher::new(CipherParams::with_work_factor(10).unwrap())
    }

    fn password(value: &str) -> Password {
        Password::new(value).unwrap()
    }

    #[test]
    fn test_encrypt_decrypt_round_trip() {
        let cipher = fast_cipher();
        let pw = password("test-password-123");
        let plaintext = b"Hello, World! This is secret data.";

        let encrypted = cipher.encrypt(plaintext, &pw).unwrap();
        let decrypted = cipher.decrypt(&encrypted, &pw).unwrap();

        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_round_trip_non_utf8_bytes() {
        let cipher = fast_cipher();
        let pw = password("test-password-123");
        let plaintext: Vec<u8> = (0u8..=255).collect();

        let encrypted = cipher.encrypt(&plaintext, &pw).unwrap();
        assert_eq!(cipher.decrypt(&encrypted, &pw).unwrap(), plaintext);
    }

    #[test]
    fn test_empty_plaintext_round_trip() {
        let cipher = fast_cipher();
        let pw = password("test-password-123");

        let encrypted = cipher.encrypt(b"", &pw).unwrap();
        assert!(!encrypted.is_empty());
        assert!(cipher.decrypt(&encrypted, &pw).unwrap().is_empty());
    }

    #[test]
    fn test_encryption_is_non_deterministic() {
        let cipher = fast_cipher();
        let pw = password("test-password-123");

        let first = cipher.encrypt(b"same plaintext", &pw).unwrap();
        let second = cipher.encrypt(b"same plaintext", &pw).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_wrong_password_fails_decryption() {
        let cipher = fast_cipher();
        let encrypted = cipher
            .encrypt(b"secret data", &password("correct-password"))
            .unwrap();

        let result = cipher.decrypt(&encrypted, &password("wrong-password"));
        assert!(matches!(result, Err(NotesError::Decryption)));
    }

    #[test]
    fn test_tampered_payload_fails_decryption() {
        let cipher = fast_cipher();
        let pw = password("test-password-123");
        let mut encrypted = cipher.encrypt(b"secret data", &pw).unwrap();

        let last = encrypted.len() - 1;
        encrypted[last] ^= 0xFF;

        let result = cipher.decrypt(&encrypted, &pw);
        assert!(matches!(result, Err(NotesError::Decryption)));
    }

    #[test]
    fn test_garbage_input_fails_decryption() {
        let cipher = fast_cipher();
        let result = cipher.decrypt(b"definitely not age", &password("pw"));
        assert!(matches!(result, Err(NotesError::Decryption)));
    }

    #[test]
    fn test_excessive_work_factor_rejected() {
        let pw = password("test-password-123");
        let strong = Cipher::new(CipherParams::with_work_factor(12).unwrap());
        let encrypted = strong.encrypt(b"secret", &pw).unwrap();

        let weak = Cipher::new(CipherParams {
            work_factor: 10,
            max_work_factor: 10,
        });
        let result = weak.decrypt(&encrypted, &pw);
        assert!(matches!(result, Err(NotesError::Crypto(_))));
    }

    #[test]
    fn test_work_factor_bounds() {
        assert!(CipherParams::with_work_factor(0).is_err());
        assert!(CipherParams::with_work_factor(31).is_err());

        let params = CipherParams::with_work_factor(22).unwrap();
        assert_eq!(params.work_factor(), 22);
        assert_eq!(params.max_work_factor(), 22);
    }
}
