/**
 * Password Hashing
 *
 * This module turns plaintext passwords into salted Argon2id hashes (PHC string
 * format) and checks passwords against stored hashes.
 *
 * # Security
 *
 * - Argon2id with the crate's default parameters (19 MiB, 2 passes, 1 lane)
 * - A fresh random salt per hash, so hashing the same password twice yields
 *   two different strings that both verify
 * - A wrong password is `Ok(false)`; only an unreadable stored hash is an error
 */

use argon2::password_hash::{rand_core::OsRng, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher as _, PasswordVerifier as _};
use thiserror::Error;

/// Hashing a new password failed
#[derive(Debug, Error)]
#[error("failed to hash password: {0}")]
pub struct HashError(argon2::password_hash::Error);

/// A stored hash could not be parsed or uses parameters we cannot verify
///
/// This points at corrupted storage, never at a wrong password.
#[derive(Debug, Error)]
#[error("stored password hash is malformed: {0}")]
pub struct HashFormatError(argon2::password_hash::Error);

/// Argon2id password hasher
#[derive(Clone, Default)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash a plaintext password with a fresh random salt
    ///
    /// # Returns
    /// PHC-formatted hash string, safe to store
    pub fn hash(&self, password: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(HashError)
    }

    /// Check a plaintext password against a stored hash
    ///
    /// # Returns
    /// `Ok(true)` if `password` produced `hash`, `Ok(false)` otherwise
    ///
    /// # Errors
    /// `HashFormatError` if `hash` is not a usable PHC string
    pub fn verify(&self, hash: &str, password: &str) -> Result<bool, HashFormatError> {
        let parsed = PasswordHash::new(hash).map_err(HashFormatError)?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(HashFormatError(e)),
        }
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher").field("algorithm", &"argon2id").finish()
    }
}
