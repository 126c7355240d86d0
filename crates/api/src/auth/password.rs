//! One-way hashing for member passwords.
//!
//! Stored values are Argon2id PHC strings, so the salt and cost parameters
//! travel with the hash and a stored value verifies without extra columns.
//! Each call draws a fresh salt from [`OsRng`]; nothing else is kept between
//! calls.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Failure while hashing, or while parsing a stored hash.
pub type PasswordError = argon2::password_hash::Error;

/// Hash a member's plaintext password for storage.
pub fn hash_password(plaintext: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

/// Check `plaintext` against a stored PHC string.
///
/// A mismatch is `Ok(false)`; only a malformed stored value is an error.
pub fn verify_password(plaintext: &str, stored: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(stored)?;
    match Argon2::default().verify_password(plaintext.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(PasswordError::Password) => Ok(false),
        Err(other) => Err(other),
    }
}
