//! Password hashing with Argon2id.
//!
//! Stored passwords are PHC strings (`$argon2id$v=19$...`) carrying their own
//! salt and parameters. Stores written before hashing was introduced may
//! still hold plaintext; [`is_password_hash`] tells the two apart so that the
//! store can upgrade such rows on the next successful login.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Failed to hash password: {0}")]
    HashError(String),

    #[error("Failed to verify password: {0}")]
    VerifyError(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

const PHC_PREFIX: &str = "$argon2";

/// Hashes a password with a fresh random salt and returns the PHC string.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::HashError(e.to_string()))
}

/// Verifies a password against a stored PHC hash.
///
/// Returns `Ok(false)` for a wrong password and an error only when the
/// stored value cannot be parsed or verification itself fails.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHashFormat)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(e.to_string())),
    }
}

/// True when the stored value is an Argon2 PHC string rather than legacy plaintext.
///
/// The prefix alone is not enough: a plaintext password may start with it.
pub fn is_password_hash(stored: &str) -> bool {
    stored.starts_with(PHC_PREFIX) && PasswordHash::new(stored).is_ok()
}
