//! Password hashing with bcrypt.

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hash a password for storage.
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Verify a password against a stored hash.
///
/// A malformed stored hash counts as a failed verification, not an error.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    verify(password, password_hash).unwrap_or(false)
}
