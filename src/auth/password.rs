/**
 * Password Hashing
 *
 * Wraps bcrypt for credential storage and verification. The produced hash
 * is self-describing (cost and salt are embedded), so nothing besides the
 * hash string needs to be stored.
 */

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hash a plaintext password with bcrypt
///
/// Deliberately CPU-expensive; the cost is bcrypt's `DEFAULT_COST`.
/// Fails only on catastrophic internal error (e.g. the entropy source
/// being unavailable).
pub fn hash_password(plaintext: &str) -> Result<String, BcryptError> {
    hash(plaintext, DEFAULT_COST)
}

/// Verify a plaintext password against a stored bcrypt hash
///
/// Fails closed: a malformed hash or any internal error counts as a
/// mismatch. bcrypt compares in constant time, so the outcome does not
/// leak where a mismatch occurred.
pub fn verify_password(password_hash: &str, plaintext: &str) -> bool {
    verify(plaintext, password_hash).unwrap_or(false)
}
