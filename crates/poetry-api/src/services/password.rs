//! Password hashing
//!
//! New hashes are Argon2id with a random salt. Hashes starting with `$2`
//! were written by the previous deployment with bcrypt (cost 10) and are
//! still accepted for verification.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use super::ServiceError;

/// Hash a plaintext password for storage
pub fn hash_password(password: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ServiceError::internal(format!("Failed to hash password: {}", e)))
}

/// Check a plaintext password against a stored hash
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, ServiceError> {
    if stored_hash.starts_with("$2") {
        return bcrypt::verify(password, stored_hash)
            .map_err(|e| ServiceError::internal(format!("Failed to verify bcrypt hash: {}", e)));
    }

    let parsed_hash = PasswordHash::new(stored_hash)
        .map_err(|e| ServiceError::internal(format!("Failed to parse password hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
