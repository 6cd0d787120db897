//! Argon2 password hashing.

use argon2::{Argon2, password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString}};
use rand::rngs::OsRng;

use super::errors::AuthError;

/// Hash a plaintext password into a PHC string.
///
/// # Examples
/// ```
/// use service::auth::password::{hash_password, verify_password};
/// let hash = hash_password("hunter2-long").unwrap();
/// assert!(verify_password("hunter2-long", &hash));
/// assert!(!verify_password("hunter3-long", &hash));
/// ```
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AuthError::HashError(e.to_string()))
}

/// `false` for a mismatch and for a hash that does not parse.
pub fn verify_password(password: &str, password_hashed: &str) -> bool {
    match PasswordHash::new(password_hashed) {
        Ok(parsed) => Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok(),
        Err(_) => false,
    }
}
