use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use error_location::ErrorLocation;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const WEAK_PASSWORD: &str = "Password should be at least 6 characters";

#[track_caller]
pub fn validate_password(password: &str) -> AuthErrorResult<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::WeakPassword {
            message: WEAK_PASSWORD.to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

/// Argon2id hash in PHC string format
#[track_caller]
pub fn hash_password(password: &str) -> AuthErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// `Ok(false)` on mismatch; `Err` only when the stored hash is unreadable
#[track_caller]
pub fn verify_password(password: &str, stored_hash: &str) -> AuthErrorResult<bool> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| AuthError::PasswordHash {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
