use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;

use crate::utils::token::new_token;

/// Prefix of a stored password that can never match any input.
pub const UNUSABLE_PASSWORD_PREFIX: char = '!';

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Constant-time check of `password` against a stored PHC string.
/// Unusable or unparsable hashes never verify.
pub fn verify_password(password: &str, hash: &str) -> bool {
    if !is_usable(hash) {
        return false;
    }
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

pub fn unusable_password() -> String {
    format!("{UNUSABLE_PASSWORD_PREFIX}{}", new_token())
}

pub fn is_usable(hash: &str) -> bool {
    !hash.starts_with(UNUSABLE_PASSWORD_PREFIX)
}

/// Burns roughly the same time as a real check, for lookups that found no user.
pub fn dummy_verify(password: &str) {
    let _ = hash_password(password);
}
