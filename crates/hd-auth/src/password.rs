//! Credential verification with salted Argon2id hashes.
//!
//! Plaintext secrets only ever pass through these two functions and are
//! never stored or logged.
use super::*;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::PasswordHash;
use argon2::PasswordHasher;
use argon2::PasswordVerifier;
use argon2::Version;
use argon2::password_hash::SaltString;

/// Argon2id v19 with default cost. Verification reads parameters from the
/// stored hash, not from here.
fn argon() -> Argon2<'static> {
    Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default())
}

/// Fresh 128-bit salt.
fn salt() -> Result<SaltString, Error> {
    use rand::Rng;
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes);
    Ok(SaltString::encode_b64(&bytes)?)
}

/// Hashes a secret into a PHC string carrying algorithm, cost, and salt.
pub fn hash(secret: &str) -> Result<String, Error> {
    let salt = salt()?;
    let phc = argon().hash_password(secret.as_bytes(), &salt)?;
    Ok(phc.to_string())
}

/// True iff `secret` matches `stored`. A malformed stored hash is a
/// mismatch, logged since it means a corrupt row.
pub fn verify(secret: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(phc) => argon().verify_password(secret.as_bytes(), &phc).is_ok(),
        Err(e) => {
            log::warn!("unparsable credential hash: {}", e);
            false
        }
    }
}
