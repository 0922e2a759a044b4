//! Argon2 Password Hasher
//!
//! Implements the PasswordHasher gateway with Argon2id and PHC-encoded hashes.

use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString};
use argon2::Argon2;
use rand::rngs::OsRng;

use crate::domain::gateways::PasswordHasher;
use crate::shared::errors::CredentialError;

/// Argon2id with the crate's recommended default parameters
#[derive(Default)]
pub struct Argon2PasswordHasher {
    argon: Argon2<'static>,
}

impl Argon2PasswordHasher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| CredentialError::Hashing(e.to_string()))
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, CredentialError> {
        let parsed = PasswordHash::new(password_hash).map_err(|e| CredentialError::Hashing(e.to_string()))?;

        Ok(self.argon.verify_password(password.as_bytes(), &parsed).is_ok())
    }
}
