//! Password Hasher Gateway

use crate::shared::errors::CredentialError;

/// Salted one-way password hashing
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password with a fresh salt
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::Hashing` if the hash cannot be computed.
    fn hash(&self, password: &str) -> Result<String, CredentialError>;

    /// Check a plaintext password against a stored hash
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::Hashing` if the stored hash is malformed.
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, CredentialError>;
}
