//! Token Service Gateway
//!
//! Issues and verifies signed, time-bound access tokens.

use crate::domain::models::principal::Principal;
use crate::shared::errors::CredentialError;

/// A freshly issued access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub token: String,
    pub expires_in_secs: i64,
}

#[cfg_attr(test, mockall::automock)]
pub trait TokenService: Send + Sync {
    /// Issue a token for an authenticated principal
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::TokenEncoding` if signing fails.
    fn issue(&self, principal: &Principal) -> Result<AccessToken, CredentialError>;

    /// Verify a token and recover its principal
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::TokenExpired` or `CredentialError::TokenInvalid`.
    fn verify(&self, token: &str) -> Result<Principal, CredentialError>;
}
