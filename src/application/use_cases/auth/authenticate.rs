//! Authenticate Use Case
//!
//! Exchanges a username/password pair for a signed access token.

use std::sync::Arc;

use crate::domain::gateways::{AccessToken, CredentialRepository, PasswordHasher, TokenService};
use crate::domain::models::password::Password;
use crate::domain::models::principal::Credential;
use crate::shared::errors::UseCaseError;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Argon2id hash of no real password, with the default cost parameters
///
/// Verified when the username matches no account so unknown and known
/// usernames take the same time to reject.
const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Use case for issuing access tokens
pub struct AuthenticateUseCase {
    credential_repository: Arc<dyn CredentialRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_service: Arc<dyn TokenService>,
    bootstrap_admin: Option<Credential>,
}

impl AuthenticateUseCase {
    /// Create a new AuthenticateUseCase
    ///
    /// `bootstrap_admin` is checked before the stored accounts.
    #[must_use]
    pub fn new(
        credential_repository: Arc<dyn CredentialRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_service: Arc<dyn TokenService>,
        bootstrap_admin: Option<Credential>,
    ) -> Self {
        Self {
            credential_repository,
            password_hasher,
            token_service,
            bootstrap_admin,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if either input is empty.
    /// Returns `UseCaseError::Unauthorized` if no credential matches.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, username: &str, password: &Password) -> Result<AccessToken, UseCaseError> {
        if username.is_empty() || password.is_empty() {
            return Err(UseCaseError::Validation(vec![
                "credentials: username and password are required".to_string(),
            ]));
        }

        tracing::info!(username = %username, "Authenticating");

        let mut candidates: Vec<Credential> = self
            .bootstrap_admin
            .iter()
            .filter(|admin| admin.principal.email == username)
            .cloned()
            .collect();
        candidates.extend(self.credential_repository.find_by_email(username).await?);

        if candidates.is_empty() {
            let _ = self.password_hasher.verify(password.expose(), DUMMY_PASSWORD_HASH);
        }

        for candidate in candidates {
            if self
                .password_hasher
                .verify(password.expose(), &candidate.password_hash)?
            {
                let token = self.token_service.issue(&candidate.principal)?;
                tracing::info!(
                    subject = %candidate.principal.subject,
                    role = %candidate.principal.role,
                    "Access token issued"
                );
                return Ok(token);
            }
        }

        tracing::warn!(username = %username, "Authentication failed");
        Err(UseCaseError::Unauthorized(INVALID_CREDENTIALS.to_string()))
    }
}
