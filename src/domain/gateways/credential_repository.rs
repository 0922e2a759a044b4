//! Credential Repository Gateway
//!
//! Looks up login credentials across every account table.

use async_trait::async_trait;

use crate::domain::models::principal::Credential;
use crate::shared::errors::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// All credentials registered under `email`, at most one per account table.
    /// Accounts without a password are not returned.
    async fn find_by_email(&self, email: &str) -> Result<Vec<Credential>, RepositoryError>;
}
