//! Create Entity Use Case
//!
//! Creates a new entity under a client-chosen id.

use std::sync::Arc;

use crate::domain::gateways::{EntityRepository, PasswordHasher};
use crate::domain::models::entity::{Entity, EntityId, EntityInput};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new entity
pub struct CreateEntityUseCase<E: Entity> {
    repository: Arc<dyn EntityRepository<E>>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<E: Entity> CreateEntityUseCase<E> {
    /// Create a new CreateEntityUseCase
    #[must_use]
    pub fn new(repository: Arc<dyn EntityRepository<E>>, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Conflict` if the id or the email is already taken.
    /// Returns `UseCaseError::Credential` if the password cannot be hashed.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: EntityId, data: E::CreateData) -> Result<E, UseCaseError> {
        tracing::info!(resource = E::RESOURCE, id = %id, "Creating new entity");

        if self.repository.exists_by_id(id).await? {
            tracing::warn!(resource = E::RESOURCE, id = %id, "Entity id already exists");
            return Err(UseCaseError::Conflict(format!(
                "{} with id {} already exists",
                E::RESOURCE,
                id
            )));
        }

        if let Some(email) = data.email() {
            if self.repository.exists_by_email(email, None).await? {
                tracing::warn!(resource = E::RESOURCE, id = %id, "Entity email already exists");
                return Err(UseCaseError::Conflict(format!(
                    "{} with email {} already exists",
                    E::RESOURCE,
                    email
                )));
            }
        }

        let password_hash = data
            .password()
            .map(|password| self.password_hasher.hash(password.expose()))
            .transpose()?;

        let entity = E::new(id, data, password_hash);
        let created = self.repository.create(&entity).await?;

        tracing::info!(resource = E::RESOURCE, id = %created.id(), "Entity created successfully");
        Ok(created)
    }
}
