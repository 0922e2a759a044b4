//! Partial Update Entity Use Case (PATCH)
//!
//! Updates only the fields present in the request. A present field is applied
//! even when it holds a zero or empty-looking value.

use std::sync::Arc;

use crate::domain::gateways::{EntityRepository, PasswordHasher};
use crate::domain::models::entity::{Entity, EntityId, EntityInput};
use crate::shared::errors::UseCaseError;

/// Use case for partial entity update (PATCH)
pub struct PartialUpdateEntityUseCase<E: Entity> {
    repository: Arc<dyn EntityRepository<E>>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<E: Entity> PartialUpdateEntityUseCase<E> {
    /// Create a new PartialUpdateEntityUseCase
    #[must_use]
    pub fn new(repository: Arc<dyn EntityRepository<E>>, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }

    fn not_found(id: EntityId) -> UseCaseError {
        UseCaseError::NotFound {
            resource: E::RESOURCE.to_string(),
            id: id.to_string(),
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the entity doesn't exist.
    /// Returns `UseCaseError::Conflict` if the new email already exists.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: EntityId, data: E::UpdateData) -> Result<E, UseCaseError> {
        tracing::info!(resource = E::RESOURCE, id = %id, "Partially updating entity");

        let existing = self.repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(resource = E::RESOURCE, id = %id, "Entity not found for partial update");
            Self::not_found(id)
        })?;

        // Check email uniqueness if it changed
        if let Some(new_email) = data.email() {
            if new_email != existing.email() && self.repository.exists_by_email(new_email, Some(id)).await? {
                tracing::warn!(resource = E::RESOURCE, id = %id, "Cannot update: email already exists");
                return Err(UseCaseError::Conflict(format!(
                    "{} with email {} already exists",
                    E::RESOURCE,
                    new_email
                )));
            }
        }

        let password_hash = data
            .password()
            .map(|password| self.password_hasher.hash(password.expose()))
            .transpose()?;

        let updated = existing.with_updates(data, password_hash);

        let result = self
            .repository
            .update(&updated)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        tracing::info!(resource = E::RESOURCE, id = %id, "Entity partially updated successfully");
        Ok(result)
    }
}
