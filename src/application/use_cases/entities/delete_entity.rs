//! Delete Entity Use Case
//!
//! Permanently removes an entity.

use std::sync::Arc;

use crate::domain::gateways::EntityRepository;
use crate::domain::models::entity::{Entity, EntityId};
use crate::shared::errors::UseCaseError;

/// Use case for deleting an entity
pub struct DeleteEntityUseCase<E: Entity> {
    repository: Arc<dyn EntityRepository<E>>,
}

impl<E: Entity> DeleteEntityUseCase<E> {
    /// Create a new DeleteEntityUseCase
    #[must_use]
    pub fn new(repository: Arc<dyn EntityRepository<E>>) -> Self {
        Self { repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the entity doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: EntityId) -> Result<(), UseCaseError> {
        tracing::info!(resource = E::RESOURCE, id = %id, "Deleting entity");

        let deleted = self.repository.delete(id).await?;

        if !deleted {
            tracing::warn!(resource = E::RESOURCE, id = %id, "Entity not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: E::RESOURCE.to_string(),
                id: id.to_string(),
            });
        }

        tracing::info!(resource = E::RESOURCE, id = %id, "Entity deleted successfully");
        Ok(())
    }
}
