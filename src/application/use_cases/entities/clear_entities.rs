//! Clear Entities Use Case
//!
//! Removes every entity of a type.

use std::sync::Arc;

use crate::domain::gateways::EntityRepository;
use crate::domain::models::entity::Entity;
use crate::shared::errors::UseCaseError;

/// Use case for bulk-deleting a collection
pub struct ClearEntitiesUseCase<E: Entity> {
    repository: Arc<dyn EntityRepository<E>>,
}

impl<E: Entity> ClearEntitiesUseCase<E> {
    #[must_use]
    pub fn new(repository: Arc<dyn EntityRepository<E>>) -> Self {
        Self { repository }
    }

    /// Execute the use case, returning how many entities were removed
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<u64, UseCaseError> {
        tracing::info!(resource = E::RESOURCE, "Clearing all entities");

        let removed = self.repository.delete_all().await?;

        tracing::info!(resource = E::RESOURCE, removed, "Entities cleared");
        Ok(removed)
    }
}
