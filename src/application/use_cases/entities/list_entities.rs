//! List Entities Use Case

use std::sync::Arc;

use crate::domain::gateways::EntityRepository;
use crate::domain::models::entity::Entity;
use crate::shared::errors::UseCaseError;

/// Use case for listing every entity of a type
pub struct ListEntitiesUseCase<E: Entity> {
    repository: Arc<dyn EntityRepository<E>>,
}

impl<E: Entity> ListEntitiesUseCase<E> {
    #[must_use]
    pub fn new(repository: Arc<dyn EntityRepository<E>>) -> Self {
        Self { repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<E>, UseCaseError> {
        let entities = self.repository.find_all().await?;

        tracing::debug!(resource = E::RESOURCE, count = entities.len(), "Listed entities");
        Ok(entities)
    }
}
