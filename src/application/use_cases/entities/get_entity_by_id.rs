//! Get Entity By ID Use Case
//!
//! Retrieves a single entity by its ID.

use std::sync::Arc;

use crate::domain::gateways::EntityRepository;
use crate::domain::models::entity::{Entity, EntityId};
use crate::shared::errors::UseCaseError;

/// Use case for getting an entity by ID
pub struct GetEntityByIdUseCase<E: Entity> {
    repository: Arc<dyn EntityRepository<E>>,
}

impl<E: Entity> GetEntityByIdUseCase<E> {
    /// Create a new GetEntityByIdUseCase
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
    pub async fn execute(&self, id: EntityId) -> Result<E, UseCaseError> {
        tracing::debug!(resource = E::RESOURCE, id = %id, "Getting entity by ID");

        let entity = self.repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(resource = E::RESOURCE, id = %id, "Entity not found");
            UseCaseError::NotFound {
                resource: E::RESOURCE.to_string(),
                id: id.to_string(),
            }
        })?;

        Ok(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::entities::fakes::{customer, InMemoryEntityRepository};
    use crate::domain::models::Customer;

    #[tokio::test]
    async fn should_return_entity_when_found() {
        let repo = Arc::new(InMemoryEntityRepository::<Customer>::new().with_entity(customer(1, "a@example.com")));

        let use_case = GetEntityByIdUseCase::new(repo);
        let result = use_case.execute(EntityId::new(1).unwrap()).await;

        assert_eq!(result.unwrap().email(), "a@example.com");
    }

    #[tokio::test]
    async fn should_return_not_found_when_entity_does_not_exist() {
        let repo = Arc::new(InMemoryEntityRepository::<Customer>::new());

        let use_case = GetEntityByIdUseCase::new(repo);
        let result = use_case.execute(EntityId::new(99).unwrap()).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }

    #[tokio::test]
    async fn should_propagate_repository_errors() {
        let repo = Arc::new(InMemoryEntityRepository::<Customer>::broken());

        let use_case = GetEntityByIdUseCase::new(repo);
        let result = use_case.execute(EntityId::new(1).unwrap()).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Repository(_)));
    }
}
