//! Entity Repository Gateway
//!
//! Abstract trait defining the contract for entity persistence operations.
//! One implementation serves every [`Entity`] type.

use async_trait::async_trait;

use crate::domain::models::entity::{Entity, EntityId};
use crate::shared::errors::RepositoryError;

/// Repository trait for entity persistence operations
#[async_trait]
pub trait EntityRepository<E: Entity>: Send + Sync {
    /// Find an entity by its ID
    async fn find_by_id(&self, id: EntityId) -> Result<Option<E>, RepositoryError>;

    /// Find all entities, sorted by id ascending
    async fn find_all(&self) -> Result<Vec<E>, RepositoryError>;

    /// Insert a new entity
    async fn create(&self, entity: &E) -> Result<E, RepositoryError>;

    /// Update an existing entity, returning `None` if it no longer exists
    async fn update(&self, entity: &E) -> Result<Option<E>, RepositoryError>;

    /// Delete an entity, returning whether a row was removed
    async fn delete(&self, id: EntityId) -> Result<bool, RepositoryError>;

    /// Delete every entity of this type, returning how many were removed
    async fn delete_all(&self) -> Result<u64, RepositoryError>;

    /// Check if an id is taken
    async fn exists_by_id(&self, id: EntityId) -> Result<bool, RepositoryError>;

    /// Check if an email is taken, optionally excluding a specific entity
    async fn exists_by_email(
        &self,
        email: &str,
        exclude_id: Option<EntityId>,
    ) -> Result<bool, RepositoryError>;
}
