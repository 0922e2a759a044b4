//! Entity Use Cases
//!
//! CRUD business logic shared by every entity type.

mod clear_entities;
mod create_entity;
mod delete_entity;
#[cfg(test)]
pub(crate) mod fakes;
mod get_entity_by_id;
mod list_entities;
mod partial_update_entity;

use std::sync::Arc;

pub use clear_entities::ClearEntitiesUseCase;
pub use create_entity::CreateEntityUseCase;
pub use delete_entity::DeleteEntityUseCase;
pub use get_entity_by_id::GetEntityByIdUseCase;
pub use list_entities::ListEntitiesUseCase;
pub use partial_update_entity::PartialUpdateEntityUseCase;

use crate::domain::gateways::{EntityRepository, PasswordHasher};
use crate::domain::models::entity::Entity;

/// Every use case for one entity type, wired to the same repository
pub struct EntityUseCases<E: Entity> {
    pub get_by_id: GetEntityByIdUseCase<E>,
    pub list: ListEntitiesUseCase<E>,
    pub create: CreateEntityUseCase<E>,
    pub partial_update: PartialUpdateEntityUseCase<E>,
    pub delete: DeleteEntityUseCase<E>,
    pub clear: ClearEntitiesUseCase<E>,
}

impl<E: Entity> EntityUseCases<E> {
    #[must_use]
    pub fn new(repository: Arc<dyn EntityRepository<E>>, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            get_by_id: GetEntityByIdUseCase::new(repository.clone()),
            list: ListEntitiesUseCase::new(repository.clone()),
            create: CreateEntityUseCase::new(repository.clone(), password_hasher.clone()),
            partial_update: PartialUpdateEntityUseCase::new(repository.clone(), password_hasher),
            delete: DeleteEntityUseCase::new(repository.clone()),
            clear: ClearEntitiesUseCase::new(repository),
        }
    }
}
