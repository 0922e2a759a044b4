//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod auth;
pub mod entities;

pub use auth::AuthenticateUseCase;
pub use entities::{
    ClearEntitiesUseCase, CreateEntityUseCase, DeleteEntityUseCase, EntityUseCases, GetEntityByIdUseCase,
    ListEntitiesUseCase, PartialUpdateEntityUseCase,
};
