//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod credential_repository;
pub mod entity_repository;
pub mod password_hasher;
pub mod token_service;

pub use credential_repository::CredentialRepository;
pub use entity_repository::EntityRepository;
pub use password_hasher::PasswordHasher;
pub use token_service::{AccessToken, TokenService};
