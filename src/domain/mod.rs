//! Domain Layer
//!
//! Contains the core business logic, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{CredentialRepository, EntityRepository, PasswordHasher, TokenService};
pub use models::{Customer, Driver, Entity, EntityId, Principal, Role};
