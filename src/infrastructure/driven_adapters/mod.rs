//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories
//! - Password hashing and token signing
//! - Configuration

pub mod argon2_hasher;
pub mod config;
pub mod credential_repository;
pub mod database;
pub mod entity_repository;
pub mod jwt_token_service;

pub use argon2_hasher::Argon2PasswordHasher;
pub use config::AppConfig;
pub use credential_repository::PostgresCredentialRepository;
pub use entity_repository::PostgresEntityRepository;
pub use jwt_token_service::JwtTokenService;
