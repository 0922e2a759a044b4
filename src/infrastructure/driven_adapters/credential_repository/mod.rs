//! Credential Repository Adapters

mod postgres;

pub use postgres::PostgresCredentialRepository;
