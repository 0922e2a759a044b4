//! Infrastructure Layer
//!
//! Everything that talks to the outside world: the axum REST API that drives
//! the use cases, and the PostgreSQL, Argon2 and JWT adapters they are driven
//! through.

pub mod driven_adapters;
pub mod driving_adapters;
