//! Ride Registry API
//!
//! A Rust-based microservice that stores the customers and drivers of a
//! ride-sharing service behind a JWT-protected REST API, following
//! Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
