//! Application Layer
//!
//! Use cases for authentication and entity CRUD. They depend only on the
//! domain gateways, never on concrete adapters.

pub mod use_cases;
