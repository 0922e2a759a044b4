//! Driving Adapters
//!
//! Entry points that drive the application:
//! - HTTP REST API handlers and middleware
//! - DTOs for request/response

pub mod api_rest;
