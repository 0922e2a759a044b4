//! HTTP Handlers

pub mod auth;
pub mod entities;
