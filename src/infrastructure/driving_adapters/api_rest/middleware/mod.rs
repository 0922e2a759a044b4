//! API Middleware
//!
//! Authentication and request correlation for the REST API.

pub mod auth;
pub mod request_id;

pub use auth::{add_token_service_extension, JwtAuth};
pub use request_id::{current_request_id, request_id_middleware, RequestId, REQUEST_ID_HEADER};
