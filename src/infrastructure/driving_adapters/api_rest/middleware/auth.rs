//! JWT Authentication Middleware
//!
//! Extracts and verifies bearer tokens from requests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{header::AUTHORIZATION, request::Parts, Request},
    middleware::Next,
    response::Response,
};

use crate::domain::gateways::TokenService;
use crate::domain::models::principal::Principal;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ApiError, CredentialError};

/// JWT authentication extractor
///
/// Handlers that take `JwtAuth` are only reached with a verified token.
#[derive(Debug, Clone)]
pub struct JwtAuth(pub Principal);

#[async_trait]
impl<S> FromRequestParts<S> for JwtAuth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token_service = parts
            .extensions
            .get::<Arc<dyn TokenService>>()
            .cloned()
            .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("Token service not available")))?;

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::Unauthorized("Invalid Authorization header format".to_string()))?;

        // Token validation details are not exposed beyond expiry
        let principal = token_service.verify(token).map_err(|err| match err {
            CredentialError::TokenExpired => ApiError::Unauthorized("Token has expired".to_string()),
            _ => ApiError::Unauthorized("Invalid or expired token".to_string()),
        })?;

        Ok(JwtAuth(principal))
    }
}

/// Middleware that adds the token service to request extensions for `JwtAuth`
pub async fn add_token_service_extension(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    request.extensions_mut().insert(state.token_service.clone());
    next.run(request).await
}
