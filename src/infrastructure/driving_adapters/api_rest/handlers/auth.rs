//! Authentication Handler
//!
//! Exchanges credentials for a bearer token. This is the only route that does
//! not require authentication.

use axum::{extract::State, routing::post, Json, Router};

use crate::domain::models::password::Password;
use crate::infrastructure::driving_adapters::api_rest::dto::{LoginRequestDto, TokenResponseDto};
use crate::infrastructure::driving_adapters::api_rest::extractors::ApiJson;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for the authentication endpoint
pub fn router() -> Router<AppState> {
    Router::new().route("/auth", post(login))
}

/// POST /auth - Issue an access token
///
/// # Responses
///
/// * 200 OK - `{access_token, token_type, expires_in}`
/// * 400 Bad Request - Malformed body, or username or password missing
/// * 401 Unauthorized - Credentials do not match any account
#[axum::debug_handler(state = AppState)]
async fn login(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<LoginRequestDto>,
) -> Result<Json<TokenResponseDto>, ApiError> {
    let password = Password::new(dto.password);

    let token = state
        .authenticate_use_case
        .execute(dto.username.trim(), &password)
        .await?;

    Ok(Json(TokenResponseDto::from(token)))
}
