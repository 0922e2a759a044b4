//! Authentication DTOs

use serde::{Deserialize, Serialize};

use crate::domain::gateways::AccessToken;

/// Login request body for POST /auth
///
/// `username` is the admin username or an account's email address.
#[derive(Deserialize)]
pub struct LoginRequestDto {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Token response returned by POST /auth
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponseDto {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl From<AccessToken> for TokenResponseDto {
    fn from(token: AccessToken) -> Self {
        Self {
            access_token: token.token,
            token_type: "Bearer".to_string(),
            expires_in: token.expires_in_secs,
        }
    }
}
