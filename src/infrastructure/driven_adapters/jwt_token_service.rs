//! JWT Token Service
//!
//! Issues and verifies HS256-signed access tokens.

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::gateways::{AccessToken, TokenService};
use crate::domain::models::principal::{Principal, Role};
use crate::shared::errors::CredentialError;

use super::config::JwtConfig;

/// Clock skew tolerated when checking `exp`
const LEEWAY_SECS: u64 = 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (`admin`, `customer:<id>` or `driver:<id>`)
    pub sub: String,
    pub email: String,
    pub role: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in_secs: i64,
}

impl JwtTokenService {
    #[must_use]
    pub fn new(secret: &[u8], expires_in_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            expires_in_secs,
        }
    }

    #[must_use]
    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(config.secret.as_bytes(), config.expires_in_secs)
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, principal: &Principal) -> Result<AccessToken, CredentialError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: principal.subject.clone(),
            email: principal.email.clone(),
            role: principal.role.to_string(),
            iat: now,
            exp: now + self.expires_in_secs,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| CredentialError::TokenEncoding(e.to_string()))?;

        Ok(AccessToken {
            token,
            expires_in_secs: self.expires_in_secs,
        })
    }

    fn verify(&self, token: &str) -> Result<Principal, CredentialError> {
        // Explicit algorithm to prevent algorithm confusion attacks
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = LEEWAY_SECS;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => CredentialError::TokenExpired,
            _ => CredentialError::TokenInvalid,
        })?;

        let claims = token_data.claims;
        let role = claims
            .role
            .parse::<Role>()
            .map_err(|_| CredentialError::TokenInvalid)?;

        Ok(Principal {
            subject: claims.sub,
            email: claims.email,
            role,
        })
    }
}
