//! Authentication Service
//!
//! Issues the signed access token handed out at login.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::JwtSettings;
use crate::domain::{Subject, User};

/// Token issuer trait for dependency injection
#[cfg_attr(test, mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    /// Sign an access token for the given user.
    ///
    /// Callers pass the user's token view (see `User::token_view`).
    fn generate_token(&self, user: &User) -> Result<String, AuthError>;
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    /// Copied from the user; empty for anything produced by `User::token_view`
    #[serde(default)]
    pub subjects: Vec<Subject>,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// JWT ID for token revocation tracking
    pub jti: String,
}

/// Authentication errors
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// HS256 token issuer backed by `jsonwebtoken`
#[derive(Clone)]
pub struct JwtTokenIssuer {
    jwt_settings: JwtSettings,
}

impl JwtTokenIssuer {
    pub fn new(jwt_settings: JwtSettings) -> Self {
        Self { jwt_settings }
    }

    /// Decode and validate an access token
    pub fn decode_token(&self, token: &str) -> Result<Claims, AuthError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_settings.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        })?;

        Ok(token_data.claims)
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn generate_token(&self, user: &User) -> Result<String, AuthError> {
        let now = Utc::now();
        let expiry = now + Duration::minutes(self.jwt_settings.access_token_expiry_minutes);

        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role.clone(),
            subjects: user.subjects.clone(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_settings.secret.as_bytes()),
        )
        .map_err(|e| AuthError::Internal(format!("Token generation failed: {}", e)))
    }
}
