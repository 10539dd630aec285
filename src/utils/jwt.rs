//! JWT token creation and verification.
//!
//! Access tokens embed the account id, username, role and ban flag directly,
//! so authorization decisions downstream never require a database lookup.
//! Verification is deterministic and side-effect free; every failure mode is
//! reported through [`AuthError`] so callers can decide how much to reveal.

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::accounts::model::AccountRole;
use crate::modules::auth::model::Claims;
use crate::utils::errors::AppError;

/// Token verification failures.
///
/// The HTTP layer collapses all of these into one generic 401 message so the
/// response never reveals which claim check failed.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("authorization token is missing")]
    MissingToken,
    #[error("token is malformed")]
    MalformedToken,
    #[error("token has expired")]
    ExpiredToken,
    #[error("token signature is invalid")]
    InvalidSignature,
}

pub fn create_access_token(
    account_id: Uuid,
    username: &str,
    role: AccountRole,
    banned: bool,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry as usize;

    let claims = Claims {
        user_id: account_id.to_string(),
        username: username.to_string(),
        role,
        banned,
        iat: now,
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AuthError> {
    // Zero leeway: a token one second past `exp` is already rejected.
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|err| match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => AuthError::InvalidSignature,
        _ => AuthError::MalformedToken,
    })
}
