use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use crate::modules::accounts::model::AccountRole;
use crate::modules::auth::model::Claims;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// The one message returned for every token decode failure. Reporting which
/// claim failed would hand an attacker an oracle for forging tokens.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";

/// Extractor that validates the JWT and carries the authenticated identity.
///
/// Created once per request by decoding the bearer token; immutable
/// afterwards and discarded when the request ends.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Get the account ID as a UUID
    pub fn account_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.0.user_id)
            .map_err(|_| AppError::unauthorized("Invalid account ID in token".to_string()))
    }

    pub fn username(&self) -> &str {
        &self.0.username
    }

    pub fn role(&self) -> AccountRole {
        self.0.role
    }

    pub fn is_banned(&self) -> bool {
        self.0.banned
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing authorization header".to_string()))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::unauthorized("Invalid authorization header format".to_string())
        })?;

        let claims = verify_token(token, &state.jwt_config)
            .map_err(|_| AppError::unauthorized(INVALID_TOKEN_MESSAGE.to_string()))?;

        Ok(AuthUser(claims))
    }
}
