//! Role-based authorization gates.
//!
//! Three layered approaches, all evaluated strictly after authentication:
//! 1. Pure gate predicates over decoded claims (`admin_gate`, `member_gate`,
//!    `user_gate`)
//! 2. Layer-based middleware for whole route subtrees (`require_admin`, ...)
//! 3. Extractors for individual handlers (`RequireAdmin`, ...)
//!
//! A gate never re-derives identity; it only reads the claims produced by
//! [`AuthUser`].

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::modules::accounts::model::AccountRole;
use crate::modules::auth::model::Claims;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Admin-only access. The ban flag is irrelevant here: banning an
/// administrator is done by demoting the account, not by the gate.
pub fn admin_gate(claims: &Claims) -> Result<(), AppError> {
    match claims.role {
        AccountRole::Admin => Ok(()),
        AccountRole::User => Err(AppError::forbidden(
            "Access denied. Administrator privileges required.".to_string(),
        )),
    }
}

/// Any non-banned account, user or admin.
pub fn member_gate(claims: &Claims) -> Result<(), AppError> {
    if claims.banned {
        return Err(AppError::forbidden(
            "Access denied. Account is banned.".to_string(),
        ));
    }
    match claims.role {
        AccountRole::Admin | AccountRole::User => Ok(()),
    }
}

/// Non-banned user accounts only; admins are rejected.
pub fn user_gate(claims: &Claims) -> Result<(), AppError> {
    if claims.banned {
        return Err(AppError::forbidden(
            "Access denied. Account is banned.".to_string(),
        ));
    }
    match claims.role {
        AccountRole::User => Ok(()),
        AccountRole::Admin => Err(AppError::forbidden(
            "Access denied. This endpoint is for user accounts only.".to_string(),
        )),
    }
}

async fn run_gate(
    state: AppState,
    req: Request,
    next: Next,
    gate: fn(&Claims) -> Result<(), AppError>,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    gate(&auth_user.0)?;

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Middleware for admin-only route subtrees.
///
/// # Example
///
/// ```rust,ignore
/// let admin_routes = Router::new()
///     .route("/accounts", get(list_accounts))
///     .layer(middleware::from_fn_with_state(state.clone(), require_admin));
/// ```
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match run_gate(state, req, next, admin_gate).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Middleware for routes open to any non-banned account.
pub async fn require_member(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match run_gate(state, req, next, member_gate).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Middleware for routes restricted to non-banned user accounts.
pub async fn require_user(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match run_gate(state, req, next, user_gate).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Extractor variant of [`admin_gate`] for single handlers.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        admin_gate(&auth_user.0)?;
        Ok(RequireAdmin(auth_user))
    }
}

/// Extractor variant of [`member_gate`] for single handlers.
#[derive(Debug, Clone)]
pub struct RequireMember(pub AuthUser);

impl FromRequestParts<AppState> for RequireMember {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        member_gate(&auth_user.0)?;
        Ok(RequireMember(auth_user))
    }
}

/// Extractor variant of [`user_gate`] for single handlers.
#[derive(Debug, Clone)]
pub struct RequireUser(pub AuthUser);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        user_gate(&auth_user.0)?;
        Ok(RequireUser(auth_user))
    }
}
