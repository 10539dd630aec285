use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;
use uuid::Uuid;

use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};

use super::model::{Account, AccountStats};
use super::service::AccountService;

/// List all accounts
#[utoipa::path(
    get,
    path = "/api/accounts",
    responses(
        (status = 200, description = "List of accounts", body = Vec<Account>),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - administrator privileges required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Accounts"
)]
#[instrument(skip(state))]
pub async fn get_accounts(State(state): State<AppState>) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = AccountService::get_accounts(&state.db).await?;
    Ok(Json(accounts))
}

/// Ban an account
#[utoipa::path(
    post,
    path = "/api/accounts/{id}/ban",
    params(
        ("id" = Uuid, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account banned", body = Account),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - administrator privileges required", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Accounts"
)]
#[instrument(skip(state))]
pub async fn ban_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Account>, AppError> {
    let account = AccountService::set_banned(&state.db, id, true).await?;
    Ok(Json(account))
}

/// Lift a ban from an account
#[utoipa::path(
    delete,
    path = "/api/accounts/{id}/ban",
    params(
        ("id" = Uuid, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Ban lifted", body = Account),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - administrator privileges required", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Accounts"
)]
#[instrument(skip(state))]
pub async fn unban_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Account>, AppError> {
    let account = AccountService::set_banned(&state.db, id, false).await?;
    Ok(Json(account))
}

/// Fetch answer statistics for an account from the stats service
#[utoipa::path(
    get,
    path = "/api/accounts/{id}/stats",
    params(
        ("id" = Uuid, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account statistics", body = AccountStats),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - administrator privileges required", body = ErrorResponse),
        (status = 500, description = "Stats service unavailable", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Accounts"
)]
#[instrument(skip(state))]
pub async fn account_stats(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AccountStats>, AppError> {
    let stats = state.stats.account_summary(id).await?;
    Ok(Json(stats))
}
