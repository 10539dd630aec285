//! Account data models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Closed set of account roles.
///
/// Roles travel inside the JWT as lowercase strings and are matched
/// exhaustively everywhere; an unknown role string fails token decoding
/// instead of silently falling through a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "account_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    User,
    Admin,
}

/// An account as exposed by the API. The password hash never leaves the
/// service layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    pub role: AccountRole,
    pub banned: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Aggregate answer statistics for one account, as reported by the external
/// stats service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountStats {
    pub attempts: i64,
    pub correct: i64,
}
