use anyhow::Context;
use tracing::instrument;
use uuid::Uuid;

use crate::db::ConnectionManager;
use crate::utils::errors::AppError;

use super::model::Account;

pub struct AccountService;

impl AccountService {
    #[instrument(skip(db))]
    pub async fn get_accounts(db: &ConnectionManager) -> Result<Vec<Account>, AppError> {
        let pool = db.get_connection().await?;

        let accounts = sqlx::query_as::<_, Account>(
            "SELECT id, username, role, banned, created_at
             FROM accounts ORDER BY created_at",
        )
        .fetch_all(&pool)
        .await
        .context("Failed to fetch accounts")
        .map_err(AppError::database)?;

        Ok(accounts)
    }

    #[instrument(skip(db))]
    pub async fn set_banned(
        db: &ConnectionManager,
        id: Uuid,
        banned: bool,
    ) -> Result<Account, AppError> {
        let pool = db.get_connection().await?;

        sqlx::query_as::<_, Account>(
            "UPDATE accounts SET banned = $2 WHERE id = $1
             RETURNING id, username, role, banned, created_at",
        )
        .bind(id)
        .bind(banned)
        .fetch_optional(&pool)
        .await
        .context("Failed to update ban flag")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Account with id {} not found", id)))
    }
}
