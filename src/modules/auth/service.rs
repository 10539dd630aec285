use anyhow::Context;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::db::ConnectionManager;
use crate::modules::accounts::model::{Account, AccountRole};
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::verify_password;

use super::model::{LoginRequest, LoginResponse};

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &ConnectionManager,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct AccountWithPassword {
            id: Uuid,
            username: String,
            password: String,
            role: AccountRole,
            banned: bool,
            created_at: chrono::DateTime<chrono::Utc>,
        }

        let pool = db.get_connection().await?;

        let account = sqlx::query_as::<_, AccountWithPassword>(
            "SELECT id, username, password, role, banned, created_at
             FROM accounts WHERE username = $1",
        )
        .bind(&dto.username)
        .fetch_optional(&pool)
        .await
        .context("Failed to look up account")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::unauthorized("Invalid username or password".to_string()))?;

        let is_valid = verify_password(&dto.password, &account.password)?;

        if !is_valid {
            return Err(AppError::unauthorized(
                "Invalid username or password".to_string(),
            ));
        }

        let access_token = create_access_token(
            account.id,
            &account.username,
            account.role,
            account.banned,
            jwt_config,
        )?;

        Ok(LoginResponse {
            access_token,
            account: Account {
                id: account.id,
                username: account.username,
                role: account.role,
                banned: account.banned,
                created_at: account.created_at,
            },
        })
    }
}
