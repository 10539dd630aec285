use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::accounts::model::{Account, AccountRole};

/// JWT claims for access tokens.
///
/// Everything the authorization layer needs is embedded here: role and ban
/// flag are captured at token issue time, so gates never re-derive identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Account ID (opaque identifier)
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Account username
    pub username: String,
    /// Account role
    pub role: AccountRole,
    /// Ban flag captured at issue time; absent in older tokens
    #[serde(default)]
    pub banned: bool,
    /// Token issued-at timestamp (Unix seconds)
    pub iat: usize,
    /// Token expiration timestamp (Unix seconds)
    pub exp: usize,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub account: Account,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub user_id: String,
    pub username: String,
    pub role: AccountRole,
    pub banned: bool,
}
