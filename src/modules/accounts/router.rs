use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{account_stats, ban_account, get_accounts, unban_account};

pub fn init_accounts_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_accounts))
        .route("/{id}/ban", post(ban_account).delete(unban_account))
        .route("/{id}/stats", get(account_stats))
}
