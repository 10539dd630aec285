use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{login, profile};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/profile", get(profile))
}
