use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{get_question, get_questions, submit_attempt};

pub fn init_questions_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_questions))
        .route("/{id}", get(get_question))
}

pub fn init_attempts_router() -> Router<AppState> {
    Router::new().route("/", post(submit_attempt))
}
