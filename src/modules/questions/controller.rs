use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::RequireUser;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use crate::validator::ValidatedJson;

use super::model::{AttemptResult, QuestionResponse, SubmitAttemptDto};
use super::service::QuestionService;

/// List all questions
#[utoipa::path(
    get,
    path = "/api/questions",
    responses(
        (status = 200, description = "List of questions", body = Vec<QuestionResponse>),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - account is banned", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Questions"
)]
#[instrument(skip(state))]
pub async fn get_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuestionResponse>>, AppError> {
    let questions = QuestionService::get_questions(&state.db).await?;
    Ok(Json(questions))
}

/// Get a single question by ID
#[utoipa::path(
    get,
    path = "/api/questions/{id}",
    params(
        ("id" = Uuid, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question", body = QuestionResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - account is banned", body = ErrorResponse),
        (status = 404, description = "Question not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Questions"
)]
#[instrument(skip(state))]
pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuestionResponse>, AppError> {
    let question = QuestionService::get_question(&state.db, id).await?;
    Ok(Json(question))
}

/// Submit an answer attempt for grading
#[utoipa::path(
    post,
    path = "/api/attempts",
    request_body = SubmitAttemptDto,
    responses(
        (status = 200, description = "Attempt graded", body = AttemptResult),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - admins and banned accounts cannot submit", body = ErrorResponse),
        (status = 404, description = "Question not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Questions"
)]
#[instrument(skip(state, dto))]
pub async fn submit_attempt(
    State(state): State<AppState>,
    RequireUser(auth_user): RequireUser,
    ValidatedJson(dto): ValidatedJson<SubmitAttemptDto>,
) -> Result<Json<AttemptResult>, AppError> {
    let account_id = auth_user.account_id()?;
    let result =
        QuestionService::submit_attempt(&state.db, &state.stats, account_id, dto).await?;
    Ok(Json(result))
}
