use anyhow::Context;
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::db::ConnectionManager;
use crate::modules::stats::client::StatsClient;
use crate::utils::errors::AppError;

use super::model::{AttemptResult, Question, QuestionResponse, SubmitAttemptDto};

pub struct QuestionService;

impl QuestionService {
    #[instrument(skip(db))]
    pub async fn get_questions(db: &ConnectionManager) -> Result<Vec<QuestionResponse>, AppError> {
        let pool = db.get_connection().await?;

        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, prompt, choices, answer, created_at
             FROM questions ORDER BY created_at",
        )
        .fetch_all(&pool)
        .await
        .context("Failed to fetch questions")
        .map_err(AppError::database)?;

        Ok(questions.into_iter().map(QuestionResponse::from).collect())
    }

    #[instrument(skip(db))]
    pub async fn get_question(
        db: &ConnectionManager,
        id: Uuid,
    ) -> Result<QuestionResponse, AppError> {
        let question = Self::fetch_question(db, id).await?;
        Ok(QuestionResponse::from(question))
    }

    /// Grade and persist an attempt, then notify the stats service. A stats
    /// outage must not fail the attempt, so that error is only logged.
    #[instrument(skip(db, stats))]
    pub async fn submit_attempt(
        db: &ConnectionManager,
        stats: &StatsClient,
        account_id: Uuid,
        dto: SubmitAttemptDto,
    ) -> Result<AttemptResult, AppError> {
        let question = Self::fetch_question(db, dto.question_id).await?;
        let correct = question.answer.eq_ignore_ascii_case(dto.answer.trim());

        let pool = db.get_connection().await?;
        sqlx::query(
            "INSERT INTO attempts (account_id, question_id, answer, correct)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(account_id)
        .bind(question.id)
        .bind(&dto.answer)
        .bind(correct)
        .execute(&pool)
        .await
        .context("Failed to record attempt")
        .map_err(AppError::database)?;

        if let Err(err) = stats.record_attempt(account_id, question.id, correct).await {
            warn!(error = %err.error, "Failed to publish attempt to stats service");
        }

        Ok(AttemptResult {
            question_id: question.id,
            correct,
        })
    }

    async fn fetch_question(db: &ConnectionManager, id: Uuid) -> Result<Question, AppError> {
        let pool = db.get_connection().await?;

        sqlx::query_as::<_, Question>(
            "SELECT id, prompt, choices, answer, created_at
             FROM questions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&pool)
        .await
        .context("Failed to fetch question by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Question with id {} not found", id)))
    }
}
