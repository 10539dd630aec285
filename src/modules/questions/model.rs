use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A question row, including the answer. Never serialized directly; API
/// responses go through [`QuestionResponse`].
#[derive(Debug, Clone, FromRow)]
pub struct Question {
    pub id: Uuid,
    pub prompt: String,
    pub choices: Vec<String>,
    pub answer: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A question as exposed to members, without the answer.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuestionResponse {
    pub id: Uuid,
    pub prompt: String,
    pub choices: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            prompt: question.prompt,
            choices: question.choices,
            created_at: question.created_at,
        }
    }
}

/// DTO for submitting an answer attempt.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubmitAttemptDto {
    pub question_id: Uuid,
    #[validate(length(min = 1))]
    pub answer: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AttemptResult {
    pub question_id: Uuid,
    pub correct: bool,
}
