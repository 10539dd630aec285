use serde::Serialize;
use uuid::Uuid;

/// Event pushed to the stats service after an attempt is graded.
#[derive(Debug, Serialize)]
pub struct AttemptEvent {
    pub account_id: Uuid,
    pub question_id: Uuid,
    pub correct: bool,
}
