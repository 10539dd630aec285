use tracing::instrument;
use uuid::Uuid;

use crate::config::stats::StatsConfig;
use crate::modules::accounts::model::AccountStats;
use crate::utils::errors::AppError;

use super::model::AttemptEvent;

#[derive(Clone, Debug)]
pub struct StatsClient {
    http: reqwest::Client,
    config: StatsConfig,
}

impl StatsClient {
    pub fn new(config: StatsConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to build stats HTTP client");

        Self { http, config }
    }

    #[instrument(skip(self))]
    pub async fn record_attempt(
        &self,
        account_id: Uuid,
        question_id: Uuid,
        correct: bool,
    ) -> Result<(), AppError> {
        let url = format!("{}/events/attempts", self.config.base_url);

        self.http
            .post(&url)
            .json(&AttemptEvent {
                account_id,
                question_id,
                correct,
            })
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| AppError::internal_error(format!("Stats service request failed: {}", e)))?;

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn account_summary(&self, account_id: Uuid) -> Result<AccountStats, AppError> {
        let url = format!("{}/accounts/{}/summary", self.config.base_url, account_id);

        let stats = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| AppError::internal_error(format!("Stats service request failed: {}", e)))?
            .json::<AccountStats>()
            .await
            .map_err(|e| {
                AppError::internal_error(format!("Invalid stats service response: {}", e))
            })?;

        Ok(stats)
    }
}
