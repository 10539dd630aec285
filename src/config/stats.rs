use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct StatsConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl StatsConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("STATS_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:9090".to_string()),
            request_timeout: Duration::from_secs(
                env::var("STATS_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
        }
    }
}
