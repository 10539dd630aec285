//! Database connection pool settings.
//!
//! All settings are read from environment variables; the DSN itself has no
//! default and must be supplied. `refresh_ttl` is the age after which the
//! connection manager forcibly recreates the pool, independently of the
//! per-connection lifetimes enforced by SQLx.

use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Bound on pool acquisition and on the liveness probe after a reopen.
    pub acquire_timeout: Duration,
    pub connection_max_lifetime: Duration,
    pub idle_timeout: Duration,
    /// Age after which the whole pool is closed and reopened.
    pub refresh_ttl: Duration,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
            acquire_timeout: Duration::from_secs(
                env::var("DATABASE_ACQUIRE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
            connection_max_lifetime: Duration::from_secs(
                env::var("DATABASE_MAX_LIFETIME_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(1800), // 30 minutes
            ),
            idle_timeout: Duration::from_secs(
                env::var("DATABASE_IDLE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(600), // 10 minutes
            ),
            refresh_ttl: Duration::from_secs(
                env::var("DATABASE_REFRESH_TTL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(300), // 5 minutes
            ),
        }
    }
}
