//! Database connection management.
//!
//! [`ConnectionManager`] owns the process-wide connection pool handle behind a
//! single mutex. The pool is created lazily on first use and recreated once
//! its age exceeds the configured refresh TTL; under concurrent expiry exactly
//! one caller performs the reopen while the others wait on the lock and then
//! observe the fresh handle.
//!
//! The acquisition strategy is substitutable through [`PoolBackend`], so
//! tests can inject a deterministic fake without touching call sites.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::database::DatabaseConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("Failed to open connection pool: {0}")]
    OpenFailed(#[source] sqlx::Error),

    #[error("Connection liveness probe failed: {0}")]
    PingFailed(#[source] sqlx::Error),
}

/// Seam between the manager and the actual database driver.
#[async_trait]
pub trait PoolBackend: fmt::Debug + Send + Sync {
    /// Open a new pool with the bounded settings from `config`.
    async fn open(&self, config: &DatabaseConfig) -> Result<PgPool, ConnectionError>;

    /// Liveness probe against a freshly opened pool.
    async fn ping(&self, pool: &PgPool) -> Result<(), ConnectionError>;
}

#[derive(Debug, Default)]
pub struct PostgresBackend;

#[async_trait]
impl PoolBackend for PostgresBackend {
    async fn open(&self, config: &DatabaseConfig) -> Result<PgPool, ConnectionError> {
        PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.acquire_timeout)
            .max_lifetime(config.connection_max_lifetime)
            .idle_timeout(config.idle_timeout)
            .connect(&config.url)
            .await
            .map_err(ConnectionError::OpenFailed)
    }

    async fn ping(&self, pool: &PgPool) -> Result<(), ConnectionError> {
        sqlx::query("SELECT 1")
            .execute(pool)
            .await
            .map(|_| ())
            .map_err(ConnectionError::PingFailed)
    }
}

#[derive(Debug)]
struct PoolEntry {
    pool: PgPool,
    created_at: Instant,
}

/// Mutex-guarded, TTL-expiring owner of the shared connection pool.
///
/// Clones share the same slot; the manager is constructed once at startup and
/// injected through [`crate::state::AppState`].
#[derive(Clone, Debug)]
pub struct ConnectionManager {
    config: DatabaseConfig,
    backend: Arc<dyn PoolBackend>,
    slot: Arc<Mutex<Option<PoolEntry>>>,
}

impl ConnectionManager {
    pub fn new(config: DatabaseConfig) -> Self {
        Self::with_backend(config, Arc::new(PostgresBackend))
    }

    pub fn with_backend(config: DatabaseConfig, backend: Arc<dyn PoolBackend>) -> Self {
        Self {
            config,
            backend,
            slot: Arc::new(Mutex::new(None)),
        }
    }

    /// Return a valid pool handle, reopening it if absent or older than the
    /// refresh TTL.
    ///
    /// Repositories call this fresh on every query and must not cache the
    /// returned handle.
    pub async fn get_connection(&self) -> Result<PgPool, ConnectionError> {
        let mut slot = Arc::clone(&self.slot).lock_owned().await;

        if let Some(entry) = slot.as_ref() {
            if entry.created_at.elapsed() < self.config.refresh_ttl {
                return Ok(entry.pool.clone());
            }
        }

        if let Some(stale) = slot.take() {
            debug!(
                age_secs = stale.created_at.elapsed().as_secs(),
                "Closing expired connection pool"
            );
            // Close in the background; a still-checked-out connection must
            // not stall the refresh.
            tokio::spawn(async move { stale.pool.close().await });
        }

        let backend = Arc::clone(&self.backend);
        let config = self.config.clone();

        // The reopen task owns the lock guard, so cancelling the request that
        // triggered it cannot abort an open that waiting callers depend on.
        // The slot is either updated atomically or left empty for the next
        // caller to retry; a failed probe never poisons the manager.
        let reopen = tokio::spawn(async move {
            let pool = backend.open(&config).await?;

            match tokio::time::timeout(config.acquire_timeout, backend.ping(&pool)).await {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    warn!(error = %err, "Liveness probe failed on fresh connection pool");
                    return Err(err);
                }
                Err(_) => {
                    warn!(
                        timeout_secs = config.acquire_timeout.as_secs(),
                        "Liveness probe timed out on fresh connection pool"
                    );
                    return Err(ConnectionError::PingFailed(sqlx::Error::PoolTimedOut));
                }
            }

            info!(
                max_connections = config.max_connections,
                "Opened new database connection pool"
            );
            *slot = Some(PoolEntry {
                pool: pool.clone(),
                created_at: Instant::now(),
            });
            Ok(pool)
        });

        match reopen.await {
            Ok(result) => result,
            Err(err) => {
                warn!(error = %err, "Connection pool reopen task failed");
                Err(ConnectionError::OpenFailed(sqlx::Error::WorkerCrashed))
            }
        }
    }
}
