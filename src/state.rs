use crate::config::cors::CorsConfig;
use crate::config::database::DatabaseConfig;
use crate::config::jwt::JwtConfig;
use crate::config::stats::StatsConfig;
use crate::db::ConnectionManager;
use crate::modules::stats::client::StatsClient;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: ConnectionManager,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub stats: StatsClient,
}

/// Build the application state from the environment. The connection manager
/// is lazy, so no database connection is made here.
pub fn init_app_state() -> AppState {
    AppState {
        db: ConnectionManager::new(DatabaseConfig::from_env()),
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        stats: StatsClient::new(StatsConfig::from_env()),
    }
}
