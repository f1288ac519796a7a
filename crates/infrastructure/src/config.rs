use std::env;

use garrison_core::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

/// Runtime configuration for the directory adapters.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// PostgreSQL connection string for the directory store.
    pub database_url: String,
    /// Maximum pooled connections.
    pub max_connections: u32,
    /// Ttl for cached permission views; `0` disables caching.
    pub permission_cache_ttl_seconds: u32,
}

impl DirectoryConfig {
    /// Loads configuration from the environment, reading `.env` first.
    pub fn load() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let database_url = required_env("DATABASE_URL")?;
        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(10);
        let permission_cache_ttl_seconds = env::var("PERMISSION_CACHE_TTL_SECONDS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(300);

        Ok(Self {
            database_url,
            max_connections,
            permission_cache_ttl_seconds,
        })
    }
}

/// Initialises the process-wide tracing subscriber.
///
/// Filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn required_env(name: &str) -> AppResult<String> {
    env::var(name).map_err(|_| AppError::Validation(format!("{name} is required")))
}
