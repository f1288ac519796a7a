use garrison_core::{AppError, AppResult};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::DirectoryConfig;

/// Connects to the directory database and runs embedded migrations.
pub async fn connect_and_migrate(config: &DirectoryConfig) -> AppResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(config.database_url.as_str())
        .await
        .map_err(|error| AppError::Internal(format!("failed to connect to database: {error}")))?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to run migrations: {error}")))?;

    Ok(pool)
}
