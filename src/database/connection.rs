use crate::{
    config::DatabaseConfig,
    error::{AppError, Result},
};
use sqlx::{postgres::PgPoolOptions, PgPool};

/// Connects and brings the products schema up to date before the server
/// starts accepting requests.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| AppError::Internal(format!("Migration failed: {}", e)))?;

    tracing::info!(
        max_connections = config.max_connections,
        "Products database ready"
    );

    Ok(pool)
}
