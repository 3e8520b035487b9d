//! Database connection pool management
//!
//! One `PgPool` is built at startup and shared by every request.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the first connection cannot be established.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        max_connections = DEFAULT_MAX_CONNECTIONS,
        "connecting to postgres"
    );
    PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_with(config.connect_options())
        .await
}
