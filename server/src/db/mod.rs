//! Database initialization and migration runner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup uses this module to create the shared SQLx pool and enforce schema
//! migrations before accepting API traffic.

use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::config::DbSettings;

/// Postgres `statement_timeout` value for the given settings.
fn statement_timeout_param(settings: &DbSettings) -> String {
    format!("{}ms", settings.query_timeout.as_millis())
}

/// Initialize the `PostgreSQL` connection pool and run migrations.
///
/// # Errors
///
/// Returns an error if the URL is malformed, or the connection or migrations fail.
pub async fn init_pool(database_url: &str, settings: &DbSettings) -> Result<PgPool, sqlx::Error> {
    let timeout = statement_timeout_param(settings);
    let options = database_url
        .parse::<PgConnectOptions>()?
        .options([("statement_timeout", timeout.as_str())]);

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.query_timeout)
        .connect_with(options)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;

    Ok(pool)
}
