//! Database connection management

use std::time::Duration;

use sqlx::{PgPool, migrate::MigrateError, postgres::PgPoolOptions};
use tracing::info;

/// Connection pool bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    /// Upper bound on open connections
    pub max_connections: u32,

    /// Connections kept open even when idle
    pub min_connections: u32,

    /// Idle connections above `min_connections` are closed after this long
    pub idle_timeout: Duration,

    /// Connections are recycled after this long regardless of use
    pub max_lifetime: Duration,

    /// How long to wait for a free connection before giving up
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 100,
            min_connections: 0,
            idle_timeout: Duration::from_secs(600),
            max_lifetime: Duration::from_secs(3600),
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str, settings: PoolSettings) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .idle_timeout(settings.idle_timeout)
        .max_lifetime(settings.max_lifetime)
        .acquire_timeout(settings.acquire_timeout)
        .connect(database_url)
        .await?;

    info!(
        max_connections = settings.max_connections,
        min_connections = settings.min_connections,
        "connected to database"
    );

    Ok(pool)
}

/// Apply any pending migrations.
///
/// # Errors
///
/// Returns an error when a migration fails or the migration history is inconsistent.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
