//! Database Config

use std::time::Duration;

use clap::Args;

use units_app::database::PoolSettings;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long = "db-dsn", env = "DB_DSN")]
    pub dsn: String,

    /// Maximum open connections
    #[arg(long = "db-max-connections", env = "DB_MAX_CONNECTIONS", default_value_t = 100)]
    pub max_connections: u32,

    /// Connections kept open while idle
    #[arg(long = "db-min-connections", env = "DB_MIN_CONNECTIONS", default_value_t = 0)]
    pub min_connections: u32,

    /// Seconds before an idle connection above the minimum is closed
    #[arg(
        long = "db-idle-timeout-seconds",
        env = "DB_IDLE_TIMEOUT_SECONDS",
        default_value_t = 600
    )]
    pub idle_timeout_seconds: u64,

    /// Seconds before a connection is recycled
    #[arg(
        long = "db-conn-max-lifetime-seconds",
        env = "DB_CONN_MAX_LIFETIME_SECONDS",
        default_value_t = 3600
    )]
    pub conn_max_lifetime_seconds: u64,

    /// Seconds to wait for a free connection
    #[arg(
        long = "db-acquire-timeout-seconds",
        env = "DB_ACQUIRE_TIMEOUT_SECONDS",
        default_value_t = 30
    )]
    pub acquire_timeout_seconds: u64,
}

impl DatabaseConfig {
    /// Pool bounds derived from these settings.
    #[must_use]
    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.max_connections,
            min_connections: self.min_connections,
            idle_timeout: Duration::from_secs(self.idle_timeout_seconds),
            max_lifetime: Duration::from_secs(self.conn_max_lifetime_seconds),
            acquire_timeout: Duration::from_secs(self.acquire_timeout_seconds),
        }
    }
}
