//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use sqlx::{PgPool, migrate::MigrateError};
use thiserror::Error;

use crate::{
    database::{self, PoolSettings},
    domain::units::{MemoryUnitsRepository, PgUnitsRepository, UnitsDomainService, UnitsService},
};

/// Failures while building an [`AppContext`] from a database URL.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// Could not open the pool
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    /// Could not bring the schema up to date
    #[error("failed to run database migrations")]
    Migrations(#[source] MigrateError),
}

/// Application services shared by every request.
#[derive(Clone)]
pub struct AppContext {
    /// Unit catalogue operations
    pub units: Arc<dyn UnitsService>,
    pool: Option<PgPool>,
}

impl AppContext {
    /// Build a context around an existing units service, with no database attached.
    #[must_use]
    pub fn new(units: Arc<dyn UnitsService>) -> Self {
        Self { units, pool: None }
    }

    /// Build a context whose units live only in process memory.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(UnitsDomainService::new(Arc::new(
            MemoryUnitsRepository::new(),
        ))))
    }

    /// Build a context backed by an already connected pool.
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            units: Arc::new(UnitsDomainService::new(Arc::new(PgUnitsRepository::new(
                pool.clone(),
            )))),
            pool: Some(pool),
        }
    }

    /// Build application context from a database URL, applying migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_database_url(url: &str, settings: PoolSettings) -> Result<Self, AppInitError> {
        let pool = database::connect(url, settings)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrations)?;

        Ok(Self::from_pool(pool))
    }

    /// Close the database pool, if any, waiting for connections to be returned.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext")
            .field("database", &self.pool.is_some())
            .finish_non_exhaustive()
    }
}
