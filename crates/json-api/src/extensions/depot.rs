//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::Depot;

use crate::envelope::ApiError;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>()
            .map_err(|_ignored| ApiError::internal("application state is unavailable"))
    }
}
