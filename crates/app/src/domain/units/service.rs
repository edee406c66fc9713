//! Units service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{debug, info};

use crate::domain::units::{
    data::{NewUnit, Page, PageRequest, UnitFilter, UnitRequest},
    errors::{UnitsRepositoryError, UnitsServiceError},
    records::{UnitRecord, UnitSummary, UnitUuid},
    repository::UnitsRepository,
    types::{UnitStatus, UnitType},
};

/// Units service backed by any [`UnitsRepository`].
#[derive(Clone)]
pub struct UnitsDomainService {
    repository: Arc<dyn UnitsRepository>,
}

impl UnitsDomainService {
    /// Create a service over the given repository.
    #[must_use]
    pub fn new(repository: Arc<dyn UnitsRepository>) -> Self {
        Self { repository }
    }
}

impl Debug for UnitsDomainService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("UnitsDomainService").finish_non_exhaustive()
    }
}

fn parse_status(value: &str) -> Result<UnitStatus, UnitsServiceError> {
    value.parse().ok().ok_or(UnitsServiceError::InvalidStatus)
}

fn parse_type(value: &str) -> Result<UnitType, UnitsServiceError> {
    value.parse().ok().ok_or(UnitsServiceError::InvalidType)
}

#[async_trait]
impl UnitsService for UnitsDomainService {
    async fn create_unit(&self, request: UnitRequest) -> Result<UnitRecord, UnitsServiceError> {
        let status = parse_status(&request.status)?;
        let unit_type = parse_type(&request.unit_type)?;

        let created = self
            .repository
            .create(NewUnit {
                uuid: UnitUuid::new(),
                name: request.name,
                unit_type,
                status,
            })
            .await
            .map_err(UnitsServiceError::Storage)?;

        info!(unit.uuid = %created.uuid, unit.status = %created.status, "created unit");

        Ok(created)
    }

    async fn find_by_id(&self, unit: UnitUuid) -> Result<UnitRecord, UnitsServiceError> {
        self.repository
            .get_by_id(unit)
            .await
            .map_err(|error| match error {
                UnitsRepositoryError::NotFound => UnitsServiceError::NotFound,
                other => UnitsServiceError::Storage(other),
            })
    }

    async fn get_detail_by_id(&self, unit: UnitUuid) -> Result<UnitSummary, UnitsServiceError> {
        self.find_by_id(unit).await.map(UnitSummary::from)
    }

    async fn delete_by_id(&self, unit: UnitUuid) -> Result<(), UnitsServiceError> {
        let existing = self.find_by_id(unit).await?;

        self.repository
            .delete(existing.uuid)
            .await
            .map_err(UnitsServiceError::Storage)?;

        info!(unit.uuid = %existing.uuid, "deleted unit");

        Ok(())
    }

    async fn find_units(
        &self,
        filter: UnitFilter,
        page: PageRequest,
    ) -> Result<Page<UnitSummary>, UnitsServiceError> {
        let (content, total) = self
            .repository
            .find_all(filter, page)
            .await
            .map_err(UnitsServiceError::Storage)?;

        debug!(page = page.page, size = page.size, total, "listed units");

        Ok(Page::new(page, total, content))
    }

    async fn update_unit(
        &self,
        unit: UnitUuid,
        request: UnitRequest,
    ) -> Result<UnitRecord, UnitsServiceError> {
        let mut current = self.find_by_id(unit).await?;

        let unit_type = parse_type(&request.unit_type)?;
        let status = parse_status(&request.status)?;

        if !current.status.can_transition_to(status) {
            return Err(UnitsServiceError::ForbiddenTransition);
        }

        let previous = current.status;

        current.name = request.name;
        current.unit_type = unit_type;
        current.status = status;
        current.last_updated = Timestamp::now().max(current.last_updated);

        self.repository
            .update(current.clone())
            .await
            .map_err(UnitsServiceError::Storage)?;

        info!(
            unit.uuid = %current.uuid,
            from = %previous,
            to = %current.status,
            "updated unit"
        );

        Ok(current)
    }
}

#[automock]
#[async_trait]
pub trait UnitsService: Send + Sync {
    /// Validate and store a new unit with a fresh id.
    async fn create_unit(&self, request: UnitRequest) -> Result<UnitRecord, UnitsServiceError>;

    /// Fetch a live unit.
    async fn find_by_id(&self, unit: UnitUuid) -> Result<UnitRecord, UnitsServiceError>;

    /// Fetch the detail projection of a live unit.
    async fn get_detail_by_id(&self, unit: UnitUuid) -> Result<UnitSummary, UnitsServiceError>;

    /// Soft-delete a live unit.
    async fn delete_by_id(&self, unit: UnitUuid) -> Result<(), UnitsServiceError>;

    /// Filtered, paginated listing of live units.
    async fn find_units(
        &self,
        filter: UnitFilter,
        page: PageRequest,
    ) -> Result<Page<UnitSummary>, UnitsServiceError>;

    /// Replace the name, type and status of a live unit.
    ///
    /// Existence is checked first, then the type, then the status, and
    /// finally whether the status change is allowed.
    async fn update_unit(
        &self,
        unit: UnitUuid,
        request: UnitRequest,
    ) -> Result<UnitRecord, UnitsServiceError>;
}
