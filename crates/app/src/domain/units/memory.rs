//! In-memory Units Repository

use std::collections::HashMap;

use async_trait::async_trait;
use jiff::Timestamp;
use tokio::sync::RwLock;

use crate::domain::units::{
    data::{NewUnit, PageRequest, UnitFilter},
    errors::UnitsRepositoryError,
    records::{UnitRecord, UnitSummary, UnitUuid},
    repository::UnitsRepository,
};

/// Units repository that keeps everything in process memory.
///
/// Behaves like [`PgUnitsRepository`](super::PgUnitsRepository), including
/// soft deletes, filtering and ordering. Names sort by byte value, which the
/// Postgres listing matches with the `C` collation.
#[derive(Debug, Default)]
pub struct MemoryUnitsRepository {
    units: RwLock<HashMap<UnitUuid, UnitRecord>>,
}

impl MemoryUnitsRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn is_match(unit: &UnitRecord, filter: &UnitFilter) -> bool {
    unit.is_live()
        && filter
            .status()
            .is_none_or(|status| unit.status.as_str() == status)
        && filter
            .unit_type()
            .is_none_or(|unit_type| unit.unit_type.as_str() == unit_type)
        && filter.name().is_none_or(|name| {
            unit.name
                .to_lowercase()
                .contains(&name.to_lowercase())
        })
}

#[async_trait]
impl UnitsRepository for MemoryUnitsRepository {
    async fn create(&self, unit: NewUnit) -> Result<UnitRecord, UnitsRepositoryError> {
        let mut units = self.units.write().await;

        if units.contains_key(&unit.uuid) {
            return Err(UnitsRepositoryError::AlreadyExists);
        }

        let record = UnitRecord {
            uuid: unit.uuid,
            name: unit.name,
            unit_type: unit.unit_type,
            status: unit.status,
            last_updated: Timestamp::now(),
            deleted_at: None,
        };

        units.insert(record.uuid, record.clone());

        Ok(record)
    }

    async fn get_by_id(&self, unit: UnitUuid) -> Result<UnitRecord, UnitsRepositoryError> {
        self.units
            .read()
            .await
            .get(&unit)
            .filter(|record| record.is_live())
            .cloned()
            .ok_or(UnitsRepositoryError::NotFound)
    }

    async fn delete(&self, unit: UnitUuid) -> Result<(), UnitsRepositoryError> {
        let mut units = self.units.write().await;

        let record = units
            .get_mut(&unit)
            .filter(|record| record.is_live())
            .ok_or(UnitsRepositoryError::NotFound)?;

        record.deleted_at = Some(Timestamp::now());

        Ok(())
    }

    async fn find_all(
        &self,
        filter: UnitFilter,
        page: PageRequest,
    ) -> Result<(Vec<UnitSummary>, u64), UnitsRepositoryError> {
        let units = self.units.read().await;

        let mut matching: Vec<&UnitRecord> = units
            .values()
            .filter(|unit| is_match(unit, &filter))
            .collect();

        matching.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.uuid.cmp(&b.uuid)));

        let total = u64::try_from(matching.len()).unwrap_or(u64::MAX);
        let offset = usize::try_from(page.offset()).unwrap_or(0);
        let size = usize::try_from(page.size).unwrap_or(0);

        let content = matching
            .into_iter()
            .skip(offset)
            .take(size)
            .map(UnitSummary::from)
            .collect();

        Ok((content, total))
    }

    async fn update(&self, unit: UnitRecord) -> Result<(), UnitsRepositoryError> {
        let mut units = self.units.write().await;

        let record = units
            .get_mut(&unit.uuid)
            .filter(|record| record.is_live())
            .ok_or(UnitsRepositoryError::NotFound)?;

        record.name = unit.name;
        record.unit_type = unit.unit_type;
        record.status = unit.status;
        record.last_updated = unit.last_updated;

        Ok(())
    }
}
