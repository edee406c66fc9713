//! Units Repository

use std::str::FromStr;

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::units::{
    data::{NewUnit, PageRequest, UnitFilter},
    errors::UnitsRepositoryError,
    records::{UnitRecord, UnitSummary, UnitUuid},
};

const CREATE_UNIT_SQL: &str = include_str!("sql/create_unit.sql");
const GET_UNIT_SQL: &str = include_str!("sql/get_unit.sql");
const UPDATE_UNIT_SQL: &str = include_str!("sql/update_unit.sql");
const DELETE_UNIT_SQL: &str = include_str!("sql/delete_unit.sql");
const LIST_UNITS_SQL: &str = include_str!("sql/list_units.sql");
const COUNT_UNITS_SQL: &str = include_str!("sql/count_units.sql");

/// Persistence for units. Every read ignores soft-deleted rows.
#[automock]
#[async_trait]
pub trait UnitsRepository: Send + Sync {
    /// Insert a new unit, stamping `last_updated` with the current time.
    async fn create(&self, unit: NewUnit) -> Result<UnitRecord, UnitsRepositoryError>;

    /// Fetch a live unit.
    async fn get_by_id(&self, unit: UnitUuid) -> Result<UnitRecord, UnitsRepositoryError>;

    /// Soft-delete a live unit.
    async fn delete(&self, unit: UnitUuid) -> Result<(), UnitsRepositoryError>;

    /// One page of live units matching `filter`, ordered by name then id,
    /// alongside the number of matches across all pages.
    async fn find_all(
        &self,
        filter: UnitFilter,
        page: PageRequest,
    ) -> Result<(Vec<UnitSummary>, u64), UnitsRepositoryError>;

    /// Overwrite the mutable fields of a live unit.
    async fn update(&self, unit: UnitRecord) -> Result<(), UnitsRepositoryError>;
}

/// Postgres-backed units repository.
#[derive(Debug, Clone)]
pub struct PgUnitsRepository {
    pool: PgPool,
}

impl PgUnitsRepository {
    /// Create a repository over the given pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnitsRepository for PgUnitsRepository {
    async fn create(&self, unit: NewUnit) -> Result<UnitRecord, UnitsRepositoryError> {
        let record = query_as::<Postgres, UnitRecord>(CREATE_UNIT_SQL)
            .bind(unit.uuid.into_uuid())
            .bind(unit.name)
            .bind(unit.unit_type.as_str())
            .bind(unit.status.as_str())
            .fetch_one(&self.pool)
            .await?;

        Ok(record)
    }

    async fn get_by_id(&self, unit: UnitUuid) -> Result<UnitRecord, UnitsRepositoryError> {
        let record = query_as::<Postgres, UnitRecord>(GET_UNIT_SQL)
            .bind(unit.into_uuid())
            .fetch_one(&self.pool)
            .await?;

        Ok(record)
    }

    async fn delete(&self, unit: UnitUuid) -> Result<(), UnitsRepositoryError> {
        let rows_affected = query(DELETE_UNIT_SQL)
            .bind(unit.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(UnitsRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn find_all(
        &self,
        filter: UnitFilter,
        page: PageRequest,
    ) -> Result<(Vec<UnitSummary>, u64), UnitsRepositoryError> {
        let total: i64 = query_scalar(COUNT_UNITS_SQL)
            .bind(filter.status())
            .bind(filter.unit_type())
            .bind(filter.name())
            .fetch_one(&self.pool)
            .await?;

        let units = query_as::<Postgres, UnitSummary>(LIST_UNITS_SQL)
            .bind(filter.status())
            .bind(filter.unit_type())
            .bind(filter.name())
            .bind(page.size)
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok((units, u64::try_from(total).unwrap_or_default()))
    }

    async fn update(&self, unit: UnitRecord) -> Result<(), UnitsRepositoryError> {
        let rows_affected = query(UPDATE_UNIT_SQL)
            .bind(unit.uuid.into_uuid())
            .bind(unit.name)
            .bind(unit.unit_type.as_str())
            .bind(unit.status.as_str())
            .bind(SqlxTimestamp::from(unit.last_updated))
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(UnitsRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn decode_text<T>(row: &PgRow, column: &str) -> sqlx::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    row.try_get::<String, _>(column)?
        .parse()
        .map_err(|e: T::Err| sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: Box::new(e),
        })
}

impl<'r> FromRow<'r, PgRow> for UnitRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: UnitUuid::from_uuid(row.try_get("id")?),
            name: row.try_get("name")?,
            unit_type: decode_text(row, "type")?,
            status: decode_text(row, "status")?,
            last_updated: row.try_get::<SqlxTimestamp, _>("last_updated")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for UnitSummary {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: UnitUuid::from_uuid(row.try_get("id")?),
            name: row.try_get("name")?,
            unit_type: decode_text(row, "type")?,
            status: decode_text(row, "status")?,
        })
    }
}
