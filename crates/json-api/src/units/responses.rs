//! Unit response views

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use units_app::domain::units::{
    data::Page,
    records::{UnitRecord, UnitSummary},
};

/// A unit as returned by create and update.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UnitResponse {
    /// Unit id
    pub id: String,

    /// Display name
    pub name: String,

    /// `capsule` or `cabin`
    #[serde(rename = "type")]
    pub unit_type: String,

    /// Current status
    pub status: String,

    /// RFC 3339 time of the last change
    pub last_updated: String,
}

impl From<UnitRecord> for UnitResponse {
    fn from(unit: UnitRecord) -> Self {
        Self {
            id: unit.uuid.to_string(),
            name: unit.name,
            unit_type: unit.unit_type.to_string(),
            status: unit.status.to_string(),
            last_updated: unit.last_updated.to_string(),
        }
    }
}

/// A unit as returned by get and list.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UnitDetailResponse {
    /// Unit id
    pub id: String,

    /// Display name
    pub name: String,

    /// `capsule` or `cabin`
    #[serde(rename = "type")]
    pub unit_type: String,

    /// Current status
    pub status: String,
}

impl From<UnitSummary> for UnitDetailResponse {
    fn from(unit: UnitSummary) -> Self {
        Self {
            id: unit.uuid.to_string(),
            name: unit.name,
            unit_type: unit.unit_type.to_string(),
            status: unit.status.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaginationResponse {
    pub page: i64,
    pub size: i64,
    pub total: u64,
    pub total_pages: u64,
}

/// One page of units.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UnitsPageResponse {
    pub pagination: PaginationResponse,
    pub content: Vec<UnitDetailResponse>,
}

impl From<Page<UnitSummary>> for UnitsPageResponse {
    fn from(page: Page<UnitSummary>) -> Self {
        Self {
            pagination: PaginationResponse {
                page: page.page,
                size: page.size,
                total: page.total,
                total_pages: page.total_pages(),
            },
            content: page.content.into_iter().map(Into::into).collect(),
        }
    }
}
