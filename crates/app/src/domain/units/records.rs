//! Unit Records

use jiff::Timestamp;

use crate::{
    domain::units::types::{UnitStatus, UnitType},
    uuids::TypedUuid,
};

/// Unit UUID
pub type UnitUuid = TypedUuid<UnitRecord>;

/// A stored unit, including its soft-delete marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitRecord {
    /// Unit UUID
    pub uuid: UnitUuid,

    /// Display name
    pub name: String,

    /// Capsule or cabin
    pub unit_type: UnitType,

    /// Current status
    pub status: UnitStatus,

    /// Set on create and on every successful update
    pub last_updated: Timestamp,

    /// Set once the unit has been deleted
    pub deleted_at: Option<Timestamp>,
}

impl UnitRecord {
    /// Whether the unit is still visible to readers.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.deleted_at.is_none()
    }
}

/// Read-only projection of a unit without its timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSummary {
    /// Unit UUID
    pub uuid: UnitUuid,

    /// Display name
    pub name: String,

    /// Capsule or cabin
    pub unit_type: UnitType,

    /// Current status
    pub status: UnitStatus,
}

impl From<UnitRecord> for UnitSummary {
    fn from(record: UnitRecord) -> Self {
        Self {
            uuid: record.uuid,
            name: record.name,
            unit_type: record.unit_type,
            status: record.status,
        }
    }
}

impl From<&UnitRecord> for UnitSummary {
    fn from(record: &UnitRecord) -> Self {
        Self {
            uuid: record.uuid,
            name: record.name.clone(),
            unit_type: record.unit_type,
            status: record.status,
        }
    }
}
