//! Unit Types and Statuses

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of physical space a unit is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    /// Sleeping capsule.
    #[serde(rename = "capsule")]
    Capsule,

    /// Cabin.
    #[serde(rename = "cabin")]
    Cabin,
}

impl UnitType {
    /// Every unit type, in declaration order.
    pub const ALL: [Self; 2] = [Self::Capsule, Self::Cabin];

    /// Wire and storage spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Capsule => "capsule",
            Self::Cabin => "cabin",
        }
    }
}

impl Display for UnitType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known unit type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown unit type {0:?}")]
pub struct ParseUnitTypeError(String);

impl FromStr for UnitType {
    type Err = ParseUnitTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit_type| unit_type.as_str() == value)
            .ok_or_else(|| ParseUnitTypeError(value.to_owned()))
    }
}

/// Operational status of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitStatus {
    /// Ready for a guest.
    #[serde(rename = "Available")]
    Available,

    /// A guest is using the unit.
    #[serde(rename = "Occupied")]
    Occupied,

    /// Being cleaned.
    #[serde(rename = "Cleaning In Progress")]
    CleaningInProgress,

    /// Out of service until repaired.
    #[serde(rename = "Maintenance Needed")]
    MaintenanceNeeded,
}

impl UnitStatus {
    /// Every status, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Available,
        Self::Occupied,
        Self::CleaningInProgress,
        Self::MaintenanceNeeded,
    ];

    /// Wire and storage spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::CleaningInProgress => "Cleaning In Progress",
            Self::MaintenanceNeeded => "Maintenance Needed",
        }
    }

    /// Whether a single update may move a unit from `self` to `next`.
    ///
    /// An occupied unit has to pass through another status (usually
    /// cleaning) before it can be offered again.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        !matches!((self, next), (Self::Occupied, Self::Available))
    }
}

impl Display for UnitStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known unit status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown unit status {0:?}")]
pub struct ParseUnitStatusError(String);

impl FromStr for UnitStatus {
    type Err = ParseUnitStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| ParseUnitStatusError(value.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_type_parses_exact_spelling_only() {
        assert_eq!("capsule".parse(), Ok(UnitType::Capsule));
        assert_eq!("cabin".parse(), Ok(UnitType::Cabin));
        assert!("Cabin".parse::<UnitType>().is_err(), "parsing is case sensitive");
        assert!("x".parse::<UnitType>().is_err(), "unknown type should fail");
    }

    #[test]
    fn unit_status_parses_exact_spelling_only() {
        for status in UnitStatus::ALL {
            assert_eq!(status.as_str().parse(), Ok(status));
        }

        assert!(
            "available".parse::<UnitStatus>().is_err(),
            "parsing is case sensitive"
        );
        assert!(
            "CleaningInProgress".parse::<UnitStatus>().is_err(),
            "variant names are not accepted"
        );
    }

    #[test]
    fn only_occupied_to_available_is_forbidden() {
        for from in UnitStatus::ALL {
            for to in UnitStatus::ALL {
                let expected = !(from == UnitStatus::Occupied && to == UnitStatus::Available);

                assert_eq!(
                    from.can_transition_to(to),
                    expected,
                    "unexpected rule for {from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn serde_uses_wire_spelling() -> Result<(), serde_json::Error> {
        assert_eq!(
            serde_json::to_string(&UnitStatus::CleaningInProgress)?,
            "\"Cleaning In Progress\""
        );
        assert_eq!(serde_json::to_string(&UnitType::Capsule)?, "\"capsule\"");

        Ok(())
    }
}
