//! Test Helpers

use crate::domain::units::data::UnitRequest;

pub(crate) fn unit_request(name: &str, unit_type: &str, status: &str) -> UnitRequest {
    UnitRequest {
        name: name.to_string(),
        unit_type: unit_type.to_string(),
        status: status.to_string(),
    }
}
