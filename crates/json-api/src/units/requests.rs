//! Unit request bodies

use salvo::{Request, oapi::ToSchema};
use serde::{Deserialize, Serialize};

use units_app::domain::units::data::UnitRequest;

use crate::{envelope::ApiError, extensions::*};

const MAX_NAME_CHARS: usize = 255;

/// Create and update body; both routes accept the same shape.
///
/// Absent and `null` fields both read as empty.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UnitPayload {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// `capsule` or `cabin`
    #[serde(default, rename = "type")]
    pub unit_type: Option<String>,

    /// `Available`, `Occupied`, `Cleaning In Progress` or `Maintenance Needed`
    #[serde(default)]
    pub status: Option<String>,
}

impl UnitPayload {
    /// Check required fields before anything reaches the service.
    pub(crate) fn validate(self) -> Result<UnitRequest, ApiError> {
        let name = self.name.unwrap_or_default();
        let unit_type = self.unit_type.unwrap_or_default();
        let status = self.status.unwrap_or_default();

        if name.trim().is_empty() {
            return Err(ApiError::bad_request("unit name is required"));
        }

        if status.trim().is_empty() {
            return Err(ApiError::bad_request("unit status is required"));
        }

        if unit_type.trim().is_empty() {
            return Err(ApiError::bad_request("unit type is required"));
        }

        if name.chars().count() > MAX_NAME_CHARS {
            return Err(ApiError::bad_request(format!(
                "unit name must be at most {MAX_NAME_CHARS} characters"
            )));
        }

        Ok(UnitRequest {
            name,
            unit_type,
            status,
        })
    }
}

/// Decode and validate a unit body.
///
/// Bodies that fail to decode are reported as internal errors carrying the decoder message.
pub(crate) async fn read_unit_request(req: &mut Request) -> Result<UnitRequest, ApiError> {
    req.parse_json::<UnitPayload>()
        .await
        .or_500("failed to decode unit payload")?
        .validate()
}
