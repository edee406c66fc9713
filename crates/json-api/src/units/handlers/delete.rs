//! Delete Unit Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    envelope::{ApiError, ApiResponse},
    extensions::*,
    state::State,
    units::errors::{into_api_error, parse_unit_uuid},
};

/// Delete Unit Handler
///
/// Soft-deletes a live unit; it disappears from every read afterwards.
#[endpoint(
    tags("units"),
    summary = "Delete Unit",
    responses(
        (status_code = StatusCode::OK, description = "Unit deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "No live unit with that id"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Storage failure"),
    ),
)]
#[tracing::instrument(name = "units.delete", skip_all, fields(unit = %unit.as_str()), err)]
pub(crate) async fn handler(
    unit: PathParam<String>,
    depot: &mut Depot,
) -> Result<ApiResponse<()>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let unit = parse_unit_uuid(&unit.into_inner())?;

    state
        .app
        .units
        .delete_by_id(unit)
        .await
        .map_err(into_api_error)?;

    Ok(ApiResponse::ok(()))
}
