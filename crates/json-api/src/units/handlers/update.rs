//! Update Unit Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    envelope::{ApiError, ApiResponse},
    extensions::*,
    state::State,
    units::{
        errors::{into_api_error, parse_unit_uuid},
        requests::read_unit_request,
        responses::UnitResponse,
    },
};

/// Update Unit Handler
///
/// Replaces the name, type and status of a live unit. An occupied unit
/// cannot be made available in a single update.
#[endpoint(
    tags("units"),
    summary = "Update Unit",
    responses(
        (status_code = StatusCode::OK, description = "Unit updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or invalid field, or forbidden status change"),
        (status_code = StatusCode::NOT_FOUND, description = "No live unit with that id"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Undecodable body or storage failure"),
    ),
)]
#[tracing::instrument(name = "units.update", skip_all, fields(unit = %unit.as_str()), err)]
pub(crate) async fn handler(
    unit: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<ApiResponse<UnitResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = read_unit_request(req).await?;
    let unit = parse_unit_uuid(&unit.into_inner())?;

    let updated = state
        .app
        .units
        .update_unit(unit, request)
        .await
        .map_err(into_api_error)?;

    Ok(ApiResponse::ok(updated.into()))
}
