//! Create Unit Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    envelope::{ApiError, ApiResponse},
    extensions::*,
    state::State,
    units::{errors::into_api_error, requests::read_unit_request, responses::UnitResponse},
};

/// Create Unit Handler
///
/// Body: `{name, type, status}`. Responds 201 with the stored unit.
#[endpoint(
    tags("units"),
    summary = "Create Unit",
    responses(
        (status_code = StatusCode::CREATED, description = "Unit created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or invalid field"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Undecodable body or storage failure"),
    ),
)]
#[tracing::instrument(name = "units.create", skip(req, depot), err)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<ApiResponse<UnitResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = read_unit_request(req).await?;

    let unit = state
        .app
        .units
        .create_unit(request)
        .await
        .map_err(into_api_error)?;

    Ok(ApiResponse::created(unit.into()))
}
