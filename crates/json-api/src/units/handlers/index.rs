//! Unit Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use units_app::domain::units::data::{PageRequest, UnitFilter};

use crate::{
    envelope::{ApiError, ApiResponse},
    extensions::*,
    state::State,
    units::{errors::into_api_error, responses::UnitsPageResponse},
};

/// Unit Index Handler
///
/// Returns one page of live units ordered by name. `name` matches any part of
/// the name regardless of case; `status` and `type` must match exactly.
#[endpoint(
    tags("units"),
    summary = "List Units",
    responses(
        (status_code = StatusCode::OK, description = "A page of units"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid page or size"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Storage failure"),
    ),
)]
#[tracing::instrument(name = "units.index", skip_all, err)]
pub(crate) async fn handler(
    page: QueryParam<String, false>,
    size: QueryParam<String, false>,
    name: QueryParam<String, false>,
    status: QueryParam<String, false>,
    _type: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<ApiResponse<UnitsPageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let page = PageRequest::new(
        page.into_positive_or("page", PageRequest::DEFAULT_PAGE)?,
        size.into_positive_or("size", PageRequest::DEFAULT_SIZE)?,
    );

    #[expect(
        clippy::used_underscore_binding,
        reason = "the extractor trims the underscore, so this reads the `type` query key"
    )]
    let unit_type = _type.into_filter();

    let filter = UnitFilter {
        status: status.into_filter(),
        unit_type,
        name: name.into_filter(),
    };

    let units = state
        .app
        .units
        .find_units(filter, page)
        .await
        .map_err(into_api_error)?;

    Ok(ApiResponse::ok(units.into()))
}
