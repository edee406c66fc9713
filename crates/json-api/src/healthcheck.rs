//! Units JSON API Healthcheck Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::envelope::ApiResponse;

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HealthResponse {
    /// Service status
    pub status: String,
}

/// Healthcheck handler
///
/// Returns service health status
#[endpoint(
    tags("health"),
    summary = "Health check endpoint",
    responses((status_code = StatusCode::OK, description = "Service is up"))
)]
pub(crate) async fn handler() -> ApiResponse<HealthResponse> {
    ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
    })
}
