//! Request-level logging and request IDs.

mod ids;
mod routes;

use std::time::Instant;

use salvo::{
    Request, handler,
    http::StatusCode,
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::Instrument as _;
use tracing::{error, info, warn};

use super::settings;

const REQUEST_ID_DEPOT_KEY: &str = "request_id";

#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let started = Instant::now();

    let request_id = ids::resolve(req.header::<String>(ids::REQUEST_ID_HEADER));

    depot.insert(REQUEST_ID_DEPOT_KEY, request_id.clone());

    ids::echo(res, &request_id);

    let method = req.method().to_string();
    let path = req.uri().path().to_owned();
    let route = routes::route_template(&path);
    let remote_addr = req.remote_addr().to_string();

    let span = tracing::info_span!(
        parent: None,
        "http.request",
        request_id = %request_id,
        method = %method,
        path = %path,
        route = %route,
        remote_addr = %remote_addr,
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty
    );

    ctrl.call_next(req, depot, res)
        .instrument(span.clone())
        .await;

    let status = res.status_code.unwrap_or(StatusCode::OK);
    let duration_ms = started.elapsed().as_millis();
    let threshold_ms = u128::from(settings::slow_request_threshold_ms());

    span.record("status", status.as_u16());
    span.record("duration_ms", duration_ms);

    span.in_scope(|| {
        info!(status = status.as_u16(), duration_ms, "request.completed");

        if status.is_server_error() {
            error!(
                status = status.as_u16(),
                method = %method,
                route = %route,
                request_id = %request_id,
                "server error response"
            );
        } else if status.is_client_error() {
            warn!(
                status = status.as_u16(),
                method = %method,
                route = %route,
                request_id = %request_id,
                "client error response"
            );
        }

        if duration_ms > threshold_ms {
            warn!(
                method = %method,
                route = %route,
                request_id = %request_id,
                duration_ms,
                threshold_ms,
                "slow request detected"
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use salvo::{prelude::*, test::TestClient};

    use super::*;

    #[handler]
    async fn ok() -> &'static str {
        "ok"
    }

    fn service() -> Service {
        Service::new(
            Router::new()
                .hoop(request_logging)
                .push(Router::with_path("ping").get(ok)),
        )
    }

    #[tokio::test]
    async fn echoes_incoming_request_id() {
        let res = TestClient::get("http://example.com/ping")
            .add_header(ids::REQUEST_ID_HEADER, "abc-123", true)
            .send(&service())
            .await;

        let echoed = res
            .headers()
            .get(ids::REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok());

        assert_eq!(echoed, Some("abc-123"));
    }

    #[tokio::test]
    async fn generates_request_id_when_missing() {
        let res = TestClient::get("http://example.com/ping")
            .send(&service())
            .await;

        let generated = res
            .headers()
            .get(ids::REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::len);

        assert_eq!(generated, Some(36), "generated ids are uuids");
    }
}
