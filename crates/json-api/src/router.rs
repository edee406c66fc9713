//! App Router

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use crate::{healthcheck, observability::request_logging, state::State, units};

/// Every route the server answers, with shared middleware applied.
pub(crate) fn app_router(state: Arc<State>) -> Router {
    Router::new()
        .hoop(request_logging)
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("api/unit")
                .get(units::index::handler)
                .post(units::create::handler)
                .push(
                    Router::with_path("{unit}")
                        .get(units::get::handler)
                        .put(units::update::handler)
                        .delete(units::delete::handler),
                ),
        )
}
