//! Units JSON API Server

use std::process;

use salvo::{
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
};
use tracing::{error, info};

use units_app::context::AppContext;

use crate::{config::ServerConfig, router::app_router, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod config;
mod cors;
mod envelope;
mod extensions;
mod healthcheck;
mod observability;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;
mod units;

/// Units JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Observability error: {init_error}");
        }

        process::exit(1);
    }

    let cors = match cors::build(&config.cors) {
        Ok(cors) => cors,
        Err(cors_error) => {
            error!("invalid CORS configuration: {cors_error}");

            process::exit(1);
        }
    };

    let app = match AppContext::from_database_url(
        &config.database.dsn,
        config.database.pool_settings(),
    )
    .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let router = app_router(State::from_app_context(app.clone()));

    let doc = OpenApi::new("Units API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(Service::new(router).hoop(cors)).await;

    app.close().await;

    info!("server stopped");
}
