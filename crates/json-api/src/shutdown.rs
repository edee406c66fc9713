//! Graceful shutdown on termination signals

use std::{fmt, io};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install interrupt handler: {0}")]
    Interrupt(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install terminate handler: {0}")]
    Terminate(#[source] io::Error),
}

/// Signal that asked the process to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Signal {
    Interrupt,
    Terminate,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Interrupt => "interrupt",
            Self::Terminate => "terminate",
        })
    }
}

async fn interrupt() -> Result<Signal, ShutdownSignalError> {
    signal::ctrl_c()
        .await
        .map_err(ShutdownSignalError::Interrupt)?;

    Ok(Signal::Interrupt)
}

#[cfg(unix)]
async fn terminate() -> Result<Signal, ShutdownSignalError> {
    signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(ShutdownSignalError::Terminate)?
        .recv()
        .await;

    Ok(Signal::Terminate)
}

#[cfg(not(unix))]
async fn terminate() -> Result<Signal, ShutdownSignalError> {
    std::future::pending().await
}

/// Wait for an interrupt or terminate signal, then let in-flight requests finish.
pub(crate) async fn listen(handle: ServerHandle) -> Result<Signal, ShutdownSignalError> {
    let signal = tokio::select! {
        result = interrupt() => result?,
        result = terminate() => result?,
    };

    info!(%signal, "shutdown signal received, draining connections");

    handle.stop_graceful(None);

    Ok(signal)
}
