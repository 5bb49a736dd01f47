//! Shutdown signals for the servers.
//!
//! A server stops when its controller sends a [`Halted`] message through the
//! halt channel or when the process receives `Ctrl-C` or `SIGTERM`, whichever
//! comes first.
use std::time::Duration;

use derive_more::Display;
use tracing::{info, warn};

/// Time the open connections are given to finish after a shutdown signal.
pub const GRACE_PERIOD: Duration = Duration::from_secs(30);

/// The message a server controller sends to its running server to stop it.
#[derive(Copy, Clone, Debug, Display)]
pub enum Halted {
    Normal,
}

/// Resolves on `ctrl_c` or the `terminate` signal.
///
/// # Panics
///
/// Will panic if the signal handlers cannot be installed.
pub async fn global_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {}
    }
}

/// Resolves when the `rx_halt` channel or the `global_shutdown_signal()` resolves.
///
/// A closed halt channel counts as a halt: the controller is gone and nobody
/// can stop the server any more.
pub async fn shutdown_signal(rx_halt: tokio::sync::oneshot::Receiver<Halted>) {
    let halt = async {
        match rx_halt.await {
            Ok(signal) => info!("Halt signal processed: {signal}"),
            Err(err) => warn!("Halt channel closed: {err}"),
        }
    };

    tokio::select! {
        () = halt => {},
        () = global_shutdown_signal() => { info!("Global shutdown signal processed") }
    }
}

/// Waits for a shutdown signal and then asks the server behind `handle` to
/// stop, giving open connections the [`GRACE_PERIOD`] to finish.
pub async fn graceful_shutdown(handle: axum_server::Handle, rx_halt: tokio::sync::oneshot::Receiver<Halted>, message: String) {
    shutdown_signal(rx_halt).await;

    info!("{message}");

    handle.graceful_shutdown(Some(GRACE_PERIOD));

    info!(
        "Sending graceful shutdown signal, {} connections still open",
        handle.connection_count()
    );
}
