//! Logic to run the Health Check HTTP API server.
//!
//! This API is intended to be used by the container infrastructure to check if
//! the whole application is healthy.
use std::net::SocketAddr;

use axum::routing::get;
use axum::{Json, Router};
use axum_server::Handle;
use futures::Future;
use serde_json::json;
use tokio::sync::oneshot::{Receiver, Sender};
use tracing::warn;

use super::handlers::{health_check_handler, HealthCheckState};
use super::HEALTH_CHECK_API_LOG_TARGET;
use crate::bootstrap::jobs::Started;
use crate::servers::signals::{graceful_shutdown, Halted};

/// Starts Health Check API server.
///
/// It binds the socket, notifies the bound address through `tx` and returns
/// the server future. The server stops when `rx_halt` receives a message or
/// the process gets a shutdown signal.
///
/// # Errors
///
/// Will return an error if binding to the socket address fails.
pub fn start(
    address: SocketAddr,
    tx: Sender<Started>,
    rx_halt: Receiver<Halted>,
    state: HealthCheckState,
) -> Result<impl Future<Output = Result<(), std::io::Error>>, std::io::Error> {
    let app = Router::new()
        .route("/", get(|| async { Json(json!({})) }))
        .route("/health_check", get(health_check_handler))
        .with_state(state);

    let socket = std::net::TcpListener::bind(address)?;
    socket.set_nonblocking(true)?;
    let address = socket.local_addr()?;

    let handle = Handle::new();

    tokio::task::spawn(graceful_shutdown(
        handle.clone(),
        rx_halt,
        format!("Shutting down health check API on http://{address}"),
    ));

    let running = axum_server::from_tcp(socket)
        .handle(handle)
        .serve(app.into_make_service_with_connect_info::<SocketAddr>());

    if tx.send(Started { address }).is_err() {
        warn!(target: HEALTH_CHECK_API_LOG_TARGET, "nobody is waiting for the health check API start notice");
    }

    Ok(running)
}
