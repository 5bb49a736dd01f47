//! Health Check API job starter.
//!
//! The [`health_check_api::start_job`](crate::bootstrap::jobs::health_check_api::start_job)
//! function spawns a new asynchronous task, that task is the "**launcher**".
//! The "**launcher**" starts the actual server and sends a message back
//! to the main application.
//!
//! Refer to the [configuration crate documentation](api_service_configuration)
//! for the API configuration options.
use std::net::SocketAddr;
use std::sync::Arc;

use api_service_configuration::HealthCheckApi;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use super::Started;
use crate::core::Backend;
use crate::servers::health_check_api::handlers::HealthCheckState;
use crate::servers::health_check_api::{server, HEALTH_CHECK_API_LOG_TARGET};
use crate::servers::signals::Halted;
use crate::servers::STARTED_ON;

/// This function starts a new Health Check API server with the provided
/// configuration. `api_address` is the address of the running main API.
///
/// The functions starts a new concurrent task that will run the API server.
/// This task will send a message to the main application process to notify
/// that the API server was successfully started.
///
/// # Panics
///
/// It would panic if the server cannot be bound.
pub async fn start_job(config: &HealthCheckApi, backend: Arc<Backend>, api_address: SocketAddr) -> JoinHandle<()> {
    let bind_addr = config.bind_address;

    let (tx_start, rx_start) = oneshot::channel::<Started>();
    let (tx_halt, rx_halt) = oneshot::channel::<Halted>();

    let protocol = "http";

    let state = HealthCheckState::new(backend, api_address);

    // Run the API server
    let join_handle = tokio::spawn(async move {
        tracing::info!(target: HEALTH_CHECK_API_LOG_TARGET, "Starting on: {protocol}://{}", bind_addr);

        let running = match server::start(bind_addr, tx_start, rx_halt, state) {
            Ok(running) => running,
            Err(err) => panic!("unable to bind the Health Check API to {bind_addr}: {err}"),
        };

        if let Ok(()) = running.await {
            tracing::info!(target: HEALTH_CHECK_API_LOG_TARGET, "Stopped server running on: {protocol}://{}", bind_addr);
        }
    });

    // Wait until the server sends the started message
    match rx_start.await {
        Ok(msg) => tracing::info!(target: HEALTH_CHECK_API_LOG_TARGET, "{STARTED_ON}: {protocol}://{}", msg.address),
        Err(e) => panic!("the Health Check API server was dropped: {e}"),
    }

    // Wait until the server finishes
    tokio::spawn(async move {
        assert!(!tx_halt.is_closed(), "Halt channel for Health Check API should be open");

        join_handle
            .await
            .expect("it should be able to join to the Health Check API server task");
    })
}
