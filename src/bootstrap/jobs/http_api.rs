//! API job starter.
//!
//! The [`http_api::start_job`](crate::bootstrap::jobs::http_api::start_job)
//! function starts the public HTTP API on its own task and returns the
//! address it was bound to, so the health check API can probe it.
//!
//! Refer to the [configuration crate documentation](api_service_configuration)
//! for the API configuration options.
use std::net::SocketAddr;
use std::sync::Arc;

use api_service_configuration::HttpApi;
use tokio::task::JoinHandle;

use crate::core::Backend;
use crate::servers::apis::server::{ApiServer, Launcher};

/// It starts the API server and returns its bound address plus the handle
/// of the task waiting for it to finish.
///
/// # Panics
///
/// It would panic if the API server cannot be bound or its task cannot be
/// joined.
#[must_use]
pub fn start_job(config: &HttpApi, backend: Arc<Backend>) -> (SocketAddr, JoinHandle<()>) {
    let server = ApiServer::new(Launcher::new(config.bind_address))
        .start(backend)
        .expect("it should be able to start the API");

    let binding = server.state.binding;

    let job = tokio::spawn(async move {
        assert!(!server.state.halt_task.is_closed(), "Halt channel should be open");
        server.state.task.await.expect("failed to close service");
    });

    (binding, job)
}
