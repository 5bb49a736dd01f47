//! API service application.
//!
//! The application runs two servers, each one as an independent job:
//!
//! - The public HTTP API.
//! - The health check API, which probes the public API and the score store.
//!
//! Both stop gracefully on `Ctrl-C` or `SIGTERM`.
use std::sync::Arc;

use api_service_configuration::Configuration;
use tokio::task::JoinHandle;

use crate::bootstrap::jobs::{health_check_api, http_api};
use crate::core::Backend;

/// It starts all the application jobs.
///
/// # Panics
///
/// Will panic if any of the servers cannot be bound.
pub async fn start(config: &Configuration, backend: Arc<Backend>) -> Vec<JoinHandle<()>> {
    let mut jobs: Vec<JoinHandle<()>> = Vec::new();

    // Start HTTP API
    let (api_address, api_job) = http_api::start_job(&config.http_api, backend.clone());
    jobs.push(api_job);

    // Start Health Check API
    jobs.push(health_check_api::start_job(&config.health_check_api, backend, api_address).await);

    jobs
}
