use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;
use derive_more::Constructor;
use tracing::warn;

use super::{responses, HEALTH_CHECK_API_LOG_TARGET};
use crate::core::Backend;

/// What the health check needs to know about the running application.
#[derive(Clone, Constructor)]
pub struct HealthCheckState {
    pub backend: Arc<Backend>,
    /// The address the main API is actually bound to.
    pub api_address: SocketAddr,
}

/// Endpoint for container health check.
pub(crate) async fn health_check_handler(State(state): State<HealthCheckState>) -> Response {
    if let Err(err) = state.backend.scoreboard.ping().await {
        warn!(target: HEALTH_CHECK_API_LOG_TARGET, "score store ping failed: {err}");
        return responses::error(format!("Score store is not healthy: {err}"));
    }

    let health_check_url = format!("http://{}/api/health_check", state.api_address);

    if !get_req_is_ok(&health_check_url).await {
        return responses::error(format!("API is not healthy. Health check endpoint: {health_check_url}"));
    }

    responses::ok()
}

async fn get_req_is_ok(url: &str) -> bool {
    match reqwest::get(url).await {
        Ok(response) => response.status().is_success(),
        Err(_err) => false,
    }
}
