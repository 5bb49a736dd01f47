//! The health check API.
//!
//! A second HTTP server, meant for the container infrastructure. It has
//! only one endpoint:
//!
//! `GET /health_check`
//!
//! It checks that the score store answers a ping and that the main API
//! answers its own health check endpoint.
//!
//! **Example response** `200`
//!
//! ```json
//! {"status": "Ok", "message": ""}
//! ```
//!
//! **Example response** `503`
//!
//! ```json
//! {"status": "Error", "message": "API is not healthy. Health check endpoint: http://127.0.0.1:8080/api/health_check"}
//! ```
//!
//! The [`http_health_check`](../../http_health_check/index.html) binary
//! calls this endpoint from the container probe.
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod server;

/// The log target of the health check API server.
pub const HEALTH_CHECK_API_LOG_TARGET: &str = "HEALTH CHECK API";
