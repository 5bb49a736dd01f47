//! API health check endpoint.
//!
//! It is used to check the API is running. The health check API probes it.
//!
//! `GET /api/private/health_check` (also routed as `/api/health_check` and
//! `/health`)
//!
//! **Example response** `200`
//!
//! ```json
//! {"status": "Ok"}
//! ```
pub mod handlers;
pub mod resources;
pub mod routes;
