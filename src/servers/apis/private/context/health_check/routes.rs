//! API routes for the [`health_check`](crate::servers::apis::private::context::health_check)
//! API context.
use axum::routing::get;
use axum::Router;

use super::handlers::health_check_handler;

pub fn add(prefix: &str, router: Router) -> Router {
    router.route(&format!("{prefix}/health_check"), get(health_check_handler))
}
