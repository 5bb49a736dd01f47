//! API routes for the [`hello`](crate::servers::apis::private::context::hello)
//! API context.
use axum::routing::get;
use axum::Router;

use super::handlers::hello_handler;

pub fn add(prefix: &str, router: Router) -> Router {
    router.route(&format!("{prefix}/hello"), get(hello_handler))
}
