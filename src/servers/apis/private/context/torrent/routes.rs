//! API routes for the [`torrent`](crate::servers::apis::private::context::torrent)
//! API context.
use std::sync::Arc;

use axum::routing::post;
use axum::Router;

use super::handlers::add_torrent_handler;
use crate::core::Backend;

pub fn add(prefix: &str, router: Router, backend: Arc<Backend>) -> Router {
    router.route(&format!("{prefix}/add_torrent"), post(add_torrent_handler).with_state(backend))
}
