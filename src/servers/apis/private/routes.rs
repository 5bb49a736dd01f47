//! Route initialization for the `/api/private` API.
use std::sync::Arc;

use axum::Router;

use super::context::{answer, game, health_check, hello, score, table, torrent};
use crate::core::Backend;

/// Add the routes of every context under `prefix`.
pub fn add(prefix: &str, router: Router, backend: Arc<Backend>) -> Router {
    let router = hello::routes::add(prefix, router);
    let router = health_check::routes::add(prefix, router);
    let router = torrent::routes::add(prefix, router, backend.clone());
    let router = table::routes::add(prefix, router, backend.clone());
    let router = score::routes::add(prefix, router, backend.clone());
    let router = answer::routes::add(prefix, router, backend.clone());
    game::routes::add(prefix, router, backend)
}
