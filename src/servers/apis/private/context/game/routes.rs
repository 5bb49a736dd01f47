//! API routes for the [`game`](crate::servers::apis::private::context::game)
//! API context.
use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use super::handlers::get_pokemon_handler;
use crate::core::Backend;

pub fn add(prefix: &str, router: Router, backend: Arc<Backend>) -> Router {
    router.route(&format!("{prefix}/get_pokemon"), get(get_pokemon_handler).with_state(backend))
}
