//! API routes for the [`answer`](crate::servers::apis::private::context::answer)
//! API context.
use std::sync::Arc;

use axum::routing::{get, put};
use axum::Router;

use super::handlers::{get_answer_handler, put_answer_handler};
use crate::core::Backend;

pub fn add(prefix: &str, router: Router, backend: Arc<Backend>) -> Router {
    router
        .route(&format!("{prefix}/put_answer"), put(put_answer_handler).with_state(backend.clone()))
        .route(&format!("{prefix}/get_answer"), get(get_answer_handler).with_state(backend))
}
