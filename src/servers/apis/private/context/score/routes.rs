//! API routes for the [`score`](crate::servers::apis::private::context::score)
//! API context.
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{get_current_score_handler, leaderboard_handler, update_user_score_handler};
use crate::core::Backend;

pub fn add(prefix: &str, router: Router, backend: Arc<Backend>) -> Router {
    router
        .route(
            &format!("{prefix}/get_current_score"),
            get(get_current_score_handler).with_state(backend.clone()),
        )
        .route(
            &format!("{prefix}/update_user_score"),
            post(update_user_score_handler).with_state(backend.clone()),
        )
        .route(&format!("{prefix}/leaderboard"), get(leaderboard_handler).with_state(backend))
}
