//! API handlers for the [`game`](crate::servers::apis::private::context::game)
//! API context.
use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;
use tracing::error;

use crate::core::Backend;
use crate::servers::apis::private::responses::{text_response, unhandled_rejection_response};
use crate::servers::apis::API_LOG_TARGET;

pub async fn get_pokemon_handler(State(backend): State<Arc<Backend>>) -> Response {
    match backend.games.random_pokemon().await {
        Ok(name) => text_response(format!("{name}\n")),
        Err(err) => {
            error!(target: API_LOG_TARGET, "get_pokemon failed: {err}");
            unhandled_rejection_response(&format!("there was an error finding your pokemon: {err}"))
        }
    }
}
