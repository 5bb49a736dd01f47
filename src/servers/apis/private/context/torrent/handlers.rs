//! API handlers for the [`torrent`](crate::servers::apis::private::context::torrent)
//! API context.
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};
use tracing::error;

use super::forms::AddTorrentForm;
use crate::core::torrents::error::Kind;
use crate::core::Backend;
use crate::servers::apis::private::responses::{bad_request_response, unhandled_rejection_response};
use crate::servers::apis::API_LOG_TARGET;

/// It handles the request to acquire a torrent from a URL.
///
/// It returns the job descriptor from the daemon, a `400` response for a
/// malformed body or an empty URL, and a `500` response for any other
/// failure.
pub async fn add_torrent_handler(State(backend): State<Arc<Backend>>, form: Result<Json<AddTorrentForm>, JsonRejection>) -> Response {
    let Json(form) = match form {
        Ok(form) => form,
        Err(rejection) => return bad_request_response(&format!("invalid torrent request: {}", rejection.body_text())),
    };

    match backend.torrents.add_torrent(&form.parameters.url).await {
        Ok(job) => Json(job).into_response(),
        Err(err) => {
            error!(target: API_LOG_TARGET, "add_torrent failed: {err:?}");

            match err.kind() {
                Kind::InvalidRequest => bad_request_response(&err.to_user_message()),
                _ => unhandled_rejection_response(&err.to_user_message()),
            }
        }
    }
}
