//! Common responses for the `/api/private` API shared by all the contexts.
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};

use super::resources::Reply;
use crate::core::scoreboard;
use crate::servers::apis::API_LOG_TARGET;

/// A `200` JSON reply.
#[must_use]
pub fn reply_response(reply: Reply) -> Response {
    (StatusCode::OK, Json(reply)).into_response()
}

/// A `200` plain text body.
#[must_use]
pub fn text_response(body: String) -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}

// Error responses

#[must_use]
pub fn bad_request_response(message: &str) -> Response {
    error_response(StatusCode::BAD_REQUEST, message)
}

#[must_use]
pub fn not_found_response(message: &str) -> Response {
    error_response(StatusCode::NOT_FOUND, message)
}

#[must_use]
pub fn unhandled_rejection_response(message: &str) -> Response {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(Reply::error(message))).into_response()
}

/// Maps a scoreboard error to its response: invalid names are the client's
/// fault, missing rows are not found and driver failures are unhandled.
#[must_use]
pub fn scoreboard_error_response(err: &scoreboard::Error) -> Response {
    let message = err.to_string();

    match err {
        scoreboard::Error::InvalidTableName { .. }
        | scoreboard::Error::InvalidLabel { .. }
        | scoreboard::Error::InvalidUsername { .. } => bad_request_response(&message),
        scoreboard::Error::NoTables
        | scoreboard::Error::TableNotFound { .. }
        | scoreboard::Error::UserNotFound { .. }
        | scoreboard::Error::AnswerNotFound { .. } => not_found_response(&message),
        scoreboard::Error::Database { .. } => {
            tracing::error!(target: API_LOG_TARGET, "score store failure: {err}");
            unhandled_rejection_response(&message)
        }
    }
}
