use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::resources::Report;

#[must_use]
pub fn ok() -> Response {
    (StatusCode::OK, Json(Report::ok())).into_response()
}

#[must_use]
pub fn error(message: String) -> Response {
    (StatusCode::SERVICE_UNAVAILABLE, Json(Report::error(message))).into_response()
}
