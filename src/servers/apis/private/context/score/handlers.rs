//! API handlers for the [`score`](crate::servers::apis::private::context::score)
//! API context.
use std::fmt::Write;
use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::{Json, Response};

use super::forms::{LeaderboardQuery, ScoreQuery, UpdateScoreForm};
use crate::core::Backend;
use crate::servers::apis::private::resources::Reply;
use crate::servers::apis::private::responses::{bad_request_response, reply_response, scoreboard_error_response, text_response};

pub const SCORE_UPDATED: &str = "the score for the user has been updated";

pub async fn get_current_score_handler(State(backend): State<Arc<Backend>>, query: Result<Query<ScoreQuery>, QueryRejection>) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return bad_request_response(&rejection.body_text()),
    };

    match backend.scoreboard.get_score(&query.tablename, &query.username).await {
        Ok(score) => text_response(format!("Score for {}: {score}\n", query.username)),
        Err(err) => scoreboard_error_response(&err),
    }
}

pub async fn update_user_score_handler(
    State(backend): State<Arc<Backend>>,
    form: Result<Json<UpdateScoreForm>, JsonRejection>,
) -> Response {
    let Json(form) = match form {
        Ok(form) => form,
        Err(rejection) => return bad_request_response(&rejection.body_text()),
    };

    match backend.scoreboard.set_score(&form.table_name, &form.username, form.score).await {
        Ok(()) => reply_response(Reply {
            update_answer: Some(SCORE_UPDATED.to_owned()),
            ..Default::default()
        }),
        Err(err) => scoreboard_error_response(&err),
    }
}

pub async fn leaderboard_handler(State(backend): State<Arc<Backend>>, query: Result<Query<LeaderboardQuery>, QueryRejection>) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return bad_request_response(&rejection.body_text()),
    };

    match backend.scoreboard.leaderboard(&query.tablename).await {
        Ok(entries) => {
            let mut body = String::new();
            for entry in entries {
                let _ = writeln!(body, "{entry}");
            }
            text_response(body)
        }
        Err(err) => scoreboard_error_response(&err),
    }
}
