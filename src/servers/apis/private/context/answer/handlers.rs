//! API handlers for the [`answer`](crate::servers::apis::private::context::answer)
//! API context.
use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::{Json, Response};

use super::forms::{AnswerForm, AnswerQuery};
use crate::core::Backend;
use crate::servers::apis::private::resources::Reply;
use crate::servers::apis::private::responses::{bad_request_response, reply_response, scoreboard_error_response, text_response};

pub async fn put_answer_handler(State(backend): State<Arc<Backend>>, form: Result<Json<AnswerForm>, JsonRejection>) -> Response {
    let Json(form) = match form {
        Ok(form) => form,
        Err(rejection) => return bad_request_response(&rejection.body_text()),
    };

    match backend.scoreboard.save_answer(&form.table_name, &form.column, &form.answer).await {
        Ok(()) => reply_response(Reply {
            update_answer: Some(format!(
                "the answer `{}` has been saved for the table `{}`",
                form.column, form.table_name
            )),
            ..Default::default()
        }),
        Err(err) => scoreboard_error_response(&err),
    }
}

pub async fn get_answer_handler(State(backend): State<Arc<Backend>>, query: Result<Query<AnswerQuery>, QueryRejection>) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return bad_request_response(&rejection.body_text()),
    };

    match backend.scoreboard.load_answer(&query.tablename, &query.column).await {
        Ok(answer) => text_response(format!("{answer}\n")),
        Err(err) => scoreboard_error_response(&err),
    }
}
