//! API handlers for the [`table`](crate::servers::apis::private::context::table)
//! API context.
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{Json, Response};

use super::forms::{TableForm, TableUserForm};
use crate::core::Backend;
use crate::servers::apis::private::resources::Reply;
use crate::servers::apis::private::responses::{bad_request_response, reply_response, scoreboard_error_response};

pub async fn list_tables_handler(State(backend): State<Arc<Backend>>) -> Response {
    match backend.scoreboard.list_tables().await {
        Ok(tables) => reply_response(Reply {
            tables: Some(tables),
            ..Default::default()
        }),
        Err(err) => scoreboard_error_response(&err),
    }
}

pub async fn create_table_handler(State(backend): State<Arc<Backend>>, form: Result<Json<TableForm>, JsonRejection>) -> Response {
    let Json(form) = match form {
        Ok(form) => form,
        Err(rejection) => return bad_request_response(&rejection.body_text()),
    };

    match backend.scoreboard.create_table(&form.table_name).await {
        Ok(table) => reply_response(Reply {
            table_created: Some(table.to_string()),
            ..Default::default()
        }),
        Err(err) => scoreboard_error_response(&err),
    }
}

pub async fn delete_table_handler(State(backend): State<Arc<Backend>>, form: Result<Json<TableForm>, JsonRejection>) -> Response {
    let Json(form) = match form {
        Ok(form) => form,
        Err(rejection) => return bad_request_response(&rejection.body_text()),
    };

    match backend.scoreboard.drop_table(&form.table_name).await {
        Ok(table) => reply_response(Reply {
            table_deleted: Some(table.to_string()),
            ..Default::default()
        }),
        Err(err) => scoreboard_error_response(&err),
    }
}

pub async fn update_table_with_user_handler(
    State(backend): State<Arc<Backend>>,
    form: Result<Json<TableUserForm>, JsonRejection>,
) -> Response {
    let Json(form) = match form {
        Ok(form) => form,
        Err(rejection) => return bad_request_response(&rejection.body_text()),
    };

    match backend.scoreboard.add_user(&form.table_name, &form.username).await {
        Ok(username) => reply_response(Reply {
            added_user: Some(username.to_string()),
            ..Default::default()
        }),
        Err(err) => scoreboard_error_response(&err),
    }
}
