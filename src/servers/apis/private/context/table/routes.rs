//! API routes for the [`table`](crate::servers::apis::private::context::table)
//! API context.
use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;

use super::handlers::{create_table_handler, delete_table_handler, list_tables_handler, update_table_with_user_handler};
use crate::core::Backend;

pub fn add(prefix: &str, router: Router, backend: Arc<Backend>) -> Router {
    router
        .route(&format!("{prefix}/list_tables"), get(list_tables_handler).with_state(backend.clone()))
        .route(&format!("{prefix}/create_table"), post(create_table_handler).with_state(backend.clone()))
        .route(&format!("{prefix}/delete_table"), delete(delete_table_handler).with_state(backend.clone()))
        .route(
            &format!("{prefix}/update_table_with_user"),
            put(update_table_with_user_handler).with_state(backend),
        )
}
