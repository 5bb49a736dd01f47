//! API handlers for the [`hello`](crate::servers::apis::private::context::hello)
//! API context.
use axum::Json;

use crate::servers::apis::private::resources::Reply;

pub const GREETING: &str = "Hello world!";

pub async fn hello_handler() -> Json<Reply> {
    Json(Reply {
        hello: Some(GREETING.to_owned()),
        ..Default::default()
    })
}
