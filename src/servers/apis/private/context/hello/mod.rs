//! Greeting endpoint.
//!
//! `GET /api/private/hello`
//!
//! **Example response** `200`
//!
//! ```json
//! {"hello": "Hello world!"}
//! ```
pub mod handlers;
pub mod routes;
