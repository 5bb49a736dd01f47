//! Score table endpoints.
//!
//! - `GET /api/private/list_tables`
//! - `POST /api/private/create_table`
//! - `DELETE /api/private/delete_table`
//! - `PUT /api/private/update_table_with_user`
//!
//! # List tables
//!
//! **Example response** `200`
//!
//! ```json
//! {"tables": ["kanto", "johto"]}
//! ```
//!
//! It responds `404` when there are no score tables.
//!
//! # Create table
//!
//! Creating a table that already exists is not an error.
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:8080/api/private/create_table" \
//!   -H "Content-Type: application/json" -d '{"table_name": "kanto"}'
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {"table_created": "kanto"}
//! ```
//!
//! # Delete table
//!
//! The body is the same as for `create_table`. It responds
//! `{"table_deleted": "kanto"}` or `404` if the table does not exist.
//!
//! # Add a user to a table
//!
//! ```bash
//! curl -X PUT "http://127.0.0.1:8080/api/private/update_table_with_user" \
//!   -H "Content-Type: application/json" -d '{"table_name": "kanto", "username": "ash"}'
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {"added_user": "ash"}
//! ```
//!
//! The user starts with score `0`. Adding a user twice keeps the score.
pub mod forms;
pub mod handlers;
pub mod routes;
