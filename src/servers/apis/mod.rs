//! The public HTTP API.
//!
//! All the endpoints are under the `/api/private` prefix. There is no
//! authentication layer: the API is expected to sit behind a private network
//! or a proxy that adds one.
//!
//! # Table of contents
//!
//! - [Configuration](#configuration)
//! - [Endpoints](#endpoints)
//! - [Responses](#responses)
//! - [Health check](#health-check)
//!
//! # Configuration
//!
//! ```toml
//! [http_api]
//! bind_address = "0.0.0.0:8080"
//! ```
//!
//! Refer to the [configuration crate documentation](api_service_configuration)
//! for more information.
//!
//! # Endpoints
//!
//! Context | Method | Path | Input
//! ---|---|---|---
//! [`hello`](crate::servers::apis::private::context::hello) | `GET` | `/hello` |
//! [`torrent`](crate::servers::apis::private::context::torrent) | `POST` | `/add_torrent` | `{"parameters": {"url": "..."}}`
//! [`table`](crate::servers::apis::private::context::table) | `GET` | `/list_tables` |
//! [`table`](crate::servers::apis::private::context::table) | `POST` | `/create_table` | `{"table_name": "..."}`
//! [`table`](crate::servers::apis::private::context::table) | `DELETE` | `/delete_table` | `{"table_name": "..."}`
//! [`table`](crate::servers::apis::private::context::table) | `PUT` | `/update_table_with_user` | `{"table_name": "...", "username": "..."}`
//! [`score`](crate::servers::apis::private::context::score) | `GET` | `/get_current_score` | `?tablename=...&username=...`
//! [`score`](crate::servers::apis::private::context::score) | `POST` | `/update_user_score` | `{"table_name": "...", "username": "...", "score": 10}`
//! [`score`](crate::servers::apis::private::context::score) | `GET` | `/leaderboard` | `?tablename=...`
//! [`answer`](crate::servers::apis::private::context::answer) | `PUT` | `/put_answer` | `{"table_name": "...", "column": "...", "answer": "..."}`
//! [`answer`](crate::servers::apis::private::context::answer) | `GET` | `/get_answer` | `?tablename=...&column=...`
//! [`game`](crate::servers::apis::private::context::game) | `GET` | `/get_pokemon` |
//!
//! The old `POST /add_torrent` endpoint without prefix is still routed for
//! clients that have not moved to `/api/private/add_torrent`.
//!
//! # Responses
//!
//! JSON responses use one object with only the fields that apply:
//!
//! ```json
//! {"hello": "...", "tables": ["..."], "table_created": "...", "table_deleted": "...", "update_answer": "...", "added_user": "...", "error": "..."}
//! ```
//!
//! Errors always come as `{"error": "..."}` with status:
//!
//! - `400` for malformed bodies, missing query params and invalid names or URLs.
//! - `404` for unknown tables, users and answers.
//! - `500` for score store, daemon and game API failures.
//!
//! # Health check
//!
//! `GET /api/health_check` (and `GET /health`) answer `{"status":"Ok"}`
//! while the server is up.
pub mod private;
pub mod routes;
pub mod server;

/// The log target of the API server.
pub const API_LOG_TARGET: &str = "API";
