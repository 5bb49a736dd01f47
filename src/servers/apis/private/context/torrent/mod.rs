//! Torrent acquisition endpoint.
//!
//! `POST /api/private/add_torrent` (also routed as `POST /add_torrent`)
//!
//! It asks the torrent daemon to download the `.torrent` file at `url` and
//! to start it. The three daemon calls run in order: log in, download and
//! register.
//!
//! **Example request**
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:8080/api/private/add_torrent" \
//!   -H "Content-Type: application/json" \
//!   -d '{"parameters": {"url": "https://example.com/file.torrent"}}'
//! ```
//!
//! **Example response** `200`
//!
//! The job descriptor returned by the daemon, as is:
//!
//! ```json
//! [[true, "f1d2d2f924e986ac86fdf7b36c94bcdf32beec15"]]
//! ```
//!
//! **Example error response** `400`
//!
//! ```json
//! {"error": "invalid torrent request: the torrent url is empty"}
//! ```
//!
//! Any daemon failure is a `500` with the same shape. The message starts
//! with a summary of the failed step, for example
//! `unable to log in to the torrent daemon: ...`.
pub mod forms;
pub mod handlers;
pub mod routes;
