//! Score endpoints.
//!
//! - `GET /api/private/get_current_score?tablename=kanto&username=ash`
//! - `POST /api/private/update_user_score`
//! - `GET /api/private/leaderboard?tablename=kanto`
//!
//! # Current score
//!
//! **Example response** `200` (`text/plain`)
//!
//! ```text
//! Score for ash: 10
//! ```
//!
//! # Update a score
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:8080/api/private/update_user_score" \
//!   -H "Content-Type: application/json" \
//!   -d '{"table_name": "kanto", "username": "ash", "score": 10}'
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {"update_answer": "the score for the user has been updated"}
//! ```
//!
//! The user must already be in the table, otherwise it responds `404`.
//!
//! # Leaderboard
//!
//! One line per user, highest score first:
//!
//! ```text
//! misty: 12
//! ash: 10
//! ```
pub mod forms;
pub mod handlers;
pub mod routes;
