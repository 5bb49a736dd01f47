//! Saved answer endpoints.
//!
//! Every score table can keep labeled text answers.
//!
//! # Save an answer
//!
//! `PUT /api/private/put_answer`
//!
//! ```bash
//! curl -X PUT "http://127.0.0.1:8080/api/private/put_answer" \
//!   -H "Content-Type: application/json" \
//!   -d '{"table_name": "kanto", "column": "starter", "answer": "pikachu"}'
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {"update_answer": "the answer `starter` has been saved for the table `kanto`"}
//! ```
//!
//! Saving an answer again replaces it.
//!
//! # Read an answer
//!
//! `GET /api/private/get_answer?tablename=kanto&column=starter`
//!
//! **Example response** `200` (`text/plain`)
//!
//! ```text
//! pikachu
//! ```
pub mod forms;
pub mod handlers;
pub mod routes;
