//! Game endpoint.
//!
//! `GET /api/private/get_pokemon`
//!
//! It picks a random Pokémon from the game API.
//!
//! **Example response** `200` (`text/plain`)
//!
//! ```text
//! bulbasaur
//! ```
//!
//! It responds `500` when the game API cannot be reached or its answer has
//! no results.
pub mod handlers;
pub mod routes;
