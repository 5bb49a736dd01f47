//! **API service** is a small backend that hands torrents to a remote
//! download daemon, keeps game scores and fetches game data.
//!
//! # Table of contents
//!
//! - [Features](#features)
//! - [Services](#services)
//! - [Installation](#installation)
//! - [Configuration](#configuration)
//! - [Usage](#usage)
//! - [Components](#components)
//!
//! # Features
//!
//! - Torrent acquisition: a torrent URL is sent to a [Deluge](https://deluge-torrent.org/)
//!   style daemon through its JSON-RPC web API. The daemon downloads the
//!   `.torrent` file and starts the transfer.
//! - Score tables: one table per game with a score per user, plus labeled
//!   answers, stored in `SQLite`.
//! - Game data: random Pokémon names from the `PokéAPI`.
//! - A health check API for container probes.
//!
//! # Services
//!
//! - The public [HTTP API](crate::servers::apis) on `0.0.0.0:8080`.
//! - The [health check API](crate::servers::health_check_api) on `127.0.0.1:8081`.
//!
//! # Installation
//!
//! ```text
//! git clone <repository-url> api-service \
//!   && cd api-service \
//!   && cargo build --release \
//!   && mkdir -p ./storage/api-service/lib/database
//! ```
//!
//! # Configuration
//!
//! The default configuration is in `./share/default/config/api-service.toml`.
//! Refer to the [configuration crate documentation](api_service_configuration)
//! for all the options.
//!
//! The daemon credentials are never in the configuration file. The file only
//! names the environment variables that hold them (`USERNAME` and `PASSWORD`
//! by default):
//!
//! ```text
//! USERNAME=admin PASSWORD=secret ./target/release/api-service
//! ```
//!
//! # Usage
//!
//! ```text
//! curl -X POST "http://127.0.0.1:8080/api/private/add_torrent" \
//!   -H "Content-Type: application/json" \
//!   -d '{"parameters": {"url": "https://example.com/file.torrent"}}'
//! ```
//!
//! Refer to the [API documentation](crate::servers::apis) for all the
//! endpoints.
//!
//! # Components
//!
//! - [`core`]: the domain services. The torrent acquisition workflow, the
//!   scoreboard and the game API client.
//! - [`servers`]: the HTTP servers.
//! - [`bootstrap`]: configuration loading, logging and the server jobs.
//! - [`app`]: starts all the jobs.
pub mod app;
pub mod bootstrap;
pub mod core;
pub mod servers;
