//! The `core` module contains the domain logic of the service, independent of
//! the delivery layer.
//!
//! ```text
//! Delivery layer       Domain layer
//!
//!                  |-> Torrent acquisition -> remote daemon (JSON-RPC over HTTP)
//!     HTTP API ----|-> Scoreboard          -> score store (SQLite)
//!                  |-> Games               -> game data API (HTTP)
//! ```
//!
//! # Table of contents
//!
//! - [Backend](#backend)
//! - [Torrent acquisition](#torrent-acquisition)
//! - [Scoreboard](#scoreboard)
//! - [Games](#games)
//! - [Persistence](#persistence)
//!
//! # Backend
//!
//! The [`Backend`] is the main struct in this module. It is built once from
//! the [`Configuration`] and shared by every request handler.
//!
//! ```rust,no_run
//! use api_service::core::Backend;
//! use api_service_configuration::Configuration;
//!
//! let backend = Backend::new(&Configuration::default()).expect("the backend should be built");
//! ```
//!
//! # Torrent acquisition
//!
//! Handing a torrent URL to the remote download daemon. Refer to the
//! [`torrents`] module.
//!
//! # Scoreboard
//!
//! Score tables with one row per user, and answers saved under a label.
//! Refer to the [`scoreboard`] module.
//!
//! # Games
//!
//! Random Pokémon from the Pokémon API. Refer to the [`games`] module.
//!
//! # Persistence
//!
//! The scoreboard persists its data with a [`Database`](databases::Database) driver. Refer to the
//! [`databases`] module.
pub mod databases;
pub mod error;
pub mod games;
pub mod scoreboard;
pub mod torrents;

use std::sync::Arc;

use api_service_configuration::Configuration;

use self::error::Error;
use self::scoreboard::Scoreboard;
use self::torrents::service::TorrentService;

/// The domain services used by the delivery layer.
pub struct Backend {
    pub scoreboard: Scoreboard,
    pub torrents: TorrentService,
    pub games: games::Client,
}

impl Backend {
    /// `Backend` constructor.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to open the score store or to build
    /// any of the HTTP clients.
    pub fn new(config: &Configuration) -> Result<Backend, Error> {
        let database = Arc::new(databases::driver::build(&config.database.driver, &config.database.path)?);

        Ok(Backend {
            scoreboard: Scoreboard::new(database),
            torrents: TorrentService::new(&config.daemon)?,
            games: games::Client::new(&config.game_api)?,
        })
    }
}
