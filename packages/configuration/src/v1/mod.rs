//! Version `1` for the API service configuration data structures.
//!
//! The whole configuration is a set of sections, one per concern:
//!
//! Section | Purpose
//! ---|---
//! `logging` | Logging threshold.
//! `database` | Relational store for score tables and answers.
//! `http_api` | Public HTTP API.
//! `health_check_api` | Health check HTTP API for container probes.
//! `daemon` | Remote torrent daemon (endpoint, credential variables, placement, session policy).
//! `game_api` | Third-party game data API.
//!
//! This is the default configuration:
//!
//! ```toml
//! [logging]
//! threshold = "info"
//!
//! [database]
//! driver = "sqlite3"
//! path = "./storage/api-service/lib/database/sqlite3.db"
//!
//! [http_api]
//! bind_address = "0.0.0.0:8080"
//!
//! [health_check_api]
//! bind_address = "127.0.0.1:8081"
//!
//! [daemon]
//! url = "http://127.0.0.1:8112/json"
//! username_env_var = "USERNAME"
//! password_env_var = "PASSWORD"
//! file_slots = 5
//! file_priority = 1
//! session = "per_request"
//!
//! [game_api]
//! url = "https://pokeapi.co/api/v2/"
//! pokemon_count = 151
//! ```
pub mod daemon;
pub mod database;
pub mod game_api;
pub mod health_check_api;
pub mod http_api;
pub mod logging;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use self::daemon::Daemon;
use self::database::Database;
use self::game_api::GameApi;
use self::health_check_api::HealthCheckApi;
use self::http_api::HttpApi;
use self::logging::Logging;
use crate::{Error, Info, ENV_VAR_PREFIX};

/// Core configuration for the API service.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Configuration {
    /// Logging configuration
    #[serde(default)]
    pub logging: Logging,

    /// The relational store.
    #[serde(default)]
    pub database: Database,

    /// The HTTP API configuration.
    #[serde(default)]
    pub http_api: HttpApi,

    /// The Health Check API configuration.
    #[serde(default)]
    pub health_check_api: HealthCheckApi,

    /// The remote torrent daemon.
    #[serde(default)]
    pub daemon: Daemon,

    /// The game data API.
    #[serde(default)]
    pub game_api: GameApi,
}

impl Configuration {
    /// Loads the configuration from the `Info` struct.
    ///
    /// The TOML document injected in the environment has priority over the
    /// config file. Environment variables with the [`ENV_VAR_PREFIX`] prefix
    /// override single values.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the merged configuration is not valid.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let figment = Figment::from(Serialized::defaults(Configuration::default()));

        let figment = match &info.config_toml {
            Some(config_toml) => figment.merge(Toml::string(config_toml)),
            None => figment.merge(Toml::file(&info.config_toml_path)),
        };

        let figment = figment.merge(Self::env_provider());

        let config: Configuration = figment.extract()?;

        Ok(config)
    }

    /// Loads the configuration from the configuration file.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `path` has a bad configuration.
    pub fn load_from_file(path: &str) -> Result<Configuration, Error> {
        let figment = Figment::from(Serialized::defaults(Configuration::default()))
            .merge(Toml::file(path))
            .merge(Self::env_provider());

        let config: Configuration = figment.extract()?;

        Ok(config)
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Panics
    ///
    /// Will panic if the configuration cannot be encoded to TOML.
    #[must_use]
    pub fn to_toml(&self) -> String {
        toml::to_string(self).expect("Could not encode TOML value")
    }

    /// Encodes the configuration to JSON.
    ///
    /// # Panics
    ///
    /// Will panic if the configuration cannot be encoded to JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("Could not encode JSON value")
    }

    fn env_provider() -> Env {
        Env::prefixed(ENV_VAR_PREFIX)
            .split("__")
            .ignore(&["config_toml", "config_toml_path"])
    }
}
