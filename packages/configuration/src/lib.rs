//! Configuration data structures for the API service.
//!
//! This module contains the configuration data structures for the API
//! service, which is a small backend with three concerns:
//!
//! - Handing torrent URLs to a remote download daemon.
//! - Keeping per-user score records in a relational store.
//! - Fetching data from a third-party game API.
//!
//! The current version for configuration is [`v1`].
//!
//! # Loading
//!
//! The configuration is merged from, in increasing priority:
//!
//! 1. The defaults of every section.
//! 2. A TOML file. Its path is taken from the `API_SERVICE_CONFIG_TOML_PATH`
//!    environment variable or, if unset, from the default path given to
//!    [`Info::new`]. Alternatively the whole TOML document can be injected
//!    with the `API_SERVICE_CONFIG_TOML` environment variable, which wins
//!    over the file.
//! 3. Environment variables with the `API_SERVICE_` prefix. Nested keys use a
//!    double underscore, for example `API_SERVICE_DAEMON__URL`.
//!
//! > **NOTICE**: the daemon credentials are never read from the configuration.
//! > The configuration only names the environment variables that hold them.
pub mod v1;

use std::env;
use std::sync::Arc;

use api_service_located_error::{DynError, LocatedError};
use thiserror::Error;

/// Prefix for the environment variables that override configuration values.
pub const ENV_VAR_PREFIX: &str = "API_SERVICE_";

/// The whole `api-service.toml` file content. It has priority over the config file.
pub const ENV_VAR_CONFIG_TOML: &str = "API_SERVICE_CONFIG_TOML";

/// The `api-service.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "API_SERVICE_CONFIG_TOML_PATH";

pub type Configuration = v1::Configuration;
pub type Logging = v1::logging::Logging;
pub type Threshold = v1::logging::Threshold;
pub type Database = v1::database::Database;
pub type Driver = v1::database::Driver;
pub type HttpApi = v1::http_api::HttpApi;
pub type HealthCheckApi = v1::health_check_api::HealthCheckApi;
pub type Daemon = v1::daemon::Daemon;
pub type SessionScope = v1::daemon::SessionScope;
pub type GameApi = v1::game_api::GameApi;

/// Information required for loading config
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Build Configuration Info
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to obtain a configuration.
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(default_config_toml_path: String) -> Result<Self, Error> {
        let config_toml = if let Ok(config_toml) = env::var(ENV_VAR_CONFIG_TOML) {
            println!("Loading configuration from environment variable `{ENV_VAR_CONFIG_TOML}` ...");
            Some(config_toml)
        } else {
            None
        };

        let config_toml_path = if let Ok(config_toml_path) = env::var(ENV_VAR_CONFIG_TOML_PATH) {
            println!("Loading configuration from file: `{config_toml_path}` ...");
            config_toml_path
        } else {
            println!("Loading configuration from default configuration file: `{default_config_toml_path}` ...");
            default_config_toml_path
        };

        Ok(Self {
            config_toml,
            config_toml_path,
        })
    }

    /// Info for an in-memory TOML document. Mostly useful for tests.
    #[must_use]
    pub fn from_toml(config_toml: &str) -> Self {
        Self {
            config_toml: Some(config_toml.to_owned()),
            config_toml_path: String::new(),
        }
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Unable to load the configuration from the configuration file.
    #[error("Unable to load from Config File: {source}")]
    UnableToLoadFromConfigFile {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },

    /// The merged configuration could not be extracted.
    #[error("Failed processing the configuration: {source}")]
    ConfigError {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },
}

impl From<figment::Error> for Error {
    #[track_caller]
    fn from(err: figment::Error) -> Self {
        Self::ConfigError {
            source: (Arc::new(err) as DynError).into(),
        }
    }
}
