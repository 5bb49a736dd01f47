//! Initialize configuration from file or env var.
//!
//! There are two ways to inject the configuration:
//!
//! 1. A TOML file. Its path is taken from `API_SERVICE_CONFIG_TOML_PATH` or
//!    defaults to [`DEFAULT_PATH_CONFIG`].
//! 2. The env var `API_SERVICE_CONFIG_TOML` with the whole TOML document. It
//!    has priority over the file.
//!
//! Single values can be overridden with `API_SERVICE_` env vars, for example
//! `API_SERVICE_DAEMON__URL`.
//!
//! Refer to the [configuration crate documentation](api_service_configuration)
//! for the configuration options.
use api_service_configuration::{Configuration, Info};

pub const DEFAULT_PATH_CONFIG: &str = "./share/default/config/api-service.toml";

/// It loads the application configuration from the environment.
///
/// # Panics
///
/// Will panic if it can't load the configuration from either the file or
/// the env var.
#[must_use]
pub fn initialize_configuration() -> Configuration {
    let info = Info::new(DEFAULT_PATH_CONFIG.to_string()).expect("it should build the configuration info");

    Configuration::load(&info).expect("it should load the configuration")
}
