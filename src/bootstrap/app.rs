//! Setup for the main application.
//!
//! The application setup has two main stages:
//!
//! 1. Load the configuration and initialize logging.
//! 2. Build the [`Backend`]: the score store, the torrent daemon client and
//!    the game API client.
use std::sync::Arc;

use api_service_configuration::Configuration;

use super::config::initialize_configuration;
use crate::bootstrap;
use crate::core::Backend;

/// It loads the configuration and builds the application services.
#[must_use]
pub fn setup() -> (Arc<Configuration>, Arc<Backend>) {
    let configuration = Arc::new(initialize_configuration());
    let backend = initialize_with_configuration(&configuration);

    (configuration, backend)
}

/// It initializes logging and builds the application services.
///
/// # Panics
///
/// Will panic if the score store cannot be opened or an HTTP client cannot
/// be built.
#[must_use]
pub fn initialize_with_configuration(configuration: &Arc<Configuration>) -> Arc<Backend> {
    initialize_logging(configuration);
    Arc::new(initialize_backend(configuration))
}

/// # Panics
///
/// Will panic if the score store cannot be opened or an HTTP client cannot
/// be built.
#[must_use]
pub fn initialize_backend(config: &Arc<Configuration>) -> Backend {
    match Backend::new(config) {
        Ok(backend) => backend,
        Err(err) => panic!("unable to build the application services: {err}"),
    }
}

pub fn initialize_logging(config: &Arc<Configuration>) {
    bootstrap::logging::setup(config);
}
