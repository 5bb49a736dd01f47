//! Configurations used by tests.
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use api_service_configuration::{Configuration, SessionScope, Threshold};
use url::Url;

use crate::random;

/// This configuration is used for testing. It generates random config values
/// so they do not collide if you run more than one service at the same time.
///
/// - Both HTTP servers bind to an ephemeral port on the loopback interface.
/// - The database is a fresh `SQLite` file in the temp directory.
/// - The daemon credentials are read from variables with a random suffix.
/// - The daemon and game API point to a closed loopback port until a test
///   replaces them with the address of a fake server.
///
/// # Panics
///
/// Will panic if it can't convert the temp file path to string.
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    config.logging.threshold = Threshold::Off; // Change to `debug` for tests debugging

    // Ephemeral socket addresses
    config.http_api.bind_address = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0);
    config.health_check_api.bind_address = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0);

    // Ephemeral sqlite database
    let temp_directory = env::temp_dir();
    let random_db_id = random::string(16);
    let temp_file = temp_directory.join(format!("api_service_{random_db_id}.db"));
    config.database.path = temp_file.to_str().unwrap().to_owned();

    // Credential variables unique to this configuration
    let random_env_id = random::string(8).to_uppercase();
    config.daemon.username_env_var = format!("TEST_DAEMON_USERNAME_{random_env_id}");
    config.daemon.password_env_var = format!("TEST_DAEMON_PASSWORD_{random_env_id}");

    // Nothing listens on port 9 (discard) in the test environment.
    config.daemon.url = Url::parse("http://127.0.0.1:9/json").unwrap();
    config.game_api.url = Url::parse("http://127.0.0.1:9/api/v2/").unwrap();

    config
}

/// Ephemeral configuration where all acquisitions share one daemon session.
#[must_use]
pub fn ephemeral_with_shared_session() -> Configuration {
    let mut config = ephemeral();

    config.daemon.session = SessionScope::Shared;

    config
}

/// Ephemeral configuration pointing the daemon client to `url`.
///
/// # Panics
///
/// Will panic if `url` is not a valid URL.
#[must_use]
pub fn ephemeral_with_daemon(url: &str) -> Configuration {
    let mut config = ephemeral();

    config.daemon.url = Url::parse(url).unwrap();

    config
}
