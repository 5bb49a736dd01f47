//! Application jobs launchers.
//!
//! Every server runs as a concurrent job. This module contains the
//! functions to start them.
pub mod health_check_api;
pub mod http_api;

/// This is the message that the "launcher" spawned task sends to the main
/// application process to notify the service was successfully started.
#[derive(Debug)]
pub struct Started {
    pub address: std::net::SocketAddr,
}
