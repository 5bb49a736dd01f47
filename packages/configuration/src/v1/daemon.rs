use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for the remote torrent daemon.
///
/// ```toml
/// [daemon]
/// url = "http://127.0.0.1:8112/json"
/// username_env_var = "USERNAME"
/// password_env_var = "PASSWORD"
/// file_slots = 5
/// file_priority = 1
/// session = "per_request"
/// ```
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Daemon {
    /// The JSON-RPC endpoint of the daemon web interface.
    #[serde(default = "Daemon::default_url")]
    pub url: Url,

    /// Name of the environment variable holding the daemon user name.
    #[serde(default = "Daemon::default_username_env_var")]
    pub username_env_var: String,

    /// Name of the environment variable holding the daemon password.
    #[serde(default = "Daemon::default_password_env_var")]
    pub password_env_var: String,

    /// Number of file slots the registration call assigns a priority to.
    #[serde(default = "Daemon::default_file_slots")]
    pub file_slots: usize,

    /// Download priority given to every file slot.
    #[serde(default = "Daemon::default_file_priority")]
    pub file_priority: u8,

    /// Whether every acquisition gets its own session or all of them share
    /// one cookie jar for the lifetime of the process.
    #[serde(default)]
    pub session: SessionScope,

    /// Optional timeout, in seconds, for each call to the daemon. When it is
    /// not set the HTTP client waits for as long as the daemon takes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for Daemon {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
            username_env_var: Self::default_username_env_var(),
            password_env_var: Self::default_password_env_var(),
            file_slots: Self::default_file_slots(),
            file_priority: Self::default_file_priority(),
            session: SessionScope::default(),
            timeout_secs: None,
        }
    }
}

impl Daemon {
    /// # Panics
    ///
    /// Will panic if the hardcoded default URL is not valid.
    fn default_url() -> Url {
        Url::parse("http://127.0.0.1:8112/json").expect("the default daemon url should be valid")
    }

    fn default_username_env_var() -> String {
        String::from("USERNAME")
    }

    fn default_password_env_var() -> String {
        String::from("PASSWORD")
    }

    fn default_file_slots() -> usize {
        5
    }

    fn default_file_priority() -> u8 {
        1
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Lifetime of the daemon session (and its cookie jar).
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionScope {
    /// A new session is opened for every acquisition.
    #[default]
    PerRequest,
    /// One session is kept for the whole process and reused by every
    /// acquisition.
    Shared,
}
