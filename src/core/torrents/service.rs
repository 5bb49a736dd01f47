//! The entry point used by the HTTP API to acquire a torrent.
use std::sync::Arc;
use std::time::Duration;

use api_service_configuration::{Daemon, SessionScope};
use tracing::{debug, warn};
use url::Url;

use super::credentials::{CredentialStore, EnvCredentialStore};
use super::error::Error;
use super::placement::Placement;
use super::session::{SessionClient, Transport};
use super::workflow::{self, JobDescriptor, TorrentUrl};

/// How acquisitions get their daemon session.
enum Sessions {
    /// A new session client for every acquisition.
    PerRequest { endpoint: Url, timeout: Option<Duration> },
    /// One session for the whole process. Concurrent acquisitions share its
    /// cookie jar.
    Shared(Arc<dyn Transport>),
}

/// Hands torrent URLs to the remote daemon.
pub struct TorrentService {
    sessions: Sessions,
    credentials: Box<dyn CredentialStore>,
    placement: Placement,
}

impl TorrentService {
    /// Builds the service from the daemon configuration.
    ///
    /// # Errors
    ///
    /// Will return a `Transport` error if the shared session client cannot be
    /// built.
    pub fn new(config: &Daemon) -> Result<Self, Error> {
        let sessions = match config.session {
            SessionScope::PerRequest => Sessions::PerRequest {
                endpoint: config.url.clone(),
                timeout: config.timeout(),
            },
            SessionScope::Shared => Sessions::Shared(Arc::new(SessionClient::new(config.url.clone(), config.timeout())?)),
        };

        Ok(Self {
            sessions,
            credentials: Box::new(EnvCredentialStore::new(&config.username_env_var, &config.password_env_var)),
            placement: Placement::from(config),
        })
    }

    /// Builds a service that sends every acquisition through `transport`.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>, credentials: Box<dyn CredentialStore>, placement: Placement) -> Self {
        Self {
            sessions: Sessions::Shared(transport),
            credentials,
            placement,
        }
    }

    /// It acquires the torrent at `url`: the daemon downloads it and starts it.
    ///
    /// The URL is validated and the credentials are read before anything is
    /// sent to the daemon.
    ///
    /// # Errors
    ///
    /// Will return an `InvalidRequest` error for an empty URL, a
    /// `Configuration` error for missing credentials, and the error of the
    /// failed step otherwise.
    pub async fn add_torrent(&self, url: &str) -> Result<JobDescriptor, Error> {
        let url: TorrentUrl = url.parse()?;

        let credentials = self.credentials.credentials()?;

        let result = match &self.sessions {
            Sessions::Shared(transport) => workflow::run(transport.as_ref(), credentials, &url, &self.placement).await,
            Sessions::PerRequest { endpoint, timeout } => {
                let client = SessionClient::new(endpoint.clone(), *timeout)?;
                workflow::run(&client, credentials, &url, &self.placement).await
            }
        };

        match &result {
            Ok(job) => debug!(target: "ACQUISITION", "torrent {url} registered: {job:?}"),
            Err(err) => warn!(target: "ACQUISITION", "torrent {url} failed with {}: {err}", err.kind()),
        }

        result
    }
}
