//! The torrent acquisition state machine.
//!
//! ```text
//! Init --auth.login--> Authenticated --web.download_torrent_from_url--> Fetched --web.add_torrents--> Registered
//!   |                        |                                            |
//!   +------------------------+--------------------------------------------+--> Failed (the returned `Error`)
//! ```
//!
//! Each state is a type, so a step can only be issued after the previous one
//! succeeded. A failed step consumes the acquisition: there is no way to go on
//! from an error.
//!
//! Calls are numbered `1`, `2` and `3` within one run. The number is only
//! echoed by the daemon; answers are never matched against it because the
//! calls are strictly sequential.
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use super::credentials::Credentials;
use super::error::Error;
use super::placement::{Placement, TorrentEntry};
use super::rpc::{Method, Outcome, RpcCall};
use super::session::Transport;

/// The URL of the `.torrent` resource to fetch. It is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TorrentUrl(String);

impl TorrentUrl {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TorrentUrl {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(Error::InvalidRequest);
        }

        Ok(Self(value.to_owned()))
    }
}

impl fmt::Display for TorrentUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The server-side location where the daemon left the downloaded `.torrent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedPath(String);

impl StagedPath {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<Value> for StagedPath {
    type Error = String;

    fn try_from(result: Value) -> Result<Self, Self::Error> {
        match result {
            Value::String(path) if !path.is_empty() => Ok(Self(path)),
            Value::String(_) => Err("expected a staged file path, got an empty string".to_string()),
            other => Err(format!("expected a staged file path, got {other}")),
        }
    }
}

/// The opaque success payload of the registration call.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct JobDescriptor(Value);

impl JobDescriptor {
    #[must_use]
    pub fn into_inner(self) -> Value {
        self.0
    }
}

/// Hands out the call identifiers of one run.
#[derive(Debug)]
struct CallIds {
    next: u64,
}

impl CallIds {
    fn new() -> Self {
        Self { next: 1 }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Nothing has been sent yet.
pub struct Init;

/// The daemon accepted the login and the session cookie is in the jar.
pub struct Authenticated;

/// The daemon downloaded the `.torrent` file.
pub struct Fetched {
    staged_path: StagedPath,
}

/// The daemon accepted the staged file.
pub struct Registered {
    pub job: JobDescriptor,
}

/// One acquisition run in state `S`.
pub struct Acquisition<'a, S> {
    transport: &'a dyn Transport,
    credentials: Credentials,
    ids: CallIds,
    state: S,
}

impl<'a, S> Acquisition<'a, S> {
    fn advance<T>(self, state: T) -> Acquisition<'a, T> {
        Acquisition {
            transport: self.transport,
            credentials: self.credentials,
            ids: self.ids,
            state,
        }
    }
}

impl<'a> Acquisition<'a, Init> {
    #[must_use]
    pub fn new(transport: &'a dyn Transport, credentials: Credentials) -> Self {
        Self {
            transport,
            credentials,
            ids: CallIds::new(),
            state: Init,
        }
    }

    /// Logs in with the password.
    ///
    /// Any failure of this step, including a failure to reach the daemon,
    /// is an authentication failure.
    ///
    /// # Errors
    ///
    /// Will return an `Authentication` error if the daemon answers with an
    /// error or with a `false` result, or if the call does not go through.
    pub async fn authenticate(mut self) -> Result<Acquisition<'a, Authenticated>, Error> {
        let call = RpcCall::new(
            Method::AuthLogin,
            vec![Value::from(self.credentials.password())],
            self.ids.next_id(),
        );

        debug!(target: "ACQUISITION", "step 1: logging in to the daemon");

        let response = self.transport.call(call).await.map_err(|err| Error::Authentication {
            reason: err.to_string(),
        })?;

        match response.into_outcome() {
            Outcome::Fault(fault) => Err(Error::Authentication {
                reason: fault.to_string(),
            }),
            Outcome::Success(Value::Bool(false)) => Err(Error::Authentication {
                reason: "the daemon refused the password".to_string(),
            }),
            Outcome::Success(_) => Ok(self.advance(Authenticated)),
        }
    }
}

impl<'a> Acquisition<'a, Authenticated> {
    /// Asks the daemon to download the `.torrent` file at `url`.
    ///
    /// # Errors
    ///
    /// Will return:
    ///
    /// - A `Download` error if the daemon answers with an error.
    /// - A `Protocol` error if the result is not a non-empty string.
    /// - A `Transport` or `Decode` error if the call does not go through.
    pub async fn fetch(mut self, url: &TorrentUrl) -> Result<Acquisition<'a, Fetched>, Error> {
        let call = RpcCall::new(
            Method::DownloadTorrentFromUrl,
            vec![Value::from(url.as_str())],
            self.ids.next_id(),
        );

        debug!(target: "ACQUISITION", "step 2: asking the daemon to download {url}");

        let response = self.transport.call(call).await?;

        match response.into_outcome() {
            Outcome::Fault(fault) => Err(Error::Download {
                reason: fault.to_string(),
            }),
            Outcome::Success(result) => {
                let staged_path = StagedPath::try_from(result).map_err(|reason| Error::Protocol {
                    method: Method::DownloadTorrentFromUrl,
                    reason,
                })?;

                Ok(self.advance(Fetched { staged_path }))
            }
        }
    }
}

impl<'a> Acquisition<'a, Fetched> {
    #[must_use]
    pub fn staged_path(&self) -> &StagedPath {
        &self.state.staged_path
    }

    /// Registers the staged file. This call replays the credentials.
    ///
    /// # Errors
    ///
    /// Will return a `Registration` error if the daemon answers with an error,
    /// and a `Transport` or `Decode` error if the call does not go through.
    pub async fn register(mut self, placement: &Placement) -> Result<Registered, Error> {
        let entry = TorrentEntry {
            path: self.state.staged_path.as_str(),
            options: placement,
        };

        let call = RpcCall::new(Method::AddTorrents, vec![json!([entry])], self.ids.next_id())
            .with_credentials(self.credentials.username(), self.credentials.password());

        debug!(target: "ACQUISITION", "step 3: registering {}", self.state.staged_path.as_str());

        let response = self.transport.call(call).await?;

        match response.into_outcome() {
            Outcome::Fault(fault) => Err(Error::Registration {
                reason: fault.to_string(),
            }),
            Outcome::Success(result) => Ok(Registered {
                job: JobDescriptor(result),
            }),
        }
    }
}

/// Runs the three steps in order and returns the job descriptor.
///
/// # Errors
///
/// Will return the error of the first step that fails. No step runs after it.
pub async fn run(
    transport: &dyn Transport,
    credentials: Credentials,
    url: &TorrentUrl,
    placement: &Placement,
) -> Result<JobDescriptor, Error> {
    let registered = Acquisition::new(transport, credentials)
        .authenticate()
        .await?
        .fetch(url)
        .await?
        .register(placement)
        .await?;

    Ok(registered.job)
}
