//! Errors returned by the torrent acquisition workflow.
//!
//! Error | Step | Description
//! ---|---|---
//! `InvalidRequest` | Before any call | The torrent URL is empty or only contains whitespace.
//! `Configuration` | Before any call | A daemon credential variable is unset or empty.
//! `Transport` | Any | The HTTP request could not be sent or its body could not be read.
//! `Decode` | Any | The daemon answered with something that is not a JSON-RPC envelope.
//! `Authentication` | `auth.login` | The daemon rejected the credentials, or the login call did not go through.
//! `Download` | `web.download_torrent_from_url` | The daemon could not fetch the `.torrent` file.
//! `Protocol` | `web.download_torrent_from_url` | The daemon answered with a result the workflow cannot interpret.
//! `Registration` | `web.add_torrents` | The daemon rejected the registration of the staged file.
//!
//! Every error is terminal for the acquisition that produced it. The HTTP
//! layer only shows the [`Kind::summary`] followed by the error message; the
//! raw daemon error payload is folded into that message.
use api_service_located_error::LocatedError;
use derive_more::Display;

use super::rpc::Method;

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    #[error("the torrent url is empty")]
    InvalidRequest,

    #[error("the environment variable `{variable}` with the daemon credentials is not set")]
    Configuration { variable: String },

    #[error("unable to reach the daemon at {endpoint}: {source}")]
    Transport {
        endpoint: String,
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },

    #[error("the daemon answer to `{method}` is not a valid envelope: {source}")]
    Decode {
        method: Method,
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },

    #[error("the daemon rejected the login: {reason}")]
    Authentication { reason: String },

    #[error("the daemon could not download the torrent: {reason}")]
    Download { reason: String },

    #[error("unexpected result shape for `{method}`: {reason}")]
    Protocol { method: Method, reason: String },

    #[error("the daemon rejected the torrent registration: {reason}")]
    Registration { reason: String },
}

/// The error taxonomy exposed at the HTTP boundary.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    InvalidRequest,
    ConfigurationError,
    TransportError,
    DecodeError,
    AuthenticationError,
    DownloadError,
    ProtocolError,
    RegistrationError,
}

impl Kind {
    /// User-facing description of the failure.
    #[must_use]
    pub fn summary(self) -> &'static str {
        match self {
            Kind::InvalidRequest => "invalid torrent request",
            Kind::ConfigurationError => "the torrent daemon is not configured",
            Kind::TransportError => "the torrent daemon is unreachable",
            Kind::DecodeError => "the torrent daemon sent an unreadable answer",
            Kind::AuthenticationError => "unable to log in to the torrent daemon",
            Kind::DownloadError => "the torrent could not be downloaded",
            Kind::ProtocolError => "the torrent daemon sent an unexpected answer",
            Kind::RegistrationError => "the torrent could not be added",
        }
    }
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Error::InvalidRequest => Kind::InvalidRequest,
            Error::Configuration { .. } => Kind::ConfigurationError,
            Error::Transport { .. } => Kind::TransportError,
            Error::Decode { .. } => Kind::DecodeError,
            Error::Authentication { .. } => Kind::AuthenticationError,
            Error::Download { .. } => Kind::DownloadError,
            Error::Protocol { .. } => Kind::ProtocolError,
            Error::Registration { .. } => Kind::RegistrationError,
        }
    }

    /// The single string shown to the caller: the kind summary plus the detail.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        format!("{}: {self}", self.kind().summary())
    }
}
