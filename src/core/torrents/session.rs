//! Session client for the daemon web interface.
//!
//! Every call is one HTTP `POST` of a JSON-RPC envelope to the same endpoint.
//! The daemon answers the login with a session cookie; the client keeps it in
//! its cookie jar and sends it back with every following call.
//!
//! A [`SessionClient`] owns exactly one session. Whether a session lives for a
//! single acquisition or for the whole process is decided by the
//! [`TorrentService`](crate::core::torrents::service::TorrentService).
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use api_service_located_error::DynError;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::error::Error;
use super::rpc::{Method, RpcCall, RpcResponse};

/// Sends one call to the daemon and returns the undecoded answer envelope.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait Transport: Sync + Send {
    /// # Errors
    ///
    /// Will return a `Transport` error if the request cannot be sent or the
    /// answer cannot be read, and a `Decode` error if the answer is not an
    /// envelope.
    async fn call(&self, call: RpcCall) -> Result<RpcResponse, Error>;
}

/// A [`Transport`] over HTTP with a cookie jar.
pub struct SessionClient {
    endpoint: Url,
    reqwest: reqwest::Client,
    authenticated: AtomicBool,
}

impl SessionClient {
    /// # Errors
    ///
    /// Will return a `Transport` error if the HTTP client cannot be built.
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, Error> {
        let builder = reqwest::Client::builder().cookie_store(true);

        let builder = match timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };

        let reqwest = builder.build().map_err(|err| Error::Transport {
            endpoint: endpoint.to_string(),
            source: (Arc::new(err) as DynError).into(),
        })?;

        Ok(Self {
            endpoint,
            reqwest,
            authenticated: AtomicBool::new(false),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Whether the daemon accepted a login through this session.
    ///
    /// The flag is never reset: an expired session is only noticed when a
    /// later call fails.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::Acquire)
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        Error::Transport {
            endpoint: self.endpoint.to_string(),
            source: (Arc::new(err) as DynError).into(),
        }
    }
}

#[async_trait]
impl Transport for SessionClient {
    async fn call(&self, call: RpcCall) -> Result<RpcResponse, Error> {
        let method = call.method;

        debug!(target: "DAEMON", "calling {method} (id: {}) on {}", call.id, self.endpoint);

        let response = self
            .reqwest
            .post(self.endpoint.clone())
            .json(&call)
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        let status = response.status();

        let body = response.bytes().await.map_err(|err| self.transport_error(err))?;

        debug!(target: "DAEMON", "{method} answered with status {status} and {} bytes", body.len());

        let response = RpcResponse::decode(&body).map_err(|err| Error::Decode {
            method,
            source: (Arc::new(err) as DynError).into(),
        })?;

        if method == Method::AuthLogin && response.fault().is_none() && response.result != Value::Bool(false) {
            self.authenticated.store(true, Ordering::Release);
        }

        Ok(response)
    }
}
