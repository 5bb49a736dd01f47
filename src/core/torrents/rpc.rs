//! JSON-RPC envelope codec for the daemon web interface.
//!
//! A call is encoded as:
//!
//! ```json
//! {
//!   "jsonrpc": "2.0",
//!   "method": "web.add_torrents",
//!   "params": [[{"path": "/tmp/a.torrent", "options": {"file_priorities": [1, 1, 1, 1, 1], "add_paused": false}}]],
//!   "id": 3,
//!   "username": "admin",
//!   "password": "secret"
//! }
//! ```
//!
//! `username` and `password` are left out of the envelope unless the call
//! replays the credentials.
//!
//! The answer has a `result` of any shape and an `error` of any shape. When
//! the `error` is present it wins over whatever the `result` contains. An
//! `error` is present unless it is `null`, an empty string, an empty object or
//! an empty array.
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The protocol version tag sent in every call.
pub const PROTOCOL_VERSION: &str = "2.0";

/// The daemon methods the workflow calls, in the order it calls them.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    #[serde(rename = "auth.login")]
    AuthLogin,
    #[serde(rename = "web.download_torrent_from_url")]
    DownloadTorrentFromUrl,
    #[serde(rename = "web.add_torrents")]
    AddTorrents,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Method::AuthLogin => "auth.login",
            Method::DownloadTorrentFromUrl => "web.download_torrent_from_url",
            Method::AddTorrents => "web.add_torrents",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A call to the daemon.
#[derive(Serialize, Clone, PartialEq)]
pub struct RpcCall {
    jsonrpc: &'static str,
    pub method: Method,
    pub params: Vec<Value>,
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl RpcCall {
    #[must_use]
    pub fn new(method: Method, params: Vec<Value>, id: u64) -> Self {
        Self {
            jsonrpc: PROTOCOL_VERSION,
            method,
            params,
            id,
            username: None,
            password: None,
        }
    }

    /// Attaches the credentials to the envelope.
    #[must_use]
    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.username = Some(username.to_owned());
        self.password = Some(password.to_owned());
        self
    }

    #[must_use]
    pub fn carries_credentials(&self) -> bool {
        self.username.is_some() || self.password.is_some()
    }
}

impl fmt::Debug for RpcCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcCall")
            .field("jsonrpc", &self.jsonrpc)
            .field("method", &self.method)
            .field("params", &self.params)
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// The daemon answer to a call, before it is interpreted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Value,
    #[serde(default)]
    pub id: Value,
}

/// The interpreted answer: either the result or the daemon error.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Value),
    Fault(Fault),
}

impl RpcResponse {
    /// Decodes a raw response body.
    ///
    /// # Errors
    ///
    /// Will return an error if the body is not a JSON object.
    pub fn decode(body: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice::<Value>(body)? {
            envelope @ Value::Object(_) => serde_json::from_value(envelope),
            other => Err(serde::de::Error::custom(format!("expected a JSON object envelope, found `{other}`"))),
        }
    }

    #[must_use]
    pub fn success(result: Value, id: u64) -> Self {
        Self {
            result,
            error: Value::Null,
            id: Value::from(id),
        }
    }

    #[must_use]
    pub fn failure(error: Value, id: u64) -> Self {
        Self {
            result: Value::Null,
            error,
            id: Value::from(id),
        }
    }

    /// The daemon error, if one is present.
    #[must_use]
    pub fn fault(&self) -> Option<Fault> {
        if is_present(&self.error) {
            Some(Fault(self.error.clone()))
        } else {
            None
        }
    }

    #[must_use]
    pub fn into_outcome(self) -> Outcome {
        if is_present(&self.error) {
            Outcome::Fault(Fault(self.error))
        } else {
            Outcome::Success(self.result)
        }
    }
}

fn is_present(error: &Value) -> bool {
    match error {
        Value::Null => false,
        Value::String(message) => !message.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

/// A daemon error of unknown shape.
///
/// It is displayed as a single line: a string error verbatim, any other
/// shape as compact JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct Fault(Value);

impl Fault {
    #[must_use]
    pub fn payload(&self) -> &Value {
        &self.0
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(message) => write!(f, "{message}"),
            other => write!(f, "{other}"),
        }
    }
}
