//! Torrent acquisition through a remote download daemon.
//!
//! The daemon exposes a JSON-RPC interface over HTTP with session cookies.
//! Acquiring a torrent takes three calls, each one depending on the previous:
//!
//! Step | Method | Params | Result
//! ---|---|---|---
//! 1 | `auth.login` | `[password]` | anything but `false`
//! 2 | `web.download_torrent_from_url` | `[url]` | the staged file path
//! 3 | `web.add_torrents` | `[[{path, options}]]` + credentials | the job descriptor
//!
//! Modules:
//!
//! - [`rpc`]: the envelope codec.
//! - [`session`]: the cookie-keeping HTTP client.
//! - [`credentials`]: where the daemon user name and password come from.
//! - [`placement`]: the options attached to the registration.
//! - [`workflow`]: the state machine running the three steps.
//! - [`service`]: the entry point used by the HTTP API.
//! - [`error`]: the error taxonomy.
pub mod credentials;
pub mod error;
pub mod placement;
pub mod rpc;
pub mod service;
pub mod session;
pub mod workflow;
