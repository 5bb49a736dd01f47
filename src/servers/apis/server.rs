//! Logic to run the HTTP API server.
//!
//! It contains two main structs: `ApiServer` and `Launcher`.
//!
//! The `ApiServer` struct is a controller and a state machine:
//!
//! ```text
//! ApiServer<Stopped> --start--> ApiServer<Running> --stop--> ApiServer<Stopped>
//! ```
//!
//! It relies on the `Launcher` to bind the socket and build the server with
//! graceful shutdown. The server runs on its own task until the controller
//! halts it or the process receives a shutdown signal.
//!
//! The main application starts the server through the
//! [`http_api`](crate::bootstrap::jobs::http_api) job. Tests use the
//! controller directly to start and stop it.
use std::net::SocketAddr;
use std::sync::Arc;

use api_service_located_error::{Located, LocatedError};
use derive_more::Constructor;
use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::sync::oneshot::{Receiver, Sender};
use tokio::task::JoinHandle;
use tracing::{error, info};

use super::routes::router;
use super::API_LOG_TARGET;
use crate::core::Backend;
use crate::servers::signals::{graceful_shutdown, Halted};
use crate::servers::STARTED_ON;

/// Errors that can occur when starting or stopping the API server.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unable to bind the API server to {addr}: {source}")]
    UnableToBind {
        addr: SocketAddr,
        source: LocatedError<'static, std::io::Error>,
    },

    #[error("Unable to send the halt message to the API server running on {addr}")]
    UnableToHalt { addr: SocketAddr },

    #[error("Unable to join the API server task: {source}")]
    UnableToJoin {
        source: LocatedError<'static, tokio::task::JoinError>,
    },
}

/// A stopped API server.
#[allow(clippy::module_name_repetitions)]
pub type StoppedApiServer = ApiServer<Stopped>;

/// A running API server.
#[allow(clippy::module_name_repetitions)]
pub type RunningApiServer = ApiServer<Running>;

/// An API server controller. It can only be started when it is stopped and
/// stopped when it is running.
#[allow(clippy::module_name_repetitions)]
pub struct ApiServer<S> {
    /// The state of the server: `running` or `stopped`.
    pub state: S,
}

/// A stopped API server state.
pub struct Stopped {
    launcher: Launcher,
}

/// A running API server state.
pub struct Running {
    /// The address the server is bound to. With port `0` in the configuration
    /// it is the only place to find the port the system picked.
    pub binding: SocketAddr,
    pub halt_task: Sender<Halted>,
    pub task: JoinHandle<Launcher>,
}

impl ApiServer<Stopped> {
    #[must_use]
    pub fn new(launcher: Launcher) -> Self {
        Self {
            state: Stopped { launcher },
        }
    }

    /// It starts the server and returns an `ApiServer` controller in
    /// `running` state.
    ///
    /// # Errors
    ///
    /// It would return an error if the socket cannot be bound.
    pub fn start(self, backend: Arc<Backend>) -> Result<ApiServer<Running>, Error> {
        let (tx_halt, rx_halt) = tokio::sync::oneshot::channel::<Halted>();

        let launcher = self.state.launcher;

        let (binding, server) = launcher.start(backend, rx_halt)?;

        let task = tokio::spawn(async move {
            server.await;

            launcher
        });

        info!(target: API_LOG_TARGET, "{STARTED_ON}: http://{binding}");

        Ok(ApiServer {
            state: Running {
                binding,
                halt_task: tx_halt,
                task,
            },
        })
    }
}

impl ApiServer<Running> {
    /// It stops the server and returns an `ApiServer` controller in
    /// `stopped` state.
    ///
    /// # Errors
    ///
    /// It would return an error if the halt channel was closed or the server
    /// task cannot be joined.
    pub async fn stop(self) -> Result<ApiServer<Stopped>, Error> {
        let addr = self.state.binding;

        self.state
            .halt_task
            .send(Halted::Normal)
            .map_err(|_| Error::UnableToHalt { addr })?;

        let launcher = self.state.task.await.map_err(|err| Error::UnableToJoin {
            source: Located(err).into(),
        })?;

        Ok(ApiServer {
            state: Stopped { launcher },
        })
    }
}

/// Binds the socket and builds the server with graceful shutdown.
#[derive(Constructor, Debug, Clone, Copy)]
pub struct Launcher {
    pub bind_to: SocketAddr,
}

impl Launcher {
    /// It binds the socket and returns the bound address and the server
    /// future. The server stops when `rx_halt` receives a message.
    ///
    /// # Errors
    ///
    /// It would return an error if the socket cannot be bound.
    pub fn start(&self, backend: Arc<Backend>, rx_halt: Receiver<Halted>) -> Result<(SocketAddr, BoxFuture<'static, ()>), Error> {
        let bind_error = |err: std::io::Error| Error::UnableToBind {
            addr: self.bind_to,
            source: Located(err).into(),
        };

        let socket = std::net::TcpListener::bind(self.bind_to).map_err(bind_error)?;
        socket.set_nonblocking(true).map_err(bind_error)?;
        let address = socket.local_addr().map_err(bind_error)?;

        let handle = axum_server::Handle::new();

        tokio::task::spawn(graceful_shutdown(
            handle.clone(),
            rx_halt,
            format!("Shutting down API server on socket address: {address}"),
        ));

        let running = axum_server::from_tcp(socket)
            .handle(handle)
            .serve(router(backend).into_make_service_with_connect_info::<SocketAddr>())
            .map(move |result| {
                if let Err(err) = result {
                    error!(target: API_LOG_TARGET, "API server on {address} failed: {err}");
                }
            })
            .boxed();

        Ok((address, running))
    }
}
