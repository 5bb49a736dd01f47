use std::net::SocketAddr;
use std::sync::Arc;

use api_service::bootstrap::jobs::Started;
use api_service::core::Backend;
use api_service::servers::health_check_api::handlers::HealthCheckState;
use api_service::servers::health_check_api::server;
use api_service::servers::signals::Halted;
use tokio::sync::oneshot::{self, Sender};
use tokio::task::JoinHandle;

/// A running health check API probing the API at `api_address`.
pub struct Environment {
    pub binding: SocketAddr,
    halt: Sender<Halted>,
    task: JoinHandle<()>,
}

impl Environment {
    pub async fn start(bind_to: SocketAddr, backend: Arc<Backend>, api_address: SocketAddr) -> Self {
        let (tx_start, rx_start) = oneshot::channel::<Started>();
        let (tx_halt, rx_halt) = oneshot::channel::<Halted>();

        let running = server::start(bind_to, tx_start, rx_halt, HealthCheckState::new(backend, api_address)).unwrap();

        let task = tokio::spawn(async move {
            running.await.unwrap();
        });

        let binding = rx_start.await.unwrap().address;

        Self {
            binding,
            halt: tx_halt,
            task,
        }
    }

    pub async fn stop(self) {
        self.halt.send(Halted::Normal).unwrap();
        self.task.await.unwrap();
    }

    pub fn health_check_url(&self) -> String {
        format!("http://{}/health_check", self.binding)
    }
}
