use api_service::servers::signals::global_shutdown_signal;
use api_service::{app, bootstrap};
use tracing::info;

#[tokio::main]
async fn main() {
    let (config, backend) = bootstrap::app::setup();

    let jobs = app::start(&config, backend).await;

    // handle the signals
    tokio::select! {
        () = global_shutdown_signal() => {
            info!("API service shutting down ...");

            // Await for all jobs to shutdown
            futures::future::join_all(jobs).await;
            info!("API service successfully shutdown.");
        }
    }
}
