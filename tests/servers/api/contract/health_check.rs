use std::sync::Arc;

use api_service_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn health_check_endpoint_should_return_status_ok_on_every_path() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&Arc::new(configuration::ephemeral()));

    let without_prefix = Client::without_prefix(env.bind_address());

    for response in [
        without_prefix.get("api/health_check", &[]).await,
        without_prefix.get("health", &[]).await,
        Client::new(env.bind_address()).get("health_check", &[]).await,
    ] {
        assert_eq!(response.status(), 200);
        assert_eq!(response.text().await.unwrap(), r#"{"status":"Ok"}"#);
    }

    env.stop().await;
}
