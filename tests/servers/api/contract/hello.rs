use std::sync::Arc;

use api_service_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_greet_the_world() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&Arc::new(configuration::ephemeral()));

    let response = Client::new(env.bind_address()).hello().await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), r#"{"hello":"Hello world!"}"#);

    env.stop().await;
}

#[tokio::test]
async fn should_add_a_request_id_to_every_response() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&Arc::new(configuration::ephemeral()));

    let response = Client::new(env.bind_address()).hello().await;

    assert!(response.headers().contains_key("x-request-id"));

    env.stop().await;
}
