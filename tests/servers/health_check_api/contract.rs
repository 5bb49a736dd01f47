use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use api_service::servers::health_check_api::resources::{Report, Status};
use api_service_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use super::environment::Environment;
use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::Started;

#[tokio::test]
async fn health_check_endpoint_should_return_ok_when_the_api_and_the_store_are_healthy() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let config = Arc::new(configuration::ephemeral());
    let api = Started::new(&config);

    let env = Environment::start(config.health_check_api.bind_address, api.backend.clone(), api.bind_address()).await;

    let response = reqwest::get(env.health_check_url()).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");

    let report = response.json::<Report>().await.expect("it should be able to get the report as json");

    assert_eq!(report, Report::ok());

    env.stop().await;
    api.stop().await;
}

#[tokio::test]
async fn health_check_endpoint_should_return_an_error_when_the_api_is_not_running() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let config = Arc::new(configuration::ephemeral());
    let api = Started::new(&config);
    let backend = api.backend.clone();
    let api_address = api.bind_address();
    api.stop().await;

    let env = Environment::start(config.health_check_api.bind_address, backend, api_address).await;

    let response = reqwest::get(env.health_check_url()).await.unwrap();

    assert_eq!(response.status(), 503);

    let report = response.json::<Report>().await.expect("it should be able to get the report as json");

    assert_eq!(report.status, Status::Error);
    assert!(report.message.contains(&api_address.to_string()));

    env.stop().await;
}

#[tokio::test]
async fn health_check_root_path_should_answer_an_empty_object() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let config = Arc::new(configuration::ephemeral());
    let api = Started::new(&config);

    let env = Environment::start(
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0),
        api.backend.clone(),
        api.bind_address(),
    )
    .await;

    let response = reqwest::get(format!("http://{}/", env.binding)).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "{}");

    env.stop().await;
    api.stop().await;
}
