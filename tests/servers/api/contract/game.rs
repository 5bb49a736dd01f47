use std::sync::Arc;

use api_service_test_helpers::configuration;
use tracing::level_filters::LevelFilter;
use url::Url;

use crate::common::fakes::game_api::{FakeGameApi, POKEDEX};
use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_return_a_random_pokemon_name() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let game_api = FakeGameApi::start().await;

    let mut config = configuration::ephemeral();
    config.game_api.url = Url::parse(&game_api.url()).unwrap();
    config.game_api.pokemon_count = 3;

    let env = Started::new(&Arc::new(config));

    let response = Client::new(env.bind_address()).get_pokemon().await;

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    let name = body.strip_suffix('\n').unwrap();
    assert!(POKEDEX.contains(&name), "unexpected pokemon `{name}`");

    env.stop().await;
}

#[tokio::test]
async fn should_fail_with_500_when_the_game_api_is_unreachable() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&Arc::new(configuration::ephemeral()));

    let response = Client::new(env.bind_address()).get_pokemon().await;

    assert_eq!(response.status(), 500);

    env.stop().await;
}
