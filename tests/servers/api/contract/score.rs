use std::sync::Arc;

use api_service_test_helpers::{configuration, random};
use serde_json::{json, Value};
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::client::Client;
use crate::servers::api::Started;

fn start() -> Started {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    Started::new(&Arc::new(configuration::ephemeral()))
}

async fn table_with_users(client: &Client, users: &[&str]) -> String {
    let table = random::table_name();
    client.create_table(&table).await;
    for user in users {
        client.add_user(&table, user).await;
    }
    table
}

#[tokio::test]
async fn should_update_and_read_a_user_score() {
    let env = start();
    let client = Client::new(env.bind_address());
    let table = table_with_users(&client, &["ash"]).await;

    let response = client.update_user_score(&table, "ash", 10).await;

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({"update_answer": "the score for the user has been updated"})
    );

    let response = client.get_current_score(&table, "ash").await;
    assert_eq!(response.status(), 200);
    assert!(response.headers()["content-type"].to_str().unwrap().starts_with("text/plain"));
    assert_eq!(response.text().await.unwrap(), "Score for ash: 10\n");

    env.stop().await;
}

#[tokio::test]
async fn adding_a_user_again_should_keep_the_score() {
    let env = start();
    let client = Client::new(env.bind_address());
    let table = table_with_users(&client, &["ash"]).await;
    client.update_user_score(&table, "ash", 7).await;

    client.add_user(&table, "ash").await;

    assert_eq!(
        client.get_current_score(&table, "ash").await.text().await.unwrap(),
        "Score for ash: 7\n"
    );

    env.stop().await;
}

#[tokio::test]
async fn the_leaderboard_should_list_the_highest_scores_first() {
    let env = start();
    let client = Client::new(env.bind_address());
    let table = table_with_users(&client, &["ash", "brock", "misty"]).await;
    client.update_user_score(&table, "ash", 10).await;
    client.update_user_score(&table, "misty", 12).await;
    client.update_user_score(&table, "brock", 10).await;

    let response = client.leaderboard(&table).await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "misty: 12\nash: 10\nbrock: 10\n");

    env.stop().await;
}

mod should_fail {
    use api_service_test_helpers::random;
    use serde_json::json;

    use super::{start, table_with_users};
    use crate::servers::api::client::Client;

    #[tokio::test]
    async fn with_404_reading_the_score_of_an_unknown_user() {
        let env = start();
        let client = Client::new(env.bind_address());
        let table = table_with_users(&client, &[]).await;

        let response = client.get_current_score(&table, "gary").await;

        assert_eq!(response.status(), 404);

        env.stop().await;
    }

    #[tokio::test]
    async fn with_404_updating_the_score_of_an_unknown_user() {
        let env = start();
        let client = Client::new(env.bind_address());
        let table = table_with_users(&client, &[]).await;

        let response = client.update_user_score(&table, "gary", 1).await;

        assert_eq!(response.status(), 404);

        env.stop().await;
    }

    #[tokio::test]
    async fn with_404_reading_the_leaderboard_of_an_unknown_table() {
        let env = start();

        let response = Client::new(env.bind_address()).leaderboard(&random::table_name()).await;

        assert_eq!(response.status(), 404);

        env.stop().await;
    }

    #[tokio::test]
    async fn with_400_when_a_query_param_is_missing() {
        let env = start();
        let client = Client::new(env.bind_address());

        let response = client.get("get_current_score", &[("tablename", "scores")]).await;
        assert_eq!(response.status(), 400);

        let response = client.get("leaderboard", &[]).await;
        assert_eq!(response.status(), 400);

        env.stop().await;
    }

    #[tokio::test]
    async fn with_400_when_the_score_is_not_a_number() {
        let env = start();
        let client = Client::new(env.bind_address());
        let table = table_with_users(&client, &["ash"]).await;

        let response = client
            .post_json(
                "update_user_score",
                &json!({"table_name": table, "username": "ash", "score": "ten"}),
            )
            .await;

        assert_eq!(response.status(), 400);

        env.stop().await;
    }
}
