use std::sync::Arc;

use api_service_test_helpers::{configuration, random};
use serde_json::Value;
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

#[tokio::test]
async fn should_create_a_table_and_list_it() {
    let env = start();
    let client = Client::new(env.bind_address());
    let table = random::table_name();

    let response = client.create_table(&table).await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), format!(r#"{{"table_created":"{table}"}}"#));

    let tables: Value = client.list_tables().await.json().await.unwrap();
    assert_eq!(tables["tables"], serde_json::json!([table]));

    env.stop().await;
}

#[tokio::test]
async fn creating_an_existing_table_should_not_fail() {
    let env = start();
    let client = Client::new(env.bind_address());
    let table = random::table_name();

    client.create_table(&table).await;
    let response = client.create_table(&table).await;

    assert_eq!(response.status(), 200);

    env.stop().await;
}

#[tokio::test]
async fn should_delete_a_table() {
    let env = start();
    let client = Client::new(env.bind_address());
    let table = random::table_name();
    client.create_table(&table).await;

    let response = client.delete_table(&table).await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), format!(r#"{{"table_deleted":"{table}"}}"#));
    assert_eq!(client.list_tables().await.status(), 404);

    env.stop().await;
}

#[tokio::test]
async fn should_add_a_user_to_a_table_with_score_zero() {
    let env = start();
    let client = Client::new(env.bind_address());
    let table = random::table_name();
    client.create_table(&table).await;

    let response = client.add_user(&table, "ash").await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), r#"{"added_user":"ash"}"#);
    assert_eq!(
        client.get_current_score(&table, "ash").await.text().await.unwrap(),
        "Score for ash: 0\n"
    );

    env.stop().await;
}

mod should_fail {
    use api_service_test_helpers::random;
    use serde_json::{json, Value};

    use super::start;
    use crate::servers::api::client::Client;

    #[tokio::test]
    async fn with_404_listing_tables_when_there_are_none() {
        let env = start();

        let response = Client::new(env.bind_address()).list_tables().await;

        assert_eq!(response.status(), 404);
        assert_eq!(
            response.json::<Value>().await.unwrap(),
            json!({"error": "there are no score tables"})
        );

        env.stop().await;
    }

    #[tokio::test]
    async fn with_400_creating_a_table_with_an_invalid_name() {
        let env = start();
        let client = Client::new(env.bind_address());

        for name in ["1scores", "drop table x; --", "", "answers", "sqlite_master"] {
            let response = client.create_table(name).await;

            assert_eq!(response.status(), 400, "table name `{name}`");
        }

        env.stop().await;
    }

    #[tokio::test]
    async fn with_400_when_the_table_name_is_missing() {
        let env = start();

        let response = Client::new(env.bind_address()).post_json("create_table", &json!({})).await;

        assert_eq!(response.status(), 400);
        assert!(response.json::<Value>().await.unwrap()["error"].is_string());

        env.stop().await;
    }

    #[tokio::test]
    async fn with_404_deleting_a_table_that_does_not_exist() {
        let env = start();

        let response = Client::new(env.bind_address()).delete_table(&random::table_name()).await;

        assert_eq!(response.status(), 404);

        env.stop().await;
    }

    #[tokio::test]
    async fn with_404_adding_a_user_to_a_table_that_does_not_exist() {
        let env = start();

        let response = Client::new(env.bind_address()).add_user(&random::table_name(), "ash").await;

        assert_eq!(response.status(), 404);

        env.stop().await;
    }

    #[tokio::test]
    async fn with_400_adding_a_blank_user_name() {
        let env = start();
        let client = Client::new(env.bind_address());
        let table = random::table_name();
        client.create_table(&table).await;

        let response = client.add_user(&table, "  ").await;

        assert_eq!(response.status(), 400);

        env.stop().await;
    }
}
