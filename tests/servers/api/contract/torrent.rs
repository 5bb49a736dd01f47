use std::sync::Arc;

use api_service_configuration::SessionScope;
use api_service_test_helpers::configuration;
use serde_json::{json, Value};
use tracing::level_filters::LevelFilter;

use crate::common::fakes::daemon::{Behavior, FakeDaemon, SESSION_COOKIE};
use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::client::Client;
use crate::servers::api::Started;

const TORRENT_URL: &str = "https://example.com/ubuntu.torrent";

async fn start(behavior: Behavior, session: SessionScope) -> (FakeDaemon, Started) {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let daemon = FakeDaemon::start(behavior).await;

    let mut config = configuration::ephemeral_with_daemon(&daemon.url());
    config.daemon.session = session;

    let env = Started::new(&Arc::new(config));
    env.set_daemon_credentials("admin", "deluge");

    (daemon, env)
}

async fn error_of(response: reqwest::Response) -> String {
    let body: Value = response.json().await.unwrap();
    body["error"].as_str().unwrap().to_owned()
}

#[tokio::test]
async fn should_run_the_three_daemon_calls_and_return_the_job_descriptor() {
    let (daemon, env) = start(Behavior::default(), SessionScope::PerRequest).await;

    let response = Client::new(env.bind_address()).add_torrent(TORRENT_URL).await;

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!([[true, "f1d2d2f924e986ac86fdf7b36c94bcdf32beec15"]])
    );

    assert_eq!(
        daemon.methods(),
        ["auth.login", "web.download_torrent_from_url", "web.add_torrents"]
    );

    let calls = daemon.calls();
    let ids: Vec<Value> = calls.iter().map(|call| call.body["id"].clone()).collect();
    assert_eq!(ids, [json!(1), json!(2), json!(3)]);
    assert!(calls.iter().all(|call| call.body["jsonrpc"] == json!("2.0")));

    assert_eq!(calls[0].body["params"], json!(["deluge"]));
    assert_eq!(calls[1].body["params"], json!([TORRENT_URL]));
    assert_eq!(
        calls[2].body["params"],
        json!([[{"path": "/tmp/delugeweb-fake/file.torrent", "options": {"file_priorities": [1, 1, 1, 1, 1], "add_paused": false}}]])
    );

    env.stop().await;
}

#[tokio::test]
async fn should_only_send_the_credentials_in_the_login_params_and_the_registration_call() {
    let (daemon, env) = start(Behavior::default(), SessionScope::PerRequest).await;

    Client::new(env.bind_address()).add_torrent(TORRENT_URL).await;

    let calls = daemon.calls();
    assert!(calls[0].body.get("username").is_none());
    assert!(calls[1].body.get("username").is_none());
    assert!(calls[1].body.get("password").is_none());
    assert_eq!(calls[2].body["username"], json!("admin"));
    assert_eq!(calls[2].body["password"], json!("deluge"));

    env.stop().await;
}

#[tokio::test]
async fn should_send_the_session_cookie_after_logging_in() {
    let (daemon, env) = start(Behavior::default(), SessionScope::PerRequest).await;

    Client::new(env.bind_address()).add_torrent(TORRENT_URL).await;

    let calls = daemon.calls();
    assert_eq!(calls[0].cookie, None);
    assert_eq!(calls[1].cookie.as_deref(), Some(SESSION_COOKIE));
    assert_eq!(calls[2].cookie.as_deref(), Some(SESSION_COOKIE));

    env.stop().await;
}

#[tokio::test]
async fn should_open_a_new_session_for_every_request_by_default() {
    let (daemon, env) = start(Behavior::default(), SessionScope::PerRequest).await;

    let client = Client::new(env.bind_address());
    client.add_torrent(TORRENT_URL).await;
    client.add_torrent(TORRENT_URL).await;

    let calls = daemon.calls();
    assert_eq!(calls.len(), 6);
    assert_eq!(calls[3].cookie, None);
    assert_eq!(calls[3].body["id"], json!(1));

    env.stop().await;
}

#[tokio::test]
async fn should_reuse_the_session_cookie_when_the_session_is_shared() {
    let (daemon, env) = start(Behavior::default(), SessionScope::Shared).await;

    let client = Client::new(env.bind_address());
    client.add_torrent(TORRENT_URL).await;
    client.add_torrent(TORRENT_URL).await;

    let calls = daemon.calls();
    assert_eq!(calls.len(), 6);
    assert_eq!(calls[3].method(), "auth.login");
    assert_eq!(calls[3].cookie.as_deref(), Some(SESSION_COOKIE));

    env.stop().await;
}

#[tokio::test]
async fn should_also_be_routed_without_the_api_prefix() {
    let (daemon, env) = start(Behavior::default(), SessionScope::PerRequest).await;

    let response = Client::without_prefix(env.bind_address()).add_torrent(TORRENT_URL).await;

    assert_eq!(response.status(), 200);
    assert_eq!(daemon.calls().len(), 3);

    env.stop().await;
}

mod should_fail {
    use serde_json::json;

    use super::{error_of, start, TORRENT_URL};
    use crate::common::fakes::daemon::{Behavior, Reply};
    use crate::servers::api::client::Client;
    use api_service_configuration::SessionScope;

    #[tokio::test]
    async fn with_400_and_no_daemon_call_when_the_url_is_blank() {
        let (daemon, env) = start(Behavior::default(), SessionScope::PerRequest).await;

        let response = Client::new(env.bind_address()).add_torrent("   ").await;

        assert_eq!(response.status(), 400);
        assert!(error_of(response).await.starts_with("invalid torrent request"));
        assert!(daemon.calls().is_empty());

        env.stop().await;
    }

    #[tokio::test]
    async fn with_400_when_the_url_is_missing() {
        let (daemon, env) = start(Behavior::default(), SessionScope::PerRequest).await;

        let response = Client::new(env.bind_address()).post_json("add_torrent", &json!({})).await;

        assert_eq!(response.status(), 400);
        assert!(daemon.calls().is_empty());

        env.stop().await;
    }

    #[tokio::test]
    async fn with_400_when_the_body_is_not_json() {
        let (daemon, env) = start(Behavior::default(), SessionScope::PerRequest).await;

        let response = Client::new(env.bind_address()).post_raw("add_torrent", "{not json").await;

        assert_eq!(response.status(), 400);
        assert!(daemon.calls().is_empty());

        env.stop().await;
    }

    #[tokio::test]
    async fn with_500_and_no_daemon_call_when_the_credentials_are_not_set() {
        let (daemon, env) = start(Behavior::default(), SessionScope::PerRequest).await;
        std::env::remove_var(&env.config.daemon.password_env_var);

        let response = Client::new(env.bind_address()).add_torrent(TORRENT_URL).await;

        assert_eq!(response.status(), 500);
        assert!(error_of(response).await.contains(&env.config.daemon.password_env_var));
        assert!(daemon.calls().is_empty());

        env.stop().await;
    }

    #[tokio::test]
    async fn with_500_and_a_single_call_when_the_login_is_rejected() {
        let behavior = Behavior {
            login: Reply::Error(json!({"message": "Bad login", "code": 1})),
            ..Default::default()
        };
        let (daemon, env) = start(behavior, SessionScope::PerRequest).await;

        let response = Client::new(env.bind_address()).add_torrent(TORRENT_URL).await;

        assert_eq!(response.status(), 500);
        let error = error_of(response).await;
        assert!(error.starts_with("unable to log in to the torrent daemon"));
        assert!(error.contains("Bad login"));
        assert_eq!(daemon.methods(), ["auth.login"]);

        env.stop().await;
    }

    #[tokio::test]
    async fn with_500_when_the_login_result_is_false() {
        let behavior = Behavior {
            login: Reply::Result(json!(false)),
            ..Default::default()
        };
        let (daemon, env) = start(behavior, SessionScope::PerRequest).await;

        let response = Client::new(env.bind_address()).add_torrent(TORRENT_URL).await;

        assert_eq!(response.status(), 500);
        assert!(error_of(response).await.starts_with("unable to log in to the torrent daemon"));
        assert_eq!(daemon.calls().len(), 1);

        env.stop().await;
    }

    #[tokio::test]
    async fn with_500_and_no_registration_when_the_download_fails() {
        let behavior = Behavior {
            download: Reply::Error(json!("404 Not Found")),
            ..Default::default()
        };
        let (daemon, env) = start(behavior, SessionScope::PerRequest).await;

        let response = Client::new(env.bind_address()).add_torrent(TORRENT_URL).await;

        assert_eq!(response.status(), 500);
        assert_eq!(
            error_of(response).await,
            "the torrent could not be downloaded: the daemon could not download the torrent: 404 Not Found"
        );
        assert_eq!(daemon.methods(), ["auth.login", "web.download_torrent_from_url"]);

        env.stop().await;
    }

    #[tokio::test]
    async fn with_500_when_the_download_result_is_not_a_path() {
        let behavior = Behavior {
            download: Reply::Result(json!(42)),
            ..Default::default()
        };
        let (daemon, env) = start(behavior, SessionScope::PerRequest).await;

        let response = Client::new(env.bind_address()).add_torrent(TORRENT_URL).await;

        assert_eq!(response.status(), 500);
        assert!(error_of(response).await.starts_with("the torrent daemon sent an unexpected answer"));
        assert_eq!(daemon.calls().len(), 2);

        env.stop().await;
    }

    #[tokio::test]
    async fn with_500_when_the_registration_is_rejected() {
        let behavior = Behavior {
            add: Reply::Error(json!({"message": "Torrent already in session", "code": 4})),
            ..Default::default()
        };
        let (daemon, env) = start(behavior, SessionScope::PerRequest).await;

        let response = Client::new(env.bind_address()).add_torrent(TORRENT_URL).await;

        assert_eq!(response.status(), 500);
        assert!(error_of(response).await.starts_with("the torrent could not be added"));
        assert_eq!(daemon.calls().len(), 3);

        env.stop().await;
    }

    #[tokio::test]
    async fn with_500_when_the_daemon_is_unreachable() {
        let (daemon, env) = start(Behavior::default(), SessionScope::PerRequest).await;
        let client = Client::new(env.bind_address());
        drop(daemon);

        let response = client.add_torrent(TORRENT_URL).await;

        assert_eq!(response.status(), 500);
        assert!(error_of(response).await.starts_with("unable to log in to the torrent daemon"));

        env.stop().await;
    }
}
