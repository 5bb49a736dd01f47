//! A fake torrent daemon JSON-RPC endpoint.
//!
//! It answers every method with the [`Reply`] configured for it and sets a
//! session cookie when a login succeeds. Every call is recorded with the
//! cookie it carried.
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

pub const SESSION_COOKIE: &str = "_session_id=fake-daemon-session";

/// What the daemon answers to one method.
#[derive(Clone, Debug)]
pub enum Reply {
    Result(Value),
    Error(Value),
}

impl Reply {
    fn is_successful_login(&self) -> bool {
        matches!(self, Reply::Result(result) if *result != Value::Bool(false))
    }
}

#[derive(Clone, Debug)]
pub struct Behavior {
    pub login: Reply,
    pub download: Reply,
    pub add: Reply,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            login: Reply::Result(json!(true)),
            download: Reply::Result(json!("/tmp/delugeweb-fake/file.torrent")),
            add: Reply::Result(json!([[true, "f1d2d2f924e986ac86fdf7b36c94bcdf32beec15"]])),
        }
    }
}

/// A call received by the fake daemon.
#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub body: Value,
    pub cookie: Option<String>,
}

impl RecordedCall {
    pub fn method(&self) -> &str {
        self.body["method"].as_str().unwrap_or_default()
    }
}

struct DaemonState {
    behavior: Behavior,
    calls: Mutex<Vec<RecordedCall>>,
}

pub struct FakeDaemon {
    pub address: SocketAddr,
    state: Arc<DaemonState>,
    task: JoinHandle<()>,
}

impl FakeDaemon {
    pub async fn start(behavior: Behavior) -> Self {
        let state = Arc::new(DaemonState {
            behavior,
            calls: Mutex::new(vec![]),
        });

        let app = Router::new().route("/json", post(json_rpc)).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { address, state, task }
    }

    /// The JSON-RPC endpoint URL.
    pub fn url(&self) -> String {
        format!("http://{}/json", self.address)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.calls.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.calls().iter().map(|call| call.method().to_owned()).collect()
    }
}

impl Drop for FakeDaemon {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn json_rpc(State(state): State<Arc<DaemonState>>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    let cookie = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned);

    let id = body["id"].clone();
    let method = body["method"].as_str().unwrap_or_default().to_owned();

    state.calls.lock().unwrap().push(RecordedCall { body, cookie });

    let reply = match method.as_str() {
        "auth.login" => &state.behavior.login,
        "web.download_torrent_from_url" => &state.behavior.download,
        "web.add_torrents" => &state.behavior.add,
        _ => return Json(json!({"result": null, "error": {"message": "Unknown method", "code": 2}, "id": id})).into_response(),
    };

    let envelope = match reply {
        Reply::Result(result) => json!({"result": result, "error": null, "id": id}),
        Reply::Error(error) => json!({"result": null, "error": error, "id": id}),
    };

    let mut response = Json(envelope).into_response();

    if method == "auth.login" && reply.is_successful_login() {
        response.headers_mut().insert(
            header::SET_COOKIE,
            HeaderValue::from_str(&format!("{SESSION_COOKIE}; Path=/")).unwrap(),
        );
    }

    response
}
