//! A fake Pokémon API with a three entry Pokédex.
use std::collections::HashMap;
use std::net::SocketAddr;

use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

pub const POKEDEX: [&str; 3] = ["bulbasaur", "ivysaur", "venusaur"];

pub struct FakeGameApi {
    pub address: SocketAddr,
    task: JoinHandle<()>,
}

impl FakeGameApi {
    pub async fn start() -> Self {
        let app = Router::new().route("/api/v2/pokemon", get(pokemon));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { address, task }
    }

    /// The base URL of the API, ending with a slash.
    pub fn url(&self) -> String {
        format!("http://{}/api/v2/", self.address)
    }
}

impl Drop for FakeGameApi {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn pokemon(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let offset: usize = params.get("offset").and_then(|offset| offset.parse().ok()).unwrap_or(0);

    let results: Vec<Value> = POKEDEX
        .iter()
        .skip(offset)
        .take(1)
        .map(|name| json!({"name": name, "url": format!("https://pokeapi.co/api/v2/pokemon/{name}/")}))
        .collect();

    Json(json!({"count": POKEDEX.len(), "results": results}))
}
