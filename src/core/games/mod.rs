//! Client for the third-party game data API.
//!
//! It only knows one request: a random Pokémon from the first
//! `pokemon_count` entries of the Pokédex.
//!
//! ```text
//! GET {url}pokemon?offset=<random>&limit=1
//!
//! {"count": 1302, "results": [{"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon/25/"}]}
//! ```
use std::sync::Arc;

use api_service_configuration::GameApi;
use api_service_located_error::{DynError, LocatedError};
use rand::Rng;
use serde::Deserialize;
use tracing::debug;
use url::Url;

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    #[error("unable to query the game api at {url}: {source}")]
    Request {
        url: String,
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },

    #[error("unable to decode the game api answer: {source}")]
    Decode {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },

    #[error("the game api returned no pokemon at offset {offset}")]
    NoResults { offset: u32 },
}

#[derive(Deserialize, Debug)]
struct ResourceList {
    #[serde(default)]
    results: Vec<NamedResource>,
}

#[derive(Deserialize, Debug)]
struct NamedResource {
    name: String,
}

/// Game API client.
pub struct Client {
    base_url: Url,
    reqwest: reqwest::Client,
    pokemon_count: u32,
}

impl Client {
    /// # Errors
    ///
    /// Will return a `Request` error if the HTTP client cannot be built.
    pub fn new(config: &GameApi) -> Result<Self, Error> {
        let reqwest = reqwest::Client::builder().build().map_err(|err| Error::Request {
            url: config.url.to_string(),
            source: (Arc::new(err) as DynError).into(),
        })?;

        Ok(Self {
            base_url: config.url.clone(),
            reqwest,
            pokemon_count: config.pokemon_count,
        })
    }

    /// It returns the name of a random Pokémon.
    ///
    /// # Errors
    ///
    /// Will return an error if the API cannot be reached, if its answer cannot
    /// be decoded or if it has no results.
    pub async fn random_pokemon(&self) -> Result<String, Error> {
        let offset = rand::thread_rng().gen_range(0..self.pokemon_count.max(1));

        self.pokemon_at(offset).await
    }

    /// It returns the name of the Pokémon at `offset` in the Pokédex.
    ///
    /// # Errors
    ///
    /// Will return an error if the API cannot be reached, if its answer cannot
    /// be decoded or if it has no results.
    pub async fn pokemon_at(&self, offset: u32) -> Result<String, Error> {
        let url = self.pokemon_url(offset)?;

        debug!(target: "GAME API", "GET {url}");

        let response = self
            .reqwest
            .get(url.clone())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| Self::request_error(&url, err))?;

        let body = response.bytes().await.map_err(|err| Self::request_error(&url, err))?;

        let list: ResourceList = serde_json::from_slice(&body).map_err(|err| Error::Decode {
            source: (Arc::new(err) as DynError).into(),
        })?;

        list.results
            .into_iter()
            .next()
            .map(|pokemon| pokemon.name)
            .ok_or(Error::NoResults { offset })
    }

    fn pokemon_url(&self, offset: u32) -> Result<Url, Error> {
        let mut url = self.base_url.join("pokemon").map_err(|err| Error::Request {
            url: self.base_url.to_string(),
            source: (Arc::new(err) as DynError).into(),
        })?;

        url.query_pairs_mut()
            .append_pair("offset", &offset.to_string())
            .append_pair("limit", "1");

        Ok(url)
    }

    fn request_error(url: &Url, err: reqwest::Error) -> Error {
        Error::Request {
            url: url.to_string(),
            source: (Arc::new(err) as DynError).into(),
        }
    }
}
