use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for the third-party game data API.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct GameApi {
    /// Base URL of the Pokémon API. It must end with a slash.
    #[serde(default = "GameApi::default_url")]
    pub url: Url,

    /// Number of Pokémon the random pick is drawn from.
    #[serde(default = "GameApi::default_pokemon_count")]
    pub pokemon_count: u32,
}

impl Default for GameApi {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
            pokemon_count: Self::default_pokemon_count(),
        }
    }
}

impl GameApi {
    /// # Panics
    ///
    /// Will panic if the hardcoded default URL is not valid.
    fn default_url() -> Url {
        Url::parse("https://pokeapi.co/api/v2/").expect("the default game api url should be valid")
    }

    fn default_pokemon_count() -> u32 {
        151
    }
}
