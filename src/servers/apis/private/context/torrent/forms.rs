use serde::Deserialize;

/// The body of the `add_torrent` request. Missing fields are empty.
#[derive(Deserialize, Debug, Default)]
pub struct AddTorrentForm {
    #[serde(default)]
    pub parameters: Parameters,
}

#[derive(Deserialize, Debug, Default)]
pub struct Parameters {
    #[serde(default)]
    pub url: String,
}
