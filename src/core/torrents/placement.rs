//! Options attached to the registration of a staged torrent.
use api_service_configuration::Daemon;
use serde::Serialize;

/// Per-file priorities and the "start immediately" flag.
///
/// ```json
/// {"file_priorities": [1, 1, 1, 1, 1], "add_paused": false}
/// ```
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub file_priorities: Vec<u8>,
    pub add_paused: bool,
}

impl Placement {
    /// The same priority for each of the `file_slots`, started right away.
    #[must_use]
    pub fn uniform(file_slots: usize, file_priority: u8) -> Self {
        Self {
            file_priorities: vec![file_priority; file_slots],
            add_paused: false,
        }
    }
}

impl From<&Daemon> for Placement {
    fn from(config: &Daemon) -> Self {
        Self::uniform(config.file_slots, config.file_priority)
    }
}

/// One entry of the `web.add_torrents` parameter list.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TorrentEntry<'a> {
    pub path: &'a str,
    pub options: &'a Placement,
}
