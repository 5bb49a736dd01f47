//! Errors returned while building the core [`Backend`](crate::core::Backend).
//!
//! Error | Description
//! ---|---
//! `Database` | The score store could not be opened or its internal tables could not be created.
//! `Torrents` | The daemon client could not be built.
//! `Games` | The game API client could not be built.
use api_service_located_error::{Located, LocatedError};

use super::{databases, games, torrents};

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    #[error("Unable to open the score store: {source}")]
    Database {
        source: LocatedError<'static, databases::error::Error>,
    },

    #[error("Unable to build the torrent daemon client: {source}")]
    Torrents {
        source: LocatedError<'static, torrents::error::Error>,
    },

    #[error("Unable to build the game api client: {source}")]
    Games {
        source: LocatedError<'static, games::Error>,
    },
}

impl From<databases::error::Error> for Error {
    #[track_caller]
    fn from(err: databases::error::Error) -> Self {
        Self::Database {
            source: Located(err).into(),
        }
    }
}

impl From<torrents::error::Error> for Error {
    #[track_caller]
    fn from(err: torrents::error::Error) -> Self {
        Self::Torrents {
            source: Located(err).into(),
        }
    }
}

impl From<games::Error> for Error {
    #[track_caller]
    fn from(err: games::Error) -> Self {
        Self::Games {
            source: Located(err).into(),
        }
    }
}
