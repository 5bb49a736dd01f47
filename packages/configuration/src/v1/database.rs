use std::fmt;

use serde::{Deserialize, Serialize};

/// The relational store that keeps the score tables and the saved answers.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Database {
    /// Database driver. The only supported value is `sqlite3`.
    #[serde(default = "Database::default_driver")]
    pub driver: Driver,

    /// Database connection string. The format depends on the database driver.
    /// For `sqlite3`, the format is `path/to/database.db`, for example:
    /// `./storage/api-service/lib/database/sqlite3.db`.
    #[serde(default = "Database::default_path")]
    pub path: String,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            driver: Self::default_driver(),
            path: Self::default_path(),
        }
    }
}

impl Database {
    fn default_driver() -> Driver {
        Driver::Sqlite3
    }

    fn default_path() -> String {
        String::from("./storage/api-service/lib/database/sqlite3.db")
    }
}

/// The database management system used by the service.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    /// The `SQLite3` database driver.
    Sqlite3,
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Driver::Sqlite3 => write!(f, "sqlite3"),
        }
    }
}
