//! Score tables and saved answers.
//!
//! The [`Scoreboard`] is the only way the API reaches the score store. It
//! validates every name before a statement runs and turns "nothing found"
//! results into errors:
//!
//! Error | Description
//! ---|---
//! `InvalidTableName` | The table name is not a valid identifier or it is reserved.
//! `InvalidLabel` | The answer label is not a valid identifier.
//! `InvalidUsername` | The user name is blank or too long.
//! `NoTables` | There are no score tables to list.
//! `TableNotFound` | The score table does not exist.
//! `UserNotFound` | The user is not in the score table.
//! `AnswerNotFound` | There is no answer with that label for the score table.
//! `Database` | The driver failed.
pub mod names;

use std::fmt;
use std::sync::Arc;

use api_service_located_error::{Located, LocatedError};
use serde::Serialize;

use self::names::{Label, TableName, Username};
use super::databases::{self, Database};

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    #[error("invalid table name `{name}`: it must be a letter or underscore followed by up to 62 letters, digits or underscores")]
    InvalidTableName { name: String },

    #[error("invalid answer label `{label}`: it must be a letter or underscore followed by up to 62 letters, digits or underscores")]
    InvalidLabel { label: String },

    #[error("invalid user name `{username}`: it must not be blank nor longer than 64 characters")]
    InvalidUsername { username: String },

    #[error("there are no score tables")]
    NoTables,

    #[error("the table `{table}` does not exist")]
    TableNotFound { table: String },

    #[error("the user `{username}` is not in the table `{table}`")]
    UserNotFound { table: String, username: String },

    #[error("there is no answer `{label}` for the table `{table}`")]
    AnswerNotFound { table: String, label: String },

    #[error("score store failure: {source}")]
    Database {
        source: LocatedError<'static, databases::error::Error>,
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

/// One line of a leaderboard.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub username: String,
    pub score: i64,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.username, self.score)
    }
}

/// Service over the score store.
pub struct Scoreboard {
    database: Arc<Box<dyn Database>>,
}

impl Scoreboard {
    #[must_use]
    pub fn new(database: Arc<Box<dyn Database>>) -> Self {
        Self { database }
    }

    /// # Errors
    ///
    /// Will return a `Database` error if the store does not answer.
    pub async fn ping(&self) -> Result<(), Error> {
        Ok(self.database.ping().await?)
    }

    /// It returns the names of all the score tables.
    ///
    /// # Errors
    ///
    /// Will return a `NoTables` error if there are none.
    pub async fn list_tables(&self) -> Result<Vec<String>, Error> {
        let tables = self.database.list_tables().await?;

        if tables.is_empty() {
            return Err(Error::NoTables);
        }

        Ok(tables)
    }

    /// It creates a score table. Creating an existing table does nothing.
    ///
    /// # Errors
    ///
    /// Will return an `InvalidTableName` error if the name is not valid.
    pub async fn create_table(&self, table: &str) -> Result<TableName, Error> {
        let table: TableName = table.parse()?;

        self.database.create_table(&table).await?;

        Ok(table)
    }

    /// It deletes a score table and its answers.
    ///
    /// # Errors
    ///
    /// Will return a `TableNotFound` error if the table does not exist.
    pub async fn drop_table(&self, table: &str) -> Result<TableName, Error> {
        let table = self.existing_table(table).await?;

        self.database.drop_table(&table).await?;

        Ok(table)
    }

    /// It adds a user to a score table with score `0`. Adding a user twice
    /// keeps the current score.
    ///
    /// # Errors
    ///
    /// Will return a `TableNotFound` error if the table does not exist.
    pub async fn add_user(&self, table: &str, username: &str) -> Result<Username, Error> {
        let table = self.existing_table(table).await?;
        let username: Username = username.parse()?;

        self.database.add_user(&table, &username).await?;

        Ok(username)
    }

    /// # Errors
    ///
    /// Will return a `UserNotFound` error if the user is not in the table.
    pub async fn get_score(&self, table: &str, username: &str) -> Result<i64, Error> {
        let table = self.existing_table(table).await?;
        let username: Username = username.parse()?;

        self.database
            .get_score(&table, &username)
            .await?
            .ok_or_else(|| Error::UserNotFound {
                table: table.to_string(),
                username: username.to_string(),
            })
    }

    /// # Errors
    ///
    /// Will return a `UserNotFound` error if the user is not in the table.
    pub async fn set_score(&self, table: &str, username: &str, score: i64) -> Result<(), Error> {
        let table = self.existing_table(table).await?;
        let username: Username = username.parse()?;

        if self.database.set_score(&table, &username, score).await? == 0 {
            return Err(Error::UserNotFound {
                table: table.to_string(),
                username: username.to_string(),
            });
        }

        Ok(())
    }

    /// # Errors
    ///
    /// Will return a `TableNotFound` error if the table does not exist.
    pub async fn leaderboard(&self, table: &str) -> Result<Vec<Entry>, Error> {
        let table = self.existing_table(table).await?;

        let entries = self
            .database
            .leaderboard(&table)
            .await?
            .into_iter()
            .map(|(username, score)| Entry { username, score })
            .collect();

        Ok(entries)
    }

    /// # Errors
    ///
    /// Will return a `TableNotFound` error if the table does not exist, and an
    /// `InvalidLabel` error if the label is not valid.
    pub async fn save_answer(&self, table: &str, label: &str, answer: &str) -> Result<(), Error> {
        let table = self.existing_table(table).await?;
        let label: Label = label.parse()?;

        Ok(self.database.save_answer(&table, &label, answer).await?)
    }

    /// # Errors
    ///
    /// Will return an `AnswerNotFound` error if nothing was saved under the label.
    pub async fn load_answer(&self, table: &str, label: &str) -> Result<String, Error> {
        let table = self.existing_table(table).await?;
        let label: Label = label.parse()?;

        self.database
            .load_answer(&table, &label)
            .await?
            .ok_or_else(|| Error::AnswerNotFound {
                table: table.to_string(),
                label: label.to_string(),
            })
    }

    async fn existing_table(&self, table: &str) -> Result<TableName, Error> {
        let table: TableName = table.parse()?;

        if self.database.table_exists(&table).await? {
            Ok(table)
        } else {
            Err(Error::TableNotFound { table: table.to_string() })
        }
    }
}
