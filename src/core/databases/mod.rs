//! The persistence module.
//!
//! Persistence is implemented with one [`Database`] trait. There is one
//! implementation of the trait (one driver):
//!
//! - [`Sqlite`](crate::core::databases::sqlite::Sqlite)
//!
//! > **NOTICE**: There are no database migrations. The internal tables are
//! > created with `CREATE TABLE IF NOT EXISTS` when the driver is built.
//!
//! The persistent objects are:
//!
//! - [Score tables](#score-tables)
//! - [Answers](#answers)
//!
//! # Score tables
//!
//! Every score table is a real table created on demand by the API, one per
//! game or contest. All of them have the same columns:
//!
//! Field      | Sample data | Description
//! ---|---|---
//! `username` | `test-user` | Primary key
//! `score`    | 20          | The user score. It starts at `0`.
//!
//! # Answers
//!
//! Free text saved under a label for a score table, for instance the right
//! answer of the current round. They are kept in the internal `answers`
//! table:
//!
//! Field        | Sample data      | Description
//! ---|---|---
//! `table_name` | `pokemon_scores` | The score table the answer belongs to
//! `label`      | `round_1`        | The answer label
//! `answer`     | `pikachu`        | The answer text
//!
//! The pair (`table_name`, `label`) is the primary key, so saving an answer
//! again replaces it.
pub mod driver;
pub mod error;
pub mod sqlite;

use std::marker::PhantomData;

use async_trait::async_trait;

use self::error::Error;
use crate::core::scoreboard::names::{Label, TableName, Username};

struct Builder<T>
where
    T: Database,
{
    phantom: PhantomData<T>,
}

impl<T> Builder<T>
where
    T: Database + 'static,
{
    pub(self) fn build(db_path: &str) -> Result<Box<dyn Database>, Error> {
        Ok(Box::new(T::new(db_path)?))
    }
}

/// The persistence trait. It contains all the methods to interact with the database.
#[async_trait]
pub trait Database: Sync + Send {
    /// It instantiates a new database driver.
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create a database.
    fn new(db_path: &str) -> Result<Self, Error>
    where
        Self: std::marker::Sized;

    // Schema

    /// It generates the internal database tables.
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to create own tables.
    fn create_database_tables(&self) -> Result<(), Error>;

    /// It drops the internal database tables.
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to drop tables.
    fn drop_database_tables(&self) -> Result<(), Error>;

    /// It runs a trivial statement to check the database answers.
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to get a connection or to run the statement.
    async fn ping(&self) -> Result<(), Error>;

    // Score tables

    /// It returns the names of the score tables, in alphabetical order.
    /// Internal tables are not included.
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    async fn list_tables(&self) -> Result<Vec<String>, Error>;

    /// # Errors
    ///
    /// Will return `Err` if unable to query.
    async fn table_exists(&self, table: &TableName) -> Result<bool, Error>;

    /// It creates an empty score table. Creating a table that already exists
    /// does nothing.
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to create the table.
    async fn create_table(&self, table: &TableName) -> Result<(), Error>;

    /// It drops a score table and the answers saved for it.
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to drop the table.
    async fn drop_table(&self, table: &TableName) -> Result<(), Error>;

    /// It adds a user with score `0`. It returns `false` if the user was
    /// already in the table.
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to insert.
    async fn add_user(&self, table: &TableName, username: &Username) -> Result<bool, Error>;

    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    async fn get_score(&self, table: &TableName, username: &Username) -> Result<Option<i64>, Error>;

    /// It sets the score of a user. It returns the number of updated rows,
    /// `0` if the user is not in the table.
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to update.
    async fn set_score(&self, table: &TableName, username: &Username, score: i64) -> Result<usize, Error>;

    /// It returns every user and score, highest score first. Ties are sorted
    /// by user name.
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    async fn leaderboard(&self, table: &TableName) -> Result<Vec<(String, i64)>, Error>;

    // Answers

    /// It saves an answer, replacing the previous one with the same label.
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save.
    async fn save_answer(&self, table: &TableName, label: &Label, answer: &str) -> Result<(), Error>;

    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    async fn load_answer(&self, table: &TableName, label: &Label) -> Result<Option<String>, Error>;
}
