//! The `SQLite3` database driver.
use std::panic::Location;

use api_service_configuration::Driver;
use async_trait::async_trait;
use r2d2::Pool;
use r2d2_sqlite::rusqlite::{params, OptionalExtension};
use r2d2_sqlite::SqliteConnectionManager;

use super::{Database, Error};
use crate::core::scoreboard::names::{Label, TableName, Username, INTERNAL_TABLES};

const DRIVER: Driver = Driver::Sqlite3;

pub struct Sqlite {
    pool: Pool<SqliteConnectionManager>,
}

/// Score table names are validated identifiers. They are still quoted so
/// keywords like `order` can be used as names.
fn quoted(table: &TableName) -> String {
    format!("\"{}\"", table.as_str())
}

#[async_trait]
impl Database for Sqlite {
    /// It instantiates a new `SQLite3` database driver.
    ///
    /// Refer to [`databases::Database::new`](crate::core::databases::Database::new).
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create `SqLite` database.
    fn new(db_path: &str) -> Result<Sqlite, Error> {
        let cm = SqliteConnectionManager::file(db_path);
        Pool::new(cm).map_or_else(|err| Err((err, DRIVER).into()), |pool| Ok(Sqlite { pool }))
    }

    /// Refer to [`databases::Database::create_database_tables`](crate::core::databases::Database::create_database_tables).
    fn create_database_tables(&self) -> Result<(), Error> {
        let create_answers_table = "
        CREATE TABLE IF NOT EXISTS answers (
            table_name TEXT NOT NULL,
            label TEXT NOT NULL,
            answer TEXT NOT NULL,
            PRIMARY KEY (table_name, label)
        );"
        .to_string();

        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(&create_answers_table, [])?;

        Ok(())
    }

    /// Refer to [`databases::Database::drop_database_tables`](crate::core::databases::Database::drop_database_tables).
    fn drop_database_tables(&self) -> Result<(), Error> {
        let drop_answers_table = "
        DROP TABLE answers;"
            .to_string();

        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(&drop_answers_table, [])?;

        Ok(())
    }

    /// Refer to [`databases::Database::ping`](crate::core::databases::Database::ping).
    async fn ping(&self) -> Result<(), Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;

        Ok(())
    }

    /// Refer to [`databases::Database::list_tables`](crate::core::databases::Database::list_tables).
    async fn list_tables(&self) -> Result<Vec<String>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt =
            conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name")?;

        let table_iter = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let tables: Vec<String> = table_iter
            .filter_map(std::result::Result::ok)
            .filter(|name| !INTERNAL_TABLES.contains(&name.as_str()))
            .collect();

        Ok(tables)
    }

    /// Refer to [`databases::Database::table_exists`](crate::core::databases::Database::table_exists).
    async fn table_exists(&self, table: &TableName) -> Result<bool, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table.as_str()],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }

    /// Refer to [`databases::Database::create_table`](crate::core::databases::Database::create_table).
    async fn create_table(&self, table: &TableName) -> Result<(), Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS {} (
                    username TEXT PRIMARY KEY NOT NULL,
                    score INTEGER DEFAULT 0 NOT NULL
                );",
                quoted(table)
            ),
            [],
        )?;

        Ok(())
    }

    /// Refer to [`databases::Database::drop_table`](crate::core::databases::Database::drop_table).
    async fn drop_table(&self, table: &TableName) -> Result<(), Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(&format!("DROP TABLE IF EXISTS {};", quoted(table)), [])?;
        conn.execute("DELETE FROM answers WHERE table_name = ?1", [table.as_str()])?;

        Ok(())
    }

    /// Refer to [`databases::Database::add_user`](crate::core::databases::Database::add_user).
    async fn add_user(&self, table: &TableName, username: &Username) -> Result<bool, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let insert = conn.execute(
            &format!(
                "INSERT INTO {} (username, score) VALUES (?1, 0) ON CONFLICT(username) DO NOTHING",
                quoted(table)
            ),
            [username.as_str()],
        )?;

        Ok(insert > 0)
    }

    /// Refer to [`databases::Database::get_score`](crate::core::databases::Database::get_score).
    async fn get_score(&self, table: &TableName, username: &Username) -> Result<Option<i64>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let score = conn
            .query_row(
                &format!("SELECT score FROM {} WHERE username = ?1", quoted(table)),
                [username.as_str()],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;

        Ok(score)
    }

    /// Refer to [`databases::Database::set_score`](crate::core::databases::Database::set_score).
    async fn set_score(&self, table: &TableName, username: &Username, score: i64) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let updated = conn.execute(
            &format!("UPDATE {} SET score = ?1 WHERE username = ?2", quoted(table)),
            params![score, username.as_str()],
        )?;

        Ok(updated)
    }

    /// Refer to [`databases::Database::leaderboard`](crate::core::databases::Database::leaderboard).
    async fn leaderboard(&self, table: &TableName) -> Result<Vec<(String, i64)>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(&format!(
            "SELECT username, score FROM {} ORDER BY score DESC, username ASC",
            quoted(table)
        ))?;

        let score_iter = stmt.query_map([], |row| {
            let username: String = row.get(0)?;
            let score: i64 = row.get(1)?;
            Ok((username, score))
        })?;

        let scores: Vec<(String, i64)> = score_iter.filter_map(std::result::Result::ok).collect();

        Ok(scores)
    }

    /// Refer to [`databases::Database::save_answer`](crate::core::databases::Database::save_answer).
    async fn save_answer(&self, table: &TableName, label: &Label, answer: &str) -> Result<(), Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let insert = conn.execute(
            "INSERT INTO answers (table_name, label, answer) VALUES (?1, ?2, ?3)
             ON CONFLICT(table_name, label) DO UPDATE SET answer = ?3",
            [table.as_str(), label.as_str(), answer],
        )?;

        if insert == 0 {
            Err(Error::WriteFailed {
                table: "answers".to_string(),
                location: Location::caller(),
                driver: DRIVER,
            })
        } else {
            Ok(())
        }
    }

    /// Refer to [`databases::Database::load_answer`](crate::core::databases::Database::load_answer).
    async fn load_answer(&self, table: &TableName, label: &Label) -> Result<Option<String>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let answer = conn
            .query_row(
                "SELECT answer FROM answers WHERE table_name = ?1 AND label = ?2",
                [table.as_str(), label.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(answer)
    }
}
