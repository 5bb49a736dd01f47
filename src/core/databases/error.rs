//! Errors of the score store drivers.
//!
//! Foreign errors (`rusqlite`, `r2d2`) are wrapped in a [`LocatedError`] so the
//! log shows where the driver call failed.
use std::panic::Location;
use std::sync::Arc;

use api_service_configuration::Driver;
use api_service_located_error::{DynError, Located, LocatedError};

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    /// A statement expected a row and found none.
    #[error("The {driver} statement returned no rows: {source}")]
    QueryReturnedNoRows {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
        driver: Driver,
    },

    /// The statement failed to prepare or to run.
    #[error("The {driver} statement failed: {source}")]
    InvalidQuery {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
        driver: Driver,
    },

    /// A write statement did not change any row.
    #[error("Unable to write the `{table}` record into the {driver} database, {location}")]
    WriteFailed {
        table: String,
        location: &'static Location<'static>,
        driver: Driver,
    },

    /// The pool could not open or hand out a connection.
    #[error("Unable to get a connection from the r2d2 {driver} pool: {source}")]
    ConnectionPool {
        source: LocatedError<'static, r2d2::Error>,
        driver: Driver,
    },
}

impl From<r2d2_sqlite::rusqlite::Error> for Error {
    #[track_caller]
    fn from(err: r2d2_sqlite::rusqlite::Error) -> Self {
        match err {
            r2d2_sqlite::rusqlite::Error::QueryReturnedNoRows => Error::QueryReturnedNoRows {
                source: (Arc::new(err) as DynError).into(),
                driver: Driver::Sqlite3,
            },
            _ => Error::InvalidQuery {
                source: (Arc::new(err) as DynError).into(),
                driver: Driver::Sqlite3,
            },
        }
    }
}

impl From<(r2d2::Error, Driver)> for Error {
    #[track_caller]
    fn from(e: (r2d2::Error, Driver)) -> Self {
        let (err, driver) = e;
        Self::ConnectionPool {
            source: Located(err).into(),
            driver,
        }
    }
}
