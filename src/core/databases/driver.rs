//! Database driver factory.
//!
//! See [`databases::driver::build`](crate::core::databases::driver::build)
//! function for more information.
use api_service_configuration::Driver;

use super::error::Error;
use super::sqlite::Sqlite;
use super::{Builder, Database};

/// It builds a new database driver.
///
/// Example for `SQLite3`:
///
/// ```rust,no_run
/// use api_service::core::databases;
/// use api_service_configuration::Driver;
///
/// let db_driver = Driver::Sqlite3;
/// let db_path = "./storage/api-service/lib/database/sqlite3.db".to_string();
/// let database = databases::driver::build(&db_driver, &db_path);
/// ```
///
/// Refer to the [configuration documentation](api_service_configuration)
/// for more information about the database configuration.
///
/// > **WARNING**: The driver instantiation creates the internal tables.
///
/// # Errors
///
/// This function will return an error if unable to connect to the database
/// or to create the internal tables.
pub fn build(driver: &Driver, db_path: &str) -> Result<Box<dyn Database>, Error> {
    let database = match driver {
        Driver::Sqlite3 => Builder::<Sqlite>::build(db_path),
    }?;

    database.create_database_tables()?;

    Ok(database)
}
