//! Daemon credentials.
//!
//! The credentials are never part of the configuration. The configuration
//! only names the environment variables that hold them, and they are read at
//! the beginning of every acquisition so a rotated password is picked up
//! without restarting the service.
use std::env;
use std::fmt;

#[cfg(test)]
use mockall::automock;

use super::error::Error;

/// The user name and password used to log in to the daemon.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_owned(),
            password: password.to_owned(),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Source of the daemon credentials.
#[cfg_attr(test, automock)]
pub trait CredentialStore: Sync + Send {
    /// # Errors
    ///
    /// Will return a `Configuration` error if any of the credentials is missing.
    fn credentials(&self) -> Result<Credentials, Error>;
}

/// Reads the credentials from two environment variables.
#[derive(Debug, Clone)]
pub struct EnvCredentialStore {
    username_var: String,
    password_var: String,
}

impl EnvCredentialStore {
    #[must_use]
    pub fn new(username_var: &str, password_var: &str) -> Self {
        Self {
            username_var: username_var.to_owned(),
            password_var: password_var.to_owned(),
        }
    }

    fn read(variable: &str) -> Result<String, Error> {
        match env::var(variable) {
            Ok(value) if !value.is_empty() => Ok(value),
            _ => Err(Error::Configuration {
                variable: variable.to_owned(),
            }),
        }
    }
}

impl CredentialStore for EnvCredentialStore {
    fn credentials(&self) -> Result<Credentials, Error> {
        let username = Self::read(&self.username_var)?;
        let password = Self::read(&self.password_var)?;

        Ok(Credentials { username, password })
    }
}
