//! Validated names used by the score store.
//!
//! Table names and answer labels end up as SQL identifiers, so they are only
//! accepted when they match `^[A-Za-z_][A-Za-z0-9_]{0,62}$` and do not collide
//! with the tables the store keeps for itself. User names are always bound
//! as statement parameters and only need to be non-blank.
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use super::Error;

/// Maximum number of characters in a user name.
pub const MAX_USERNAME_LENGTH: usize = 64;

/// Tables created by the store itself. They are not score tables.
pub const INTERNAL_TABLES: [&str; 1] = ["answers"];

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,62}$").expect("the identifier pattern should be valid");
}

fn is_identifier(value: &str) -> bool {
    IDENTIFIER.is_match(value)
}

fn is_reserved(value: &str) -> bool {
    let lowercase = value.to_ascii_lowercase();
    lowercase.starts_with("sqlite_") || INTERNAL_TABLES.contains(&lowercase.as_str())
}

/// The name of a score table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableName(String);

impl TableName {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TableName {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if is_identifier(value) && !is_reserved(value) {
            Ok(Self(value.to_owned()))
        } else {
            Err(Error::InvalidTableName { name: value.to_owned() })
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The label an answer is saved under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(String);

impl Label {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Label {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if is_identifier(value) {
            Ok(Self(value.to_owned()))
        } else {
            Err(Error::InvalidLabel { label: value.to_owned() })
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user name in a score table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Username {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().is_empty() || value.chars().count() > MAX_USERNAME_LENGTH {
            Err(Error::InvalidUsername {
                username: value.to_owned(),
            })
        } else {
            Ok(Self(value.to_owned()))
        }
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
