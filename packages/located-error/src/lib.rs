//! Error decorator that remembers where an error was converted.
//!
//! Errors coming from the store driver, the HTTP client or the configuration
//! loader are wrapped before they cross a module boundary. The wrapper keeps
//! the original error as its `source` and records the caller location of the
//! conversion, so a log line points at the exact place in this workspace where
//! the foreign error entered.
//!
//! ```rust
//! use std::sync::Arc;
//! use api_service_located_error::{DynError, Located, LocatedError};
//!
//! #[derive(thiserror::Error, Debug)]
//! #[error("daemon unreachable")]
//! struct Unreachable;
//!
//! let located: LocatedError<'_, Unreachable> = Located(Unreachable).into();
//! assert!(located.to_string().starts_with("daemon unreachable, "));
//!
//! let dynamic: LocatedError<'_, dyn std::error::Error + Send + Sync> = (Arc::new(Unreachable) as DynError).into();
//! assert!(dynamic.to_string().contains("src/lib.rs"));
//! ```
use std::error::Error;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use tracing::debug;

/// A shareable, type-erased error.
pub type DynError = Arc<dyn Error + Send + Sync>;

/// Marker used to convert a concrete error into a [`LocatedError`].
pub struct Located<E>(pub E);

/// An error together with the location where it was wrapped.
#[derive(Debug)]
pub struct LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    source: Arc<E>,
    location: Box<Location<'a>>,
}

impl<'a, E> LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    /// The place in the code where the error was wrapped.
    #[must_use]
    pub fn location(&self) -> &Location<'a> {
        &self.location
    }

    /// The wrapped error.
    #[must_use]
    pub fn inner(&self) -> &E {
        &self.source
    }
}

impl<'a, E> fmt::Display for LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.source, self.location)
    }
}

impl<'a, E> Error for LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

impl<'a, E> Clone for LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            location: self.location.clone(),
        }
    }
}

impl<'a, E> From<Located<E>> for LocatedError<'a, E>
where
    E: Error + Send + Sync,
{
    #[track_caller]
    fn from(located: Located<E>) -> Self {
        let error = Self {
            source: Arc::new(located.0),
            location: Box::new(*Location::caller()),
        };
        debug!("{error}");
        error
    }
}

impl<'a> From<DynError> for LocatedError<'a, dyn Error + Send + Sync> {
    #[track_caller]
    fn from(source: DynError) -> Self {
        Self {
            source,
            location: Box::new(*Location::caller()),
        }
    }
}
