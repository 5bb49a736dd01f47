//! Resources returned by the health check API.
//!
//! ```json
//! {"status":"Error","message":"API is not healthy. Health check endpoint: http://127.0.0.1:8080/api/health_check"}
//! ```
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Status {
    Ok,
    Error,
}

/// The health of the service: the score store and the main API.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Report {
    pub status: Status,
    /// Empty when healthy. Otherwise the first failure found: the score
    /// store ping or the request to the main API.
    pub message: String,
}

impl Report {
    #[must_use]
    pub fn ok() -> Report {
        Self {
            status: Status::Ok,
            message: String::new(),
        }
    }

    #[must_use]
    pub fn error(message: String) -> Report {
        Self {
            status: Status::Error,
            message,
        }
    }
}
