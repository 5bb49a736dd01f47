//! Testing helpers for the API service.
pub mod configuration;
pub mod random;
