//! Application bootstrapping.
//!
//! This module includes all the functions to build the application, its
//! dependencies, and run the jobs.
//!
//! Jobs are the servers, each one running on its own task: the public HTTP
//! API and the health check API.
pub mod app;
pub mod config;
pub mod jobs;
pub mod logging;
