//! Servers. Services that can be started and stopped.
//!
//! - [`apis`]: the public HTTP API.
//! - [`health_check_api`]: the health check API for container probes.
pub mod apis;
pub mod health_check_api;
pub mod signals;

/// This is the prefix used in logs to identify a started service.
///
/// For example:
///
/// ```text
/// 2024-06-25T12:36:25.025527Z  INFO API: Started on: http://0.0.0.0:8080
/// 2024-06-25T12:36:25.025580Z  INFO HEALTH CHECK API: Started on: http://127.0.0.1:8081
/// ```
pub const STARTED_ON: &str = "Started on";
