//! In-process fake servers for the outbound collaborators.
//!
//! They bind to an ephemeral loopback port and record what they receive so
//! tests can assert on the requests the service sends.
pub mod daemon;
pub mod game_api;
