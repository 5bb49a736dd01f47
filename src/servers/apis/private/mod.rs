//! The `/api/private` API.
//!
//! The API is organized in resource groups called [contexts](context). Each
//! context has its own handlers and routes. The shared [`Reply`](resources::Reply)
//! resource and the [error responses](responses) are used by all of them.
pub mod context;
pub mod resources;
pub mod responses;
pub mod routes;
