//! HTTP Adapter
//!
//! Axum routes and handlers translating requests into commands.

pub mod handlers;
pub mod routes;

pub use routes::create_router;
