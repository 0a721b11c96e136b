//! Presentation Layer
//!
//! HTTP routes and handlers.

pub mod http;
