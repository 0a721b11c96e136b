//! Application Layer
//!
//! Use-case services and the commands/DTOs they exchange with transport
//! adapters.

pub mod dto;
pub mod services;
