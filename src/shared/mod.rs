//! Shared Utilities
//!
//! Error taxonomy, command validation and ID generation used across all layers.

pub mod error;
pub mod snowflake;
pub mod validation;
