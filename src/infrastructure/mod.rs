//! Infrastructure Layer
//!
//! Implementations of the domain contracts against external services:
//! - PostgreSQL connection pool, migrations and unit of work
//! - Repository implementations

pub mod database;
pub mod repositories;
