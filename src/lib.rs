//! # Meetup Server Library
//!
//! Persistence and orchestration core of a social-matching platform: users
//! join spaces, spaces host events, participants rate and block one another.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Entities, the Tags value object and repository traits
//! - **Application Layer**: Use-case services and commands
//! - **Infrastructure Layer**: PostgreSQL repositories and the unit of work
//! - **Presentation Layer**: Thin HTTP adapter
//!
//! ## Module Structure
//!
//! ```text
//! meetup_server/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects and repository traits
//! +-- application/    Services and commands
//! +-- infrastructure/ Database pool, unit of work, repositories
//! +-- presentation/   HTTP routes and handlers
//! +-- shared/         Errors, validation, snowflake IDs
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
