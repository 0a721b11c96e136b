//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod event;
pub mod health;
pub mod space;
pub mod user;

use crate::shared::error::AppError;

/// Parse a numeric path segment, reporting which ID was malformed.
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::Validation(format!("Invalid {what} ID")))
}
