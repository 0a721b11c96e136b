//! Request DTOs
//!
//! Bodies of HTTP requests whose remaining fields come from the path. The
//! handler combines both into the matching command.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// `POST /users/{id}/block`
#[derive(Debug, Deserialize)]
pub struct BlockUserRequest {
    pub whom_id: i64,
}

/// `POST /users/{id}/holiday`
#[derive(Debug, Deserialize)]
pub struct SetHolidayRequest {
    pub till_date: DateTime<Utc>,
}

/// Body of the membership endpoints of spaces and events.
#[derive(Debug, Deserialize)]
pub struct MemberRequest {
    pub user_id: i64,
}
