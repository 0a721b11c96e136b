//! User entity and repository trait.
//!
//! Maps to the `"user"` table plus the auxiliary `blocks` and
//! `holiday_status` tables.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppResult;

/// A matching pause. While `status` is true and `till_date` is in the future
/// the user is skipped when pairs are formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub status: bool,
    pub till_date: DateTime<Utc>,
}

impl Holiday {
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.status && self.till_date > now
    }
}

/// Represents a platform user.
///
/// Maps to the `"user"` table:
/// - id: BIGINT PRIMARY KEY (chat platform ID, assigned by the caller)
/// - username: TEXT NOT NULL UNIQUE
/// - full_name, photo_url, gender, city, socials, position, interests, goal: TEXT
/// - birthday: DATE NULL
///
/// `holiday` is the most recent `holiday_status` row, if any.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    /// Display name
    pub full_name: String,

    /// Unique handle
    pub username: String,

    pub photo_url: String,
    pub birthday: Option<NaiveDate>,
    pub gender: String,
    pub city: String,

    /// Link to a social profile
    pub socials: String,

    /// Position in the organization (student, engineer, ...)
    pub position: String,
    pub interests: String,

    /// What the user wants out of meetings
    pub goal: String,

    pub holiday: Option<Holiday>,
}

impl User {
    /// Whether the user should currently be left out of matching.
    pub fn is_on_holiday(&self) -> bool {
        self.holiday
            .as_ref()
            .is_some_and(|h| h.is_active_at(Utc::now()))
    }
}

/// Partial profile update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub full_name: Option<String>,
    pub photo_url: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub gender: Option<String>,
    pub city: Option<String>,
    pub socials: Option<String>,
    pub position: Option<String>,
    pub interests: Option<String>,
    pub goal: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Repository trait for User data access operations.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Duplicate ID or username → `AlreadyExists`.
    async fn create(&self, user: &User) -> AppResult<()>;

    /// Find a user by ID. No row → `NotFound`.
    async fn find_by_id(&self, id: i64) -> AppResult<User>;

    /// Find a user by handle. No row → `NotFound`.
    async fn find_by_username(&self, username: &str) -> AppResult<User>;

    /// Write only the supplied fields.
    async fn update(&self, id: i64, changes: &UserChanges) -> AppResult<()>;

    /// Record that `who` blocks `whom`. Duplicate pair → `AlreadyExists`.
    async fn block(&self, who: i64, whom: i64) -> AppResult<()>;

    /// Append an active holiday row.
    async fn insert_holiday(
        &self,
        holiday_id: i64,
        user_id: i64,
        till_date: DateTime<Utc>,
    ) -> AppResult<()>;

    /// Deactivate the user's most recent holiday row. No active latest row → `NotFound`.
    async fn cancel_latest_holiday(&self, user_id: i64) -> AppResult<()>;
}
