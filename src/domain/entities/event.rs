//! Event entity, review and repository trait.
//!
//! Maps to the `event`, `user_event` and `reviews` tables.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Tags;
use crate::shared::error::AppResult;

/// Represents a meeting hosted by a space.
///
/// Maps to the `event` table:
/// - id: BIGINT PRIMARY KEY (Snowflake ID)
/// - space_id: BIGINT NOT NULL REFERENCES space(id)
/// - name, description: TEXT
/// - begin_date, end_date: TIMESTAMPTZ
/// - tags: TEXT NULL
///
/// `members` is aggregated from `user_event` in the same query that reads
/// the event row, in join order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub space_id: i64,
    pub name: String,
    pub description: String,
    pub begin_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub tags: Option<Tags>,

    #[serde(default)]
    pub members: Vec<i64>,
}

/// A grade one participant gives another after an event.
///
/// Maps to the `reviews` table. Several reviews for the same
/// (event, who, whom) are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub event_id: i64,
    pub who_id: i64,
    pub whom_id: i64,
    pub grade: i32,
}

/// Repository trait for Event data access operations.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Insert the event and the creator's membership atomically.
    async fn create(&self, event: &Event, creator_id: i64) -> AppResult<()>;

    /// Find an event with its member IDs. No row → `NotFound`.
    async fn find_by_id(&self, id: i64) -> AppResult<Event>;

    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Event>>;

    async fn find_by_space(&self, space_id: i64) -> AppResult<Vec<Event>>;

    /// Insert an event membership. Duplicate pair → `AlreadyExists`.
    async fn add_member(&self, event_id: i64, user_id: i64) -> AppResult<()>;

    /// Remove reviews, memberships and the event row in one transaction.
    async fn delete(&self, id: i64) -> AppResult<()>;

    async fn add_review(&self, review: &Review) -> AppResult<()>;
}
