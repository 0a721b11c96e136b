//! Space (group) entity, membership form and repository trait.
//!
//! Maps to the `space` and `user_space` tables in the database schema.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Tags;
use crate::shared::error::AppResult;

/// Represents a space: a named community users join and events live in.
///
/// Maps to the `space` table:
/// - id: BIGINT PRIMARY KEY (Snowflake ID)
/// - name: TEXT NOT NULL UNIQUE
/// - description: TEXT NULL
/// - tags: TEXT NULL (serialized tag set)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Space {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub tags: Option<Tags>,
}

/// A user's membership in a space, together with the per-space
/// questionnaire.
///
/// Maps to the `user_space` table:
/// - user_id: BIGINT NOT NULL REFERENCES "user"(id) (composite PK)
/// - space_id: BIGINT NOT NULL REFERENCES space(id) (composite PK)
/// - is_admin, is_creator: BOOLEAN
/// - user_tags: TEXT NULL (how the member describes themselves)
/// - pair_tags: TEXT NULL (who the member wants to be matched with)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Form {
    pub user_id: i64,
    pub space_id: i64,
    #[sqlx(rename = "is_admin")]
    pub admin: bool,
    #[sqlx(rename = "is_creator")]
    pub creator: bool,
    pub user_tags: Option<Tags>,
    pub pair_tags: Option<Tags>,
}

impl Form {
    /// Plain membership created by a join.
    pub fn member(user_id: i64, space_id: i64) -> Self {
        Self {
            user_id,
            space_id,
            ..Default::default()
        }
    }

    /// Membership of the user who created the space.
    pub fn creator(user_id: i64, space_id: i64) -> Self {
        Self {
            user_id,
            space_id,
            admin: true,
            creator: true,
            ..Default::default()
        }
    }
}

/// Partial form update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormChanges {
    pub admin: Option<bool>,
    pub creator: Option<bool>,
    pub user_tags: Option<Tags>,
    pub pair_tags: Option<Tags>,
}

/// Repository trait for Space data access operations.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpaceRepository: Send + Sync {
    /// Insert the space and the creator's admin membership atomically.
    async fn create(&self, space: &Space, creator_id: i64) -> AppResult<()>;

    async fn find_by_id(&self, id: i64) -> AppResult<Space>;

    async fn find_by_name(&self, name: &str) -> AppResult<Space>;

    /// All spaces a user is a member of.
    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Space>>;

    /// Write only the supplied fields. A taken name → `AlreadyExists`.
    async fn update(
        &self,
        id: i64,
        name: Option<String>,
        description: Option<String>,
    ) -> AppResult<()>;

    /// Remove the space together with its events, their members and reviews,
    /// and its memberships, in one transaction.
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Insert a plain membership. Duplicate pair → `AlreadyExists`.
    async fn add_member(&self, space_id: i64, user_id: i64) -> AppResult<()>;

    /// Delete a membership. No such membership → `NotFound`.
    async fn remove_member(&self, space_id: i64, user_id: i64) -> AppResult<()>;

    async fn find_form(&self, user_id: i64, space_id: i64) -> AppResult<Form>;

    async fn find_forms_by_user(&self, user_id: i64) -> AppResult<Vec<Form>>;

    async fn update_form(
        &self,
        user_id: i64,
        space_id: i64,
        changes: &FormChanges,
    ) -> AppResult<()>;
}
