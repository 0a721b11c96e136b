//! Commands
//!
//! Input of every use-case. Transport adapters build these from whatever
//! they receive (HTTP bodies, path parameters, bot dialogs) and the services
//! validate them before touching a repository.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::{FormChanges, Tags, UserChanges};
use crate::shared::validation::not_blank;

// ============================================================================
// Users
// ============================================================================

/// Sign-up command. `id` is the chat platform's user ID.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateUserCommand {
    pub id: i64,

    #[validate(
        length(min = 1, max = 64, message = "Username must be 1-64 characters"),
        custom(function = "not_blank")
    )]
    pub username: String,

    #[validate(length(max = 128, message = "Full name must be at most 128 characters"))]
    pub full_name: String,

    pub photo_url: String,
    pub birthday: Option<NaiveDate>,
    pub gender: String,
    pub city: String,
    pub socials: String,
    pub position: String,

    #[validate(length(max = 1024, message = "Interests must be at most 1024 characters"))]
    pub interests: String,

    #[validate(length(max = 1024, message = "Goal must be at most 1024 characters"))]
    pub goal: String,
}

/// Profile update. Only the supplied fields are written.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserCommand {
    #[serde(default)]
    pub id: i64,

    #[validate(length(max = 128, message = "Full name must be at most 128 characters"))]
    pub full_name: Option<String>,

    pub photo_url: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub gender: Option<String>,
    pub city: Option<String>,
    pub socials: Option<String>,
    pub position: Option<String>,

    #[validate(length(max = 1024, message = "Interests must be at most 1024 characters"))]
    pub interests: Option<String>,

    #[validate(length(max = 1024, message = "Goal must be at most 1024 characters"))]
    pub goal: Option<String>,
}

impl UpdateUserCommand {
    pub fn changes(&self) -> UserChanges {
        UserChanges {
            full_name: self.full_name.clone(),
            photo_url: self.photo_url.clone(),
            birthday: self.birthday,
            gender: self.gender.clone(),
            city: self.city.clone(),
            socials: self.socials.clone(),
            position: self.position.clone(),
            interests: self.interests.clone(),
            goal: self.goal.clone(),
        }
    }
}

/// `who_id` stops being matched with `whom_id`.
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
#[validate(schema(function = "distinct_users"))]
pub struct BlockUserCommand {
    pub who_id: i64,
    pub whom_id: i64,
}

fn distinct_users(command: &BlockUserCommand) -> Result<(), ValidationError> {
    if command.who_id == command.whom_id {
        let mut err = ValidationError::new("self_block");
        err.message = Some("A user cannot block themselves".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct SetHolidayCommand {
    pub user_id: i64,

    #[validate(custom(function = "in_future"))]
    pub till_date: DateTime<Utc>,
}

fn in_future(till_date: &DateTime<Utc>) -> Result<(), ValidationError> {
    if *till_date <= Utc::now() {
        let mut err = ValidationError::new("past_date");
        err.message = Some("must be in the future".into());
        return Err(err);
    }
    Ok(())
}

/// Addresses one membership form.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FormByIdCommand {
    pub user_id: i64,
    pub space_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFormCommand {
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub space_id: i64,
    pub admin: Option<bool>,
    pub creator: Option<bool>,
    pub user_tags: Option<Tags>,
    pub pair_tags: Option<Tags>,
}

impl UpdateFormCommand {
    pub fn changes(&self) -> FormChanges {
        FormChanges {
            admin: self.admin,
            creator: self.creator,
            user_tags: self.user_tags.clone(),
            pair_tags: self.pair_tags.clone(),
        }
    }
}

// ============================================================================
// Spaces
// ============================================================================

/// Create a space; `user_id` becomes its creator and admin.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateSpaceCommand {
    #[validate(
        length(min = 1, max = 128, message = "Name must be 1-128 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,

    #[validate(length(max = 2048, message = "Description must be at most 2048 characters"))]
    pub description: Option<String>,

    pub tags: Option<Tags>,

    pub user_id: i64,
}

/// Join or leave a space by name.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SpaceMembershipCommand {
    #[validate(length(min = 1, message = "Space name must not be empty"))]
    pub space_name: String,

    pub user_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSpaceCommand {
    #[serde(default)]
    pub id: i64,

    #[validate(
        length(min = 1, max = 128, message = "Name must be 1-128 characters"),
        custom(function = "not_blank")
    )]
    pub name: Option<String>,

    #[validate(length(max = 2048, message = "Description must be at most 2048 characters"))]
    pub description: Option<String>,
}

// ============================================================================
// Events
// ============================================================================

/// Create an event in a space; `user_id` becomes its first member.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "ordered_dates"))]
pub struct CreateEventCommand {
    pub space_id: i64,
    pub user_id: i64,

    #[validate(
        length(min = 1, max = 256, message = "Name must be 1-256 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub begin_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,

    pub tags: Option<Tags>,
}

fn ordered_dates(command: &CreateEventCommand) -> Result<(), ValidationError> {
    if command.end_date < command.begin_date {
        let mut err = ValidationError::new("date_order");
        err.message = Some("end_date must not be before begin_date".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct JoinEventCommand {
    #[serde(default)]
    pub event_id: i64,
    pub user_id: i64,
}

/// Grade `whom_id` received from `who_id` after an event.
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct AddReviewCommand {
    #[serde(default)]
    pub event_id: i64,
    pub who_id: i64,
    pub whom_id: i64,

    #[validate(range(min = 1, max = 5, message = "Grade must be between 1 and 5"))]
    pub grade: i32,
}
