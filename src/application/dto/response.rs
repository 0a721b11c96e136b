//! Response DTOs
//!
//! Data structures for API response bodies. IDs are rendered as strings so
//! 64-bit snowflakes survive JavaScript clients.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Event, Form, Holiday, Space, Tags, User};

/// User response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub photo_url: String,
    pub birthday: Option<NaiveDate>,
    pub gender: String,
    pub city: String,
    pub socials: String,
    pub position: String,
    pub interests: String,
    pub goal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday: Option<HolidayResponse>,
    pub on_holiday: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidayResponse {
    pub status: bool,
    pub till_date: DateTime<Utc>,
}

impl From<Holiday> for HolidayResponse {
    fn from(holiday: Holiday) -> Self {
        Self {
            status: holiday.status,
            till_date: holiday.till_date,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let on_holiday = user.is_on_holiday();
        Self {
            id: user.id.to_string(),
            username: user.username,
            full_name: user.full_name,
            photo_url: user.photo_url,
            birthday: user.birthday,
            gender: user.gender,
            city: user.city,
            socials: user.socials,
            position: user.position,
            interests: user.interests,
            goal: user.goal,
            holiday: user.holiday.map(HolidayResponse::from),
            on_holiday,
        }
    }
}

/// Space response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub tags: Option<Tags>,
}

impl From<Space> for SpaceResponse {
    fn from(space: Space) -> Self {
        Self {
            id: space.id.to_string(),
            name: space.name,
            description: space.description,
            tags: space.tags,
        }
    }
}

/// Membership form response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormResponse {
    pub user_id: String,
    pub space_id: String,
    pub admin: bool,
    pub creator: bool,
    pub user_tags: Option<Tags>,
    pub pair_tags: Option<Tags>,
}

impl From<Form> for FormResponse {
    fn from(form: Form) -> Self {
        Self {
            user_id: form.user_id.to_string(),
            space_id: form.space_id.to_string(),
            admin: form.admin,
            creator: form.creator,
            user_tags: form.user_tags,
            pair_tags: form.pair_tags,
        }
    }
}

/// Event response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventResponse {
    pub id: String,
    pub space_id: String,
    pub name: String,
    pub description: String,
    pub begin_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub tags: Option<Tags>,
    pub members: Vec<String>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.to_string(),
            space_id: event.space_id.to_string(),
            name: event.name,
            description: event.description,
            begin_date: event.begin_date,
            end_date: event.end_date,
            tags: event.tags,
            members: event.members.iter().map(|id| id.to_string()).collect(),
        }
    }
}

/// Convert a list of domain values into responses.
pub fn list<T, R: From<T>>(items: Vec<T>) -> Vec<R> {
    items.into_iter().map(R::from).collect()
}
