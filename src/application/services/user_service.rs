//! User Service
//!
//! Sign-up, profile, blocking, holidays and the per-space forms of a user.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::{
    BlockUserCommand, CreateUserCommand, FormByIdCommand, SetHolidayCommand, UpdateFormCommand,
    UpdateUserCommand,
};
use crate::domain::{
    Event, EventRepository, Form, FormChanges, Space, SpaceRepository, User, UserRepository,
};
use crate::shared::error::AppResult;
use crate::shared::snowflake::IdGenerator;
use crate::shared::validation::validate;

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a user. Taken ID or username → `AlreadyExists`.
    async fn create_user(&self, command: CreateUserCommand) -> AppResult<User>;

    async fn get_user(&self, user_id: i64) -> AppResult<User>;

    async fn get_user_by_username(&self, username: &str) -> AppResult<User>;

    /// Guard on the user, write the supplied fields, return the fresh row.
    async fn update_user(&self, command: UpdateUserCommand) -> AppResult<User>;

    async fn block_user(&self, command: BlockUserCommand) -> AppResult<()>;

    /// Start a matching pause until `till_date`.
    async fn set_holiday(&self, command: SetHolidayCommand) -> AppResult<User>;

    /// End the most recent pause early.
    async fn cancel_holiday(&self, user_id: i64) -> AppResult<()>;

    async fn get_form(&self, command: FormByIdCommand) -> AppResult<Form>;

    async fn list_forms(&self, user_id: i64) -> AppResult<Vec<Form>>;

    async fn update_form(&self, command: UpdateFormCommand) -> AppResult<Form>;

    async fn list_spaces(&self, user_id: i64) -> AppResult<Vec<Space>>;

    async fn list_events(&self, user_id: i64) -> AppResult<Vec<Event>>;
}

/// UserService implementation
pub struct UserServiceImpl<U, S, E>
where
    U: UserRepository,
    S: SpaceRepository,
    E: EventRepository,
{
    user_repo: Arc<U>,
    space_repo: Arc<S>,
    event_repo: Arc<E>,
    id_generator: Arc<dyn IdGenerator>,
}

impl<U, S, E> UserServiceImpl<U, S, E>
where
    U: UserRepository,
    S: SpaceRepository,
    E: EventRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        space_repo: Arc<S>,
        event_repo: Arc<E>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            user_repo,
            space_repo,
            event_repo,
            id_generator,
        }
    }
}

#[async_trait]
impl<U, S, E> UserService for UserServiceImpl<U, S, E>
where
    U: UserRepository + 'static,
    S: SpaceRepository + 'static,
    E: EventRepository + 'static,
{
    async fn create_user(&self, command: CreateUserCommand) -> AppResult<User> {
        const OP: &str = "UserService:CreateUser";
        tracing::debug!(op = OP, user_id = command.id, username = %command.username);

        validate(&command)?;

        let user = User {
            id: command.id,
            full_name: command.full_name,
            username: command.username,
            photo_url: command.photo_url,
            birthday: command.birthday,
            gender: command.gender,
            city: command.city,
            socials: command.socials,
            position: command.position,
            interests: command.interests,
            goal: command.goal,
            holiday: None,
        };

        self.user_repo
            .create(&user)
            .await
            .map_err(|e| e.within(OP))?;

        Ok(user)
    }

    async fn get_user(&self, user_id: i64) -> AppResult<User> {
        const OP: &str = "UserService:GetUser";
        tracing::debug!(op = OP, user_id);

        self.user_repo
            .find_by_id(user_id)
            .await
            .map_err(|e| e.within(OP))
    }

    async fn get_user_by_username(&self, username: &str) -> AppResult<User> {
        const OP: &str = "UserService:GetUserByUsername";
        tracing::debug!(op = OP, username);

        self.user_repo
            .find_by_username(username)
            .await
            .map_err(|e| e.within(OP))
    }

    async fn update_user(&self, command: UpdateUserCommand) -> AppResult<User> {
        const OP: &str = "UserService:UpdateUser";
        tracing::debug!(op = OP, user_id = command.id);

        validate(&command)?;

        let current = self
            .user_repo
            .find_by_id(command.id)
            .await
            .map_err(|e| e.within(OP))?;

        let changes = command.changes();
        if changes.is_empty() {
            return Ok(current);
        }

        self.user_repo
            .update(command.id, &changes)
            .await
            .map_err(|e| e.within(OP))?;

        self.user_repo
            .find_by_id(command.id)
            .await
            .map_err(|e| e.within(OP))
    }

    async fn block_user(&self, command: BlockUserCommand) -> AppResult<()> {
        const OP: &str = "UserService:BlockUser";
        tracing::debug!(op = OP, who = command.who_id, whom = command.whom_id);

        validate(&command)?;

        // Repeated blocks are rejected by the store, not here.
        self.user_repo
            .block(command.who_id, command.whom_id)
            .await
            .map_err(|e| e.within(OP))
    }

    async fn set_holiday(&self, command: SetHolidayCommand) -> AppResult<User> {
        const OP: &str = "UserService:SetHoliday";
        tracing::debug!(op = OP, user_id = command.user_id, till_date = %command.till_date);

        validate(&command)?;

        self.user_repo
            .find_by_id(command.user_id)
            .await
            .map_err(|e| e.within(OP))?;

        let holiday_id = self.id_generator.next_id();
        self.user_repo
            .insert_holiday(holiday_id, command.user_id, command.till_date)
            .await
            .map_err(|e| e.within(OP))?;

        self.user_repo
            .find_by_id(command.user_id)
            .await
            .map_err(|e| e.within(OP))
    }

    async fn cancel_holiday(&self, user_id: i64) -> AppResult<()> {
        const OP: &str = "UserService:CancelHoliday";
        tracing::debug!(op = OP, user_id);

        self.user_repo
            .find_by_id(user_id)
            .await
            .map_err(|e| e.within(OP))?;

        self.user_repo
            .cancel_latest_holiday(user_id)
            .await
            .map_err(|e| e.within(OP))
    }

    async fn get_form(&self, command: FormByIdCommand) -> AppResult<Form> {
        const OP: &str = "UserService:GetForm";
        tracing::debug!(
            op = OP,
            user_id = command.user_id,
            space_id = command.space_id
        );

        self.space_repo
            .find_form(command.user_id, command.space_id)
            .await
            .map_err(|e| e.within(OP))
    }

    async fn list_forms(&self, user_id: i64) -> AppResult<Vec<Form>> {
        const OP: &str = "UserService:ListForms";
        tracing::debug!(op = OP, user_id);

        self.user_repo
            .find_by_id(user_id)
            .await
            .map_err(|e| e.within(OP))?;

        self.space_repo
            .find_forms_by_user(user_id)
            .await
            .map_err(|e| e.within(OP))
    }

    async fn update_form(&self, command: UpdateFormCommand) -> AppResult<Form> {
        const OP: &str = "UserService:UpdateForm";
        tracing::debug!(
            op = OP,
            user_id = command.user_id,
            space_id = command.space_id
        );

        let current = self
            .space_repo
            .find_form(command.user_id, command.space_id)
            .await
            .map_err(|e| e.within(OP))?;

        let changes = command.changes();
        if changes == FormChanges::default() {
            return Ok(current);
        }

        self.space_repo
            .update_form(command.user_id, command.space_id, &changes)
            .await
            .map_err(|e| e.within(OP))?;

        self.space_repo
            .find_form(command.user_id, command.space_id)
            .await
            .map_err(|e| e.within(OP))
    }

    async fn list_spaces(&self, user_id: i64) -> AppResult<Vec<Space>> {
        const OP: &str = "UserService:ListSpaces";
        tracing::debug!(op = OP, user_id);

        self.user_repo
            .find_by_id(user_id)
            .await
            .map_err(|e| e.within(OP))?;

        self.space_repo
            .find_by_user(user_id)
            .await
            .map_err(|e| e.within(OP))
    }

    async fn list_events(&self, user_id: i64) -> AppResult<Vec<Event>> {
        const OP: &str = "UserService:ListEvents";
        tracing::debug!(op = OP, user_id);

        self.user_repo
            .find_by_id(user_id)
            .await
            .map_err(|e| e.within(OP))?;

        self.event_repo
            .find_by_user(user_id)
            .await
            .map_err(|e| e.within(OP))
    }
}
