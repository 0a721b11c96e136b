//! Space Service
//!
//! Creation, membership and removal of spaces.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::{CreateSpaceCommand, SpaceMembershipCommand, UpdateSpaceCommand};
use crate::domain::{Event, EventRepository, Space, SpaceRepository};
use crate::shared::error::AppResult;
use crate::shared::snowflake::IdGenerator;
use crate::shared::validation::validate;

/// Space service trait
#[async_trait]
pub trait SpaceService: Send + Sync {
    /// Create a space with its creator as admin, atomically.
    async fn create_space(&self, command: CreateSpaceCommand) -> AppResult<Space>;

    async fn get_space(&self, space_id: i64) -> AppResult<Space>;

    async fn get_space_by_name(&self, name: &str) -> AppResult<Space>;

    /// Resolve the space by name, then add a plain membership.
    async fn join_space(&self, command: SpaceMembershipCommand) -> AppResult<()>;

    /// Resolve the space by name, then remove the membership from that space only.
    async fn leave_space(&self, command: SpaceMembershipCommand) -> AppResult<()>;

    /// Remove the space together with everything it owns.
    async fn delete_space(&self, name: &str) -> AppResult<()>;

    async fn update_space(&self, command: UpdateSpaceCommand) -> AppResult<Space>;

    async fn list_events(&self, space_id: i64) -> AppResult<Vec<Event>>;
}

/// SpaceService implementation
pub struct SpaceServiceImpl<S, E>
where
    S: SpaceRepository,
    E: EventRepository,
{
    space_repo: Arc<S>,
    event_repo: Arc<E>,
    id_generator: Arc<dyn IdGenerator>,
}

impl<S, E> SpaceServiceImpl<S, E>
where
    S: SpaceRepository,
    E: EventRepository,
{
    pub fn new(space_repo: Arc<S>, event_repo: Arc<E>, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            space_repo,
            event_repo,
            id_generator,
        }
    }
}

#[async_trait]
impl<S, E> SpaceService for SpaceServiceImpl<S, E>
where
    S: SpaceRepository + 'static,
    E: EventRepository + 'static,
{
    async fn create_space(&self, command: CreateSpaceCommand) -> AppResult<Space> {
        const OP: &str = "SpaceService:CreateSpace";
        tracing::debug!(op = OP, name = %command.name, creator_id = command.user_id);

        validate(&command)?;

        let space = Space {
            id: self.id_generator.next_id(),
            name: command.name,
            description: command.description,
            tags: command.tags,
        };

        self.space_repo
            .create(&space, command.user_id)
            .await
            .map_err(|e| e.within(OP))?;

        tracing::info!(op = OP, space_id = space.id, "Space created");

        Ok(space)
    }

    async fn get_space(&self, space_id: i64) -> AppResult<Space> {
        const OP: &str = "SpaceService:GetSpace";
        tracing::debug!(op = OP, space_id);

        self.space_repo
            .find_by_id(space_id)
            .await
            .map_err(|e| e.within(OP))
    }

    async fn get_space_by_name(&self, name: &str) -> AppResult<Space> {
        const OP: &str = "SpaceService:GetSpaceByName";
        tracing::debug!(op = OP, name);

        self.space_repo
            .find_by_name(name)
            .await
            .map_err(|e| e.within(OP))
    }

    async fn join_space(&self, command: SpaceMembershipCommand) -> AppResult<()> {
        const OP: &str = "SpaceService:JoinSpace";
        tracing::debug!(op = OP, name = %command.space_name, user_id = command.user_id);

        validate(&command)?;

        let space = self
            .space_repo
            .find_by_name(&command.space_name)
            .await
            .map_err(|e| e.within(OP))?;

        self.space_repo
            .add_member(space.id, command.user_id)
            .await
            .map_err(|e| e.within(OP))
    }

    async fn leave_space(&self, command: SpaceMembershipCommand) -> AppResult<()> {
        const OP: &str = "SpaceService:LeaveSpace";
        tracing::debug!(op = OP, name = %command.space_name, user_id = command.user_id);

        validate(&command)?;

        let space = self
            .space_repo
            .find_by_name(&command.space_name)
            .await
            .map_err(|e| e.within(OP))?;

        self.space_repo
            .remove_member(space.id, command.user_id)
            .await
            .map_err(|e| e.within(OP))
    }

    async fn delete_space(&self, name: &str) -> AppResult<()> {
        const OP: &str = "SpaceService:DeleteSpace";
        tracing::debug!(op = OP, name);

        let space = self
            .space_repo
            .find_by_name(name)
            .await
            .map_err(|e| e.within(OP))?;

        self.space_repo
            .delete(space.id)
            .await
            .map_err(|e| e.within(OP))?;

        tracing::info!(op = OP, space_id = space.id, "Space deleted");

        Ok(())
    }

    async fn update_space(&self, command: UpdateSpaceCommand) -> AppResult<Space> {
        const OP: &str = "SpaceService:UpdateSpace";
        tracing::debug!(op = OP, space_id = command.id);

        validate(&command)?;

        let current = self
            .space_repo
            .find_by_id(command.id)
            .await
            .map_err(|e| e.within(OP))?;

        if command.name.is_none() && command.description.is_none() {
            return Ok(current);
        }

        self.space_repo
            .update(command.id, command.name, command.description)
            .await
            .map_err(|e| e.within(OP))?;

        self.space_repo
            .find_by_id(command.id)
            .await
            .map_err(|e| e.within(OP))
    }

    async fn list_events(&self, space_id: i64) -> AppResult<Vec<Event>> {
        const OP: &str = "SpaceService:ListEvents";
        tracing::debug!(op = OP, space_id);

        self.space_repo
            .find_by_id(space_id)
            .await
            .map_err(|e| e.within(OP))?;

        self.event_repo
            .find_by_space(space_id)
            .await
            .map_err(|e| e.within(OP))
    }
}
