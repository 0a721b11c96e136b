//! Event Service
//!
//! Events inside spaces, their members and post-meeting reviews.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::{AddReviewCommand, CreateEventCommand, JoinEventCommand};
use crate::domain::{Event, EventRepository, Review, SpaceRepository};
use crate::shared::error::AppResult;
use crate::shared::snowflake::IdGenerator;
use crate::shared::validation::validate;

/// Event service trait
#[async_trait]
pub trait EventService: Send + Sync {
    /// Create an event with its creator as first member, atomically.
    async fn create_event(&self, command: CreateEventCommand) -> AppResult<Event>;

    /// The event with its member IDs.
    async fn get_event(&self, event_id: i64) -> AppResult<Event>;

    async fn join_event(&self, command: JoinEventCommand) -> AppResult<()>;

    async fn delete_event(&self, event_id: i64) -> AppResult<()>;

    async fn add_review(&self, command: AddReviewCommand) -> AppResult<()>;
}

/// EventService implementation
pub struct EventServiceImpl<E, S>
where
    E: EventRepository,
    S: SpaceRepository,
{
    event_repo: Arc<E>,
    space_repo: Arc<S>,
    id_generator: Arc<dyn IdGenerator>,
}

impl<E, S> EventServiceImpl<E, S>
where
    E: EventRepository,
    S: SpaceRepository,
{
    pub fn new(event_repo: Arc<E>, space_repo: Arc<S>, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            event_repo,
            space_repo,
            id_generator,
        }
    }
}

#[async_trait]
impl<E, S> EventService for EventServiceImpl<E, S>
where
    E: EventRepository + 'static,
    S: SpaceRepository + 'static,
{
    async fn create_event(&self, command: CreateEventCommand) -> AppResult<Event> {
        const OP: &str = "EventService:CreateEvent";
        tracing::debug!(
            op = OP,
            space_id = command.space_id,
            creator_id = command.user_id
        );

        validate(&command)?;

        // A missing space is reported as the space, not as a failed insert.
        self.space_repo
            .find_by_id(command.space_id)
            .await
            .map_err(|e| e.within(OP))?;

        let event = Event {
            id: self.id_generator.next_id(),
            space_id: command.space_id,
            name: command.name,
            description: command.description,
            begin_date: command.begin_date,
            end_date: command.end_date,
            tags: command.tags,
            members: vec![command.user_id],
        };

        self.event_repo
            .create(&event, command.user_id)
            .await
            .map_err(|e| e.within(OP))?;

        tracing::info!(
            op = OP,
            event_id = event.id,
            space_id = event.space_id,
            "Event created"
        );

        Ok(event)
    }

    async fn get_event(&self, event_id: i64) -> AppResult<Event> {
        const OP: &str = "EventService:GetEvent";
        tracing::debug!(op = OP, event_id);

        self.event_repo
            .find_by_id(event_id)
            .await
            .map_err(|e| e.within(OP))
    }

    async fn join_event(&self, command: JoinEventCommand) -> AppResult<()> {
        const OP: &str = "EventService:JoinEvent";
        tracing::debug!(
            op = OP,
            event_id = command.event_id,
            user_id = command.user_id
        );

        self.event_repo
            .find_by_id(command.event_id)
            .await
            .map_err(|e| e.within(OP))?;

        self.event_repo
            .add_member(command.event_id, command.user_id)
            .await
            .map_err(|e| e.within(OP))
    }

    async fn delete_event(&self, event_id: i64) -> AppResult<()> {
        const OP: &str = "EventService:DeleteEvent";
        tracing::debug!(op = OP, event_id);

        self.event_repo
            .find_by_id(event_id)
            .await
            .map_err(|e| e.within(OP))?;

        self.event_repo
            .delete(event_id)
            .await
            .map_err(|e| e.within(OP))?;

        tracing::info!(op = OP, event_id, "Event deleted");

        Ok(())
    }

    async fn add_review(&self, command: AddReviewCommand) -> AppResult<()> {
        const OP: &str = "EventService:AddReview";
        tracing::debug!(
            op = OP,
            event_id = command.event_id,
            who = command.who_id,
            whom = command.whom_id
        );

        validate(&command)?;

        self.event_repo
            .find_by_id(command.event_id)
            .await
            .map_err(|e| e.within(OP))?;

        let review = Review {
            id: self.id_generator.next_id(),
            event_id: command.event_id,
            who_id: command.who_id,
            whom_id: command.whom_id,
            grade: command.grade,
        };

        self.event_repo
            .add_review(&review)
            .await
            .map_err(|e| e.within(OP))
    }
}
