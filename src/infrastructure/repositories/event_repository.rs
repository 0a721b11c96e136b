//! Event Repository Implementation
//!
//! PostgreSQL implementation of the EventRepository trait.
//! Owns the `event`, `user_event` and `reviews` tables.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Event, EventRepository, Review, Tags};
use crate::infrastructure::database::{PgUnitOfWork, Step};
use crate::shared::error::{classify, AppResult};

/// Database row representation: event columns plus aggregated member IDs.
#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    id: i64,
    space_id: i64,
    name: String,
    description: String,
    begin_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    tags: Option<Tags>,
    members: Vec<i64>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            id: row.id,
            space_id: row.space_id,
            name: row.name,
            description: row.description,
            begin_date: row.begin_date,
            end_date: row.end_date,
            tags: row.tags,
            members: row.members,
        }
    }
}

/// Selects events with their members in join order.
/// Callers append WHERE before the GROUP BY.
const SELECT_EVENT: &str = r#"
    SELECT e.id, e.space_id, e.name, e.description, e.begin_date, e.end_date, e.tags,
           COALESCE(
               array_agg(ue.user_id ORDER BY ue.joined_at, ue.user_id)
                   FILTER (WHERE ue.user_id IS NOT NULL),
               '{}'
           ) AS members
    FROM event e
    LEFT JOIN user_event ue ON ue.event_id = e.id
"#;

const GROUP_EVENT: &str = "GROUP BY e.id ORDER BY e.begin_date ASC, e.id ASC";

/// PostgreSQL event repository implementation.
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
    uow: PgUnitOfWork,
}

impl PgEventRepository {
    /// Create a new PgEventRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        let uow = PgUnitOfWork::new(pool.clone());
        Self { pool, uow }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn create(&self, event: &Event, creator_id: i64) -> AppResult<()> {
        const OP: &str = "EventRepo:Create";
        tracing::debug!(
            op = OP,
            event_id = event.id,
            space_id = event.space_id,
            creator_id
        );

        self.uow
            .execute(
                OP,
                vec![
                    Step::new(
                        format!("event {} in space {}", event.name, event.space_id),
                        sqlx::query(
                            r#"
                            INSERT INTO event
                                (id, space_id, name, description, begin_date, end_date, tags)
                            VALUES ($1, $2, $3, $4, $5, $6, $7)
                            "#,
                        )
                        .bind(event.id)
                        .bind(event.space_id)
                        .bind(&event.name)
                        .bind(&event.description)
                        .bind(event.begin_date)
                        .bind(event.end_date)
                        .bind(&event.tags),
                    ),
                    Step::new(
                        format!("membership of user {creator_id} in event {}", event.id),
                        sqlx::query("INSERT INTO user_event (user_id, event_id) VALUES ($1, $2)")
                            .bind(creator_id)
                            .bind(event.id),
                    ),
                ],
            )
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Event> {
        const OP: &str = "EventRepo:FindById";
        tracing::debug!(op = OP, event_id = id);

        let sql = format!("{SELECT_EVENT} WHERE e.id = $1 {GROUP_EVENT}");
        let row = sqlx::query_as::<_, EventRow>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| classify(OP, format!("event {id}"), e))?;

        Ok(row.into())
    }

    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Event>> {
        const OP: &str = "EventRepo:FindByUser";
        tracing::debug!(op = OP, user_id);

        let sql = format!(
            "{SELECT_EVENT} WHERE e.id IN (SELECT event_id FROM user_event WHERE user_id = $1) \
             {GROUP_EVENT}"
        );
        let rows = sqlx::query_as::<_, EventRow>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| classify(OP, format!("events of user {user_id}"), e))?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn find_by_space(&self, space_id: i64) -> AppResult<Vec<Event>> {
        const OP: &str = "EventRepo:FindBySpace";
        tracing::debug!(op = OP, space_id);

        let sql = format!("{SELECT_EVENT} WHERE e.space_id = $1 {GROUP_EVENT}");
        let rows = sqlx::query_as::<_, EventRow>(&sql)
            .bind(space_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| classify(OP, format!("events of space {space_id}"), e))?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn add_member(&self, event_id: i64, user_id: i64) -> AppResult<()> {
        const OP: &str = "EventRepo:AddMember";
        tracing::debug!(op = OP, event_id, user_id);

        let membership = format!("membership of user {user_id} in event {event_id}");

        sqlx::query("INSERT INTO user_event (user_id, event_id) VALUES ($1, $2)")
            .bind(user_id)
            .bind(event_id)
            .execute(&self.pool)
            .await
            .map_err(|e| classify(OP, membership, e))?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        const OP: &str = "EventRepo:Delete";
        tracing::debug!(
            op = OP,
            event_id = id,
            "Deleting event with its members and reviews"
        );

        let affected = self
            .uow
            .execute(
                OP,
                vec![
                    Step::new(
                        format!("reviews of event {id}"),
                        sqlx::query("DELETE FROM reviews WHERE event_id = $1").bind(id),
                    ),
                    Step::new(
                        format!("members of event {id}"),
                        sqlx::query("DELETE FROM user_event WHERE event_id = $1").bind(id),
                    ),
                    Step::new(
                        format!("event {id}"),
                        sqlx::query("DELETE FROM event WHERE id = $1").bind(id),
                    ),
                ],
            )
            .await?;

        tracing::debug!(op = OP, event_id = id, rows = ?affected, "Event deleted");

        Ok(())
    }

    async fn add_review(&self, review: &Review) -> AppResult<()> {
        const OP: &str = "EventRepo:AddReview";
        tracing::debug!(
            op = OP,
            event_id = review.event_id,
            who = review.who_id,
            whom = review.whom_id
        );

        sqlx::query(
            r#"
            INSERT INTO reviews (id, event_id, who_id, about_whom_id, grade)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(review.id)
        .bind(review.event_id)
        .bind(review.who_id)
        .bind(review.whom_id)
        .bind(review.grade)
        .execute(&self.pool)
        .await
        .map_err(|e| classify(OP, format!("review in event {}", review.event_id), e))?;

        Ok(())
    }
}
