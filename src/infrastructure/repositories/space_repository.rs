//! Space Repository Implementation
//!
//! PostgreSQL implementation of the SpaceRepository trait.
//! Handles the `space` table and the `user_space` membership forms.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Form, FormChanges, Space, SpaceRepository};
use crate::infrastructure::database::{PgUnitOfWork, Step};
use crate::shared::error::{classify, AppError, AppResult};

/// PostgreSQL space repository implementation.
///
/// Multi-table writes (create, delete) go through the unit of work.
#[derive(Clone)]
pub struct PgSpaceRepository {
    pool: PgPool,
    uow: PgUnitOfWork,
}

impl PgSpaceRepository {
    /// Create a new PgSpaceRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        let uow = PgUnitOfWork::new(pool.clone());
        Self { pool, uow }
    }
}

#[async_trait]
impl SpaceRepository for PgSpaceRepository {
    async fn create(&self, space: &Space, creator_id: i64) -> AppResult<()> {
        const OP: &str = "SpaceRepo:Create";
        tracing::debug!(
            op = OP,
            space_id = space.id,
            creator_id,
            "Inserting space with creator"
        );

        let creator = Form::creator(creator_id, space.id);

        self.uow
            .execute(
                OP,
                vec![
                    Step::new(
                        format!("space {}", space.name),
                        sqlx::query(
                            r#"
                            INSERT INTO space (id, name, description, tags)
                            VALUES ($1, $2, $3, $4)
                            "#,
                        )
                        .bind(space.id)
                        .bind(&space.name)
                        .bind(&space.description)
                        .bind(&space.tags),
                    ),
                    Step::new(
                        format!("membership of user {creator_id} in space {}", space.id),
                        sqlx::query(
                            r#"
                            INSERT INTO user_space (user_id, space_id, is_admin, is_creator)
                            VALUES ($1, $2, $3, $4)
                            "#,
                        )
                        .bind(creator.user_id)
                        .bind(creator.space_id)
                        .bind(creator.admin)
                        .bind(creator.creator),
                    ),
                ],
            )
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Space> {
        const OP: &str = "SpaceRepo:FindById";
        tracing::debug!(op = OP, space_id = id);

        sqlx::query_as::<_, Space>("SELECT id, name, description, tags FROM space WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| classify(OP, format!("space {id}"), e))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Space> {
        const OP: &str = "SpaceRepo:FindByName";
        tracing::debug!(op = OP, space_name = name);

        sqlx::query_as::<_, Space>("SELECT id, name, description, tags FROM space WHERE name = $1")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| classify(OP, format!("space {name}"), e))
    }

    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Space>> {
        const OP: &str = "SpaceRepo:FindByUser";
        tracing::debug!(op = OP, user_id);

        sqlx::query_as::<_, Space>(
            r#"
            SELECT s.id, s.name, s.description, s.tags
            FROM space s
            INNER JOIN user_space us ON s.id = us.space_id
            WHERE us.user_id = $1
            ORDER BY us.joined_at ASC, s.id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| classify(OP, format!("spaces of user {user_id}"), e))
    }

    async fn update(
        &self,
        id: i64,
        name: Option<String>,
        description: Option<String>,
    ) -> AppResult<()> {
        const OP: &str = "SpaceRepo:Update";
        tracing::debug!(op = OP, space_id = id);

        let result = sqlx::query(
            r#"
            UPDATE space
            SET name = COALESCE($2, name),
                description = COALESCE($3, description)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&name)
        .bind(&description)
        .execute(&self.pool)
        .await
        .map_err(|e| classify(OP, format!("space {id}"), e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(OP, format!("space {id}")));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        const OP: &str = "SpaceRepo:Delete";
        tracing::debug!(
            op = OP,
            space_id = id,
            "Deleting space with its events and members"
        );

        // Children before parents.
        let affected = self
            .uow
            .execute(
                OP,
                vec![
                    Step::new(
                        format!("reviews of events in space {id}"),
                        sqlx::query(
                            r#"
                            DELETE FROM reviews
                            WHERE event_id IN (SELECT id FROM event WHERE space_id = $1)
                            "#,
                        )
                        .bind(id),
                    ),
                    Step::new(
                        format!("event members in space {id}"),
                        sqlx::query(
                            r#"
                            DELETE FROM user_event
                            WHERE event_id IN (SELECT id FROM event WHERE space_id = $1)
                            "#,
                        )
                        .bind(id),
                    ),
                    Step::new(
                        format!("events of space {id}"),
                        sqlx::query("DELETE FROM event WHERE space_id = $1").bind(id),
                    ),
                    Step::new(
                        format!("members of space {id}"),
                        sqlx::query("DELETE FROM user_space WHERE space_id = $1").bind(id),
                    ),
                    Step::new(
                        format!("space {id}"),
                        sqlx::query("DELETE FROM space WHERE id = $1").bind(id),
                    ),
                ],
            )
            .await?;

        tracing::debug!(op = OP, space_id = id, rows = ?affected, "Space deleted");

        Ok(())
    }

    async fn add_member(&self, space_id: i64, user_id: i64) -> AppResult<()> {
        const OP: &str = "SpaceRepo:AddMember";
        tracing::debug!(op = OP, space_id, user_id);

        let form = Form::member(user_id, space_id);
        let membership = format!("membership of user {user_id} in space {space_id}");

        sqlx::query(
            r#"
            INSERT INTO user_space (user_id, space_id, is_admin, is_creator)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(form.user_id)
        .bind(form.space_id)
        .bind(form.admin)
        .bind(form.creator)
        .execute(&self.pool)
        .await
        .map_err(|e| classify(OP, membership, e))?;

        Ok(())
    }

    async fn remove_member(&self, space_id: i64, user_id: i64) -> AppResult<()> {
        const OP: &str = "SpaceRepo:RemoveMember";
        tracing::debug!(op = OP, space_id, user_id);

        let membership = format!("membership of user {user_id} in space {space_id}");

        let result = sqlx::query("DELETE FROM user_space WHERE space_id = $1 AND user_id = $2")
            .bind(space_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| classify(OP, &membership, e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(OP, membership));
        }

        Ok(())
    }

    async fn find_form(&self, user_id: i64, space_id: i64) -> AppResult<Form> {
        const OP: &str = "SpaceRepo:FindForm";
        tracing::debug!(op = OP, space_id, user_id);

        sqlx::query_as::<_, Form>(
            r#"
            SELECT user_id, space_id, is_admin, is_creator, user_tags, pair_tags
            FROM user_space
            WHERE user_id = $1 AND space_id = $2
            "#,
        )
        .bind(user_id)
        .bind(space_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify(OP, format!("form of user {user_id} in space {space_id}"), e))
    }

    async fn find_forms_by_user(&self, user_id: i64) -> AppResult<Vec<Form>> {
        const OP: &str = "SpaceRepo:FindFormsByUser";
        tracing::debug!(op = OP, user_id);

        sqlx::query_as::<_, Form>(
            r#"
            SELECT user_id, space_id, is_admin, is_creator, user_tags, pair_tags
            FROM user_space
            WHERE user_id = $1
            ORDER BY joined_at ASC, space_id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| classify(OP, format!("forms of user {user_id}"), e))
    }

    async fn update_form(
        &self,
        user_id: i64,
        space_id: i64,
        changes: &FormChanges,
    ) -> AppResult<()> {
        const OP: &str = "SpaceRepo:UpdateForm";
        tracing::debug!(op = OP, space_id, user_id);

        let form = format!("form of user {user_id} in space {space_id}");

        let result = sqlx::query(
            r#"
            UPDATE user_space
            SET is_admin   = COALESCE($3, is_admin),
                is_creator = COALESCE($4, is_creator),
                user_tags  = COALESCE($5, user_tags),
                pair_tags  = COALESCE($6, pair_tags)
            WHERE user_id = $1 AND space_id = $2
            "#,
        )
        .bind(user_id)
        .bind(space_id)
        .bind(changes.admin)
        .bind(changes.creator)
        .bind(&changes.user_tags)
        .bind(&changes.pair_tags)
        .execute(&self.pool)
        .await
        .map_err(|e| classify(OP, &form, e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(OP, form));
        }

        Ok(())
    }
}
