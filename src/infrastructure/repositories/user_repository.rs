//! User Repository Implementation
//!
//! PostgreSQL implementation of the UserRepository trait.
//! Also owns the `blocks` and `holiday_status` tables.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use crate::domain::{Holiday, User, UserChanges, UserRepository};
use crate::shared::error::{classify, AppError, AppResult};

/// Database row representation: the user columns plus the latest holiday.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    full_name: String,
    username: String,
    photo_url: String,
    birthday: Option<NaiveDate>,
    gender: String,
    city: String,
    socials: String,
    position: String,
    interests: String,
    goal: String,
    holiday_status: Option<bool>,
    holiday_till: Option<DateTime<Utc>>,
}

impl UserRow {
    /// Convert database row to domain User entity.
    fn into_user(self) -> User {
        let holiday = match (self.holiday_status, self.holiday_till) {
            (Some(status), Some(till_date)) => Some(Holiday { status, till_date }),
            _ => None,
        };

        User {
            id: self.id,
            full_name: self.full_name,
            username: self.username,
            photo_url: self.photo_url,
            birthday: self.birthday,
            gender: self.gender,
            city: self.city,
            socials: self.socials,
            position: self.position,
            interests: self.interests,
            goal: self.goal,
            holiday,
        }
    }
}

/// Selects a user joined with its most recent holiday row.
/// Callers append the WHERE clause.
const SELECT_USER: &str = r#"
    SELECT u.id, u.full_name, u.username, u.photo_url, u.birthday, u.gender,
           u.city, u.socials, u.position, u.interests, u.goal,
           h.status AS holiday_status, h.till_date AS holiday_till
    FROM "user" u
    LEFT JOIN LATERAL (
        SELECT status, till_date
        FROM holiday_status
        WHERE user_id = u.id
        ORDER BY set_date DESC, id DESC
        LIMIT 1
    ) h ON TRUE
"#;

/// PostgreSQL user repository implementation.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> AppResult<()> {
        const OP: &str = "UserRepo:Create";
        tracing::debug!(op = OP, user_id = user.id, "Inserting user");

        sqlx::query(
            r#"
            INSERT INTO "user" (id, full_name, username, photo_url, birthday, gender,
                                city, socials, position, interests, goal)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(user.id)
        .bind(&user.full_name)
        .bind(&user.username)
        .bind(&user.photo_url)
        .bind(user.birthday)
        .bind(&user.gender)
        .bind(&user.city)
        .bind(&user.socials)
        .bind(&user.position)
        .bind(&user.interests)
        .bind(&user.goal)
        .execute(&self.pool)
        .await
        .map_err(|e| classify(OP, format!("user {} (@{})", user.id, user.username), e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<User> {
        const OP: &str = "UserRepo:FindById";
        tracing::debug!(op = OP, user_id = id);

        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE u.id = $1"))
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| classify(OP, format!("user {id}"), e))?;

        Ok(row.into_user())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<User> {
        const OP: &str = "UserRepo:FindByUsername";
        tracing::debug!(op = OP, username);

        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE u.username = $1"))
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| classify(OP, format!("user @{username}"), e))?;

        Ok(row.into_user())
    }

    async fn update(&self, id: i64, changes: &UserChanges) -> AppResult<()> {
        const OP: &str = "UserRepo:Update";
        tracing::debug!(op = OP, user_id = id);

        let result = sqlx::query(
            r#"
            UPDATE "user"
            SET full_name = COALESCE($2, full_name),
                photo_url = COALESCE($3, photo_url),
                birthday  = COALESCE($4, birthday),
                gender    = COALESCE($5, gender),
                city      = COALESCE($6, city),
                socials   = COALESCE($7, socials),
                position  = COALESCE($8, position),
                interests = COALESCE($9, interests),
                goal      = COALESCE($10, goal)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&changes.full_name)
        .bind(&changes.photo_url)
        .bind(changes.birthday)
        .bind(&changes.gender)
        .bind(&changes.city)
        .bind(&changes.socials)
        .bind(&changes.position)
        .bind(&changes.interests)
        .bind(&changes.goal)
        .execute(&self.pool)
        .await
        .map_err(|e| classify(OP, format!("user {id}"), e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(OP, format!("user {id}")));
        }

        Ok(())
    }

    async fn block(&self, who: i64, whom: i64) -> AppResult<()> {
        const OP: &str = "UserRepo:Block";
        tracing::debug!(op = OP, who, whom);

        sqlx::query("INSERT INTO blocks (who_id, whom_id) VALUES ($1, $2)")
            .bind(who)
            .bind(whom)
            .execute(&self.pool)
            .await
            .map_err(|e| classify(OP, format!("block {who} -> {whom}"), e))?;

        Ok(())
    }

    async fn insert_holiday(
        &self,
        holiday_id: i64,
        user_id: i64,
        till_date: DateTime<Utc>,
    ) -> AppResult<()> {
        const OP: &str = "UserRepo:InsertHoliday";
        tracing::debug!(op = OP, user_id, till_date = %till_date);

        sqlx::query(
            r#"
            INSERT INTO holiday_status (id, user_id, status, till_date, set_date)
            VALUES ($1, $2, TRUE, $3, clock_timestamp())
            "#,
        )
        .bind(holiday_id)
        .bind(user_id)
        .bind(till_date)
        .execute(&self.pool)
        .await
        .map_err(|e| classify(OP, format!("holiday of user {user_id}"), e))?;

        Ok(())
    }

    async fn cancel_latest_holiday(&self, user_id: i64) -> AppResult<()> {
        const OP: &str = "UserRepo:CancelLatestHoliday";
        tracing::debug!(op = OP, user_id);

        // Only the newest row is considered; an older active row stays untouched.
        let result = sqlx::query(
            r#"
            UPDATE holiday_status
            SET status = FALSE
            WHERE status = TRUE
              AND id = (
                  SELECT id FROM holiday_status
                  WHERE user_id = $1
                  ORDER BY set_date DESC, id DESC
                  LIMIT 1
                  FOR UPDATE
              )
            "#,
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| classify(OP, format!("holiday of user {user_id}"), e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(OP, format!("active holiday of user {user_id}")));
        }

        Ok(())
    }
}
