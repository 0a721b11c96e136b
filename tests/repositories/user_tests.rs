//! User repository tests

use chrono::{Duration, NaiveDate, Utc};
use pretty_assertions::assert_eq;
use sqlx::PgPool;

use meetup_server::domain::{User, UserChanges, UserRepository};
use meetup_server::infrastructure::repositories::PgUserRepository;
use meetup_server::shared::error::ErrorKind;

use super::{count_where, seed_user};

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_create_and_find_user(pool: PgPool) {
    let repo = PgUserRepository::new(pool);
    let user = User {
        id: 42,
        username: "s1av4".into(),
        full_name: "Slava".into(),
        birthday: NaiveDate::from_ymd_opt(2001, 5, 17),
        city: "Moscow".into(),
        ..Default::default()
    };

    repo.create(&user).await.unwrap();

    assert_eq!(repo.find_by_id(42).await.unwrap(), user);
    assert_eq!(repo.find_by_username("s1av4").await.unwrap(), user);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_duplicate_user_already_exists(pool: PgPool) {
    let repo = PgUserRepository::new(pool.clone());
    seed_user(&pool, 42).await;

    let same_id = User {
        id: 42,
        username: "other".into(),
        ..Default::default()
    };
    let same_name = User {
        id: 43,
        username: "user42".into(),
        ..Default::default()
    };

    let err = repo.create(&same_id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    let err = repo.create(&same_name).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert_eq!(count_where(&pool, "\"user\"", "id", 43).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_missing_user_not_found(pool: PgPool) {
    let repo = PgUserRepository::new(pool);

    let err = repo.find_by_id(999).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.op(), Some("UserRepo:FindById"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_update_writes_only_supplied_fields(pool: PgPool) {
    let repo = PgUserRepository::new(pool.clone());
    seed_user(&pool, 42).await;

    let changes = UserChanges {
        city: Some("Kazan".into()),
        goal: Some("networking".into()),
        ..Default::default()
    };
    repo.update(42, &changes).await.unwrap();

    let user = repo.find_by_id(42).await.unwrap();
    assert_eq!(user.city, "Kazan");
    assert_eq!(user.goal, "networking");
    assert_eq!(user.username, "user42");

    let err = repo.update(999, &changes).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_block(pool: PgPool) {
    let repo = PgUserRepository::new(pool.clone());
    seed_user(&pool, 1).await;
    seed_user(&pool, 2).await;

    repo.block(1, 2).await.unwrap();

    let err = repo.block(1, 2).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    // The reverse direction is a separate pair.
    repo.block(2, 1).await.unwrap();
    // Unknown target violates the foreign key.
    let err = repo.block(1, 999).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(count_where(&pool, "blocks", "who_id", 1).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_holiday_cancels_latest_only(pool: PgPool) {
    let repo = PgUserRepository::new(pool.clone());
    seed_user(&pool, 42).await;

    let first = Utc::now() + Duration::days(7);
    let second = Utc::now() + Duration::days(30);
    repo.insert_holiday(1, 42, first).await.unwrap();
    repo.insert_holiday(2, 42, second).await.unwrap();

    let user = repo.find_by_id(42).await.unwrap();
    assert!(user.is_on_holiday());
    let holiday = user.holiday.unwrap();
    assert_eq!(holiday.till_date.timestamp(), second.timestamp());

    repo.cancel_latest_holiday(42).await.unwrap();

    let user = repo.find_by_id(42).await.unwrap();
    assert!(!user.is_on_holiday());
    assert_eq!(
        repo.cancel_latest_holiday(42).await.unwrap_err().kind(),
        ErrorKind::NotFound
    );

    let still_active: bool = sqlx::query_scalar("SELECT status FROM holiday_status WHERE id = 1")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(still_active);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_cancel_without_holiday(pool: PgPool) {
    let repo = PgUserRepository::new(pool.clone());
    seed_user(&pool, 42).await;

    let err = repo.cancel_latest_holiday(42).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
}
