//! Event repository tests

use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use sqlx::PgPool;

use meetup_server::domain::{EventRepository, Review, SpaceRepository};
use meetup_server::infrastructure::repositories::{PgEventRepository, PgSpaceRepository};
use meetup_server::shared::error::ErrorKind;

use super::{count_where, new_event, new_space, seed_user};

/// Users 42 and 7, space 100 created by 42.
async fn seed_space(pool: &PgPool) {
    seed_user(pool, 42).await;
    seed_user(pool, 7).await;
    PgSpaceRepository::new(pool.clone())
        .create(&new_space(100, "MAI"), 42)
        .await
        .unwrap();
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_create_event_joins_creator(pool: PgPool) {
    seed_space(&pool).await;
    let repo = PgEventRepository::new(pool.clone());
    let begin = Utc::now();

    repo.create(&new_event(1, 100, begin), 42).await.unwrap();

    let event = repo.find_by_id(1).await.unwrap();
    assert_eq!(event.members, vec![42]);
    assert_eq!(event.space_id, 100);
    assert_eq!(event.end_date - event.begin_date, Duration::hours(2));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_create_event_with_missing_creator_leaves_nothing(pool: PgPool) {
    seed_space(&pool).await;
    let repo = PgEventRepository::new(pool.clone());

    let err = repo
        .create(&new_event(1, 100, Utc::now()), 404)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.op(), Some("EventRepo:Create"));
    assert_eq!(count_where(&pool, "event", "id", 1).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_create_event_in_missing_space(pool: PgPool) {
    seed_user(&pool, 42).await;
    let repo = PgEventRepository::new(pool.clone());

    let err = repo
        .create(&new_event(1, 999, Utc::now()), 42)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(count_where(&pool, "user_event", "user_id", 42).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_join_missing_event(pool: PgPool) {
    seed_space(&pool).await;
    let repo = PgEventRepository::new(pool.clone());

    let err = repo.add_member(999, 42).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(count_where(&pool, "user_event", "event_id", 999).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_join_event_twice(pool: PgPool) {
    seed_space(&pool).await;
    let repo = PgEventRepository::new(pool.clone());
    repo.create(&new_event(1, 100, Utc::now()), 42)
        .await
        .unwrap();

    repo.add_member(1, 7).await.unwrap();
    let err = repo.add_member(1, 7).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert_eq!(repo.find_by_id(1).await.unwrap().members, vec![42, 7]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_find_by_user_and_space(pool: PgPool) {
    seed_space(&pool).await;
    let repo = PgEventRepository::new(pool.clone());
    let now = Utc::now();
    repo.create(&new_event(2, 100, now + Duration::days(1)), 42)
        .await
        .unwrap();
    repo.create(&new_event(1, 100, now), 42).await.unwrap();
    repo.add_member(2, 7).await.unwrap();

    let in_space: Vec<i64> = repo
        .find_by_space(100)
        .await
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(in_space, vec![1, 2]);

    let joined = repo.find_by_user(7).await.unwrap();
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].id, 2);
    // All members are listed, not only the one filtered on.
    assert_eq!(joined[0].members, vec![42, 7]);

    assert!(repo.find_by_space(999).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_reviews_accept_repeats(pool: PgPool) {
    seed_space(&pool).await;
    let repo = PgEventRepository::new(pool.clone());
    repo.create(&new_event(1, 100, Utc::now()), 42)
        .await
        .unwrap();

    for (id, grade) in [(10, 4), (11, 5)] {
        let review = Review {
            id,
            event_id: 1,
            who_id: 42,
            whom_id: 7,
            grade,
        };
        repo.add_review(&review).await.unwrap();
    }

    assert_eq!(count_where(&pool, "reviews", "about_whom_id", 7).await, 2);

    let err = repo
        .add_review(&Review {
            id: 12,
            event_id: 999,
            who_id: 42,
            whom_id: 7,
            grade: 3,
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_delete_event(pool: PgPool) {
    seed_space(&pool).await;
    let repo = PgEventRepository::new(pool.clone());
    repo.create(&new_event(1, 100, Utc::now()), 42)
        .await
        .unwrap();
    repo.add_member(1, 7).await.unwrap();
    repo.add_review(&Review {
        id: 10,
        event_id: 1,
        who_id: 7,
        whom_id: 42,
        grade: 5,
    })
    .await
    .unwrap();

    repo.delete(1).await.unwrap();

    let err = repo.find_by_id(1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(count_where(&pool, "user_event", "event_id", 1).await, 0);
    assert_eq!(count_where(&pool, "reviews", "event_id", 1).await, 0);
    // Space membership is untouched.
    assert_eq!(count_where(&pool, "user_space", "space_id", 100).await, 1);
}
