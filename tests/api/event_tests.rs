//! Event API Tests

use axum::http::StatusCode;
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use serde_json::json;

use meetup_server::application::dto::EventResponse;
use meetup_server::shared::error::AppError;

use crate::common::{event, TestApp};

#[tokio::test]
async fn test_create_event_includes_creator() {
    let mut app = TestApp::new();
    app.events
        .expect_create_event()
        .withf(|command| {
            command.space_id == 100 && command.user_id == 42 && command.name == "Coffee"
        })
        .times(1)
        .returning(|command| Ok(event(555, command.space_id, vec![command.user_id])));

    let response = app
        .server()
        .post("/api/v1/events")
        .json(&json!({
            "space_id": 100,
            "user_id": 42,
            "name": "Coffee",
            "begin_date": "2025-03-01T18:00:00Z",
            "end_date": "2025-03-01T20:00:00Z"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: EventResponse = response.json();
    assert_eq!(body.id, "555");
    assert_eq!(body.space_id, "100");
    assert_eq!(body.members, vec!["42".to_string()]);
}

#[tokio::test]
async fn test_get_event_with_members() {
    let mut app = TestApp::new();
    app.events
        .expect_get_event()
        .with(eq(555))
        .times(1)
        .returning(|id| Ok(event(id, 100, vec![42, 7])));

    let response = app.server().get("/api/v1/events/555").await;

    response.assert_status_ok();
    let body: EventResponse = response.json();
    assert_eq!(body.members, vec!["42".to_string(), "7".to_string()]);
}

#[tokio::test]
async fn test_join_missing_event_is_not_found() {
    let mut app = TestApp::new();
    app.events
        .expect_join_event()
        .withf(|command| command.event_id == 999 && command.user_id == 42)
        .times(1)
        .returning(|command| {
            Err(AppError::not_found("EventRepo:FindById", format!("event {}", command.event_id))
                .within("EventService:JoinEvent"))
        });

    let response = app
        .server()
        .post("/api/v1/events/999/members")
        .json(&json!({ "user_id": 42 }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["message"],
        "EventService:JoinEvent: EventRepo:FindById: not found: event 999"
    );
}

#[tokio::test]
async fn test_delete_event() {
    let mut app = TestApp::new();
    app.events
        .expect_delete_event()
        .with(eq(555))
        .times(1)
        .returning(|_| Ok(()));

    app.server()
        .delete("/api/v1/events/555")
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_add_review_takes_event_from_path() {
    let mut app = TestApp::new();
    app.events
        .expect_add_review()
        .withf(|command| {
            command.event_id == 555
                && command.who_id == 42
                && command.whom_id == 7
                && command.grade == 5
        })
        .times(1)
        .returning(|_| Ok(()));

    app.server()
        .post("/api/v1/events/555/reviews")
        .json(&json!({ "event_id": 1, "who_id": 42, "whom_id": 7, "grade": 5 }))
        .await
        .assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_out_of_range_grade_is_bad_request() {
    let mut app = TestApp::new();
    app.events
        .expect_add_review()
        .returning(|_| Err(AppError::Validation("grade: must be between 1 and 5".to_string())));

    app.server()
        .post("/api/v1/events/555/reviews")
        .json(&json!({ "who_id": 42, "whom_id": 7, "grade": 9 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
