//! Space API Tests

use axum::http::StatusCode;
use mockall::predicate::eq;
use mockall::Sequence;
use pretty_assertions::assert_eq;
use serde_json::json;

use meetup_server::application::dto::{EventResponse, SpaceResponse};
use meetup_server::shared::error::AppError;

use crate::common::{event, space, TestApp};

#[tokio::test]
async fn test_create_space_returns_string_id() {
    let mut app = TestApp::new();
    app.spaces
        .expect_create_space()
        .withf(|command| command.name == "MAI" && command.user_id == 42)
        .times(1)
        .returning(|command| Ok(space(1_234_567_890_123_456_789, &command.name)));

    let response = app
        .server()
        .post("/api/v1/spaces")
        .json(&json!({ "name": "MAI", "description": "university", "user_id": 42 }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: SpaceResponse = response.json();
    assert_eq!(body.id, "1234567890123456789");
    assert_eq!(body.name, "MAI");
}

#[tokio::test]
async fn test_create_space_with_blank_name_is_rejected() {
    let mut app = TestApp::new();
    app.spaces
        .expect_create_space()
        .returning(|_| Err(AppError::Validation("name: must not be blank".to_string())));

    app.server()
        .post("/api/v1/spaces")
        .json(&json!({ "name": "   ", "user_id": 42 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_join_space_twice() {
    let mut seq = Sequence::new();
    let mut app = TestApp::new();
    app.spaces
        .expect_join_space()
        .withf(|command| command.space_name == "MAI" && command.user_id == 7)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    app.spaces
        .expect_join_space()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| {
            Err(AppError::already_exists("SpaceRepo:AddMember", "member 7 of space 100")
                .within("SpaceService:JoinSpace"))
        });

    let server = app.server();

    server
        .post("/api/v1/spaces/by-name/MAI/members")
        .json(&json!({ "user_id": 7 }))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let response = server
        .post("/api/v1/spaces/by-name/MAI/members")
        .json(&json!({ "user_id": 7 }))
        .await;
    response.assert_status(StatusCode::CONFLICT);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["message"],
        "SpaceService:JoinSpace: SpaceRepo:AddMember: already exists: member 7 of space 100"
    );
}

#[tokio::test]
async fn test_leave_space() {
    let mut app = TestApp::new();
    app.spaces
        .expect_leave_space()
        .withf(|command| command.space_name == "MAI" && command.user_id == 7)
        .times(1)
        .returning(|_| Ok(()));

    app.server()
        .delete("/api/v1/spaces/by-name/MAI/members")
        .json(&json!({ "user_id": 7 }))
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_space() {
    let mut app = TestApp::new();
    app.spaces
        .expect_delete_space()
        .withf(|name| name == "MAI")
        .times(1)
        .returning(|_| Ok(()));

    app.server()
        .delete("/api/v1/spaces/by-name/MAI")
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_unknown_space_is_not_found() {
    let mut app = TestApp::new();
    app.spaces.expect_delete_space().returning(|name| {
        Err(AppError::not_found("SpaceRepo:FindByName", format!("space {name}"))
            .within("SpaceService:DeleteSpace"))
    });

    let response = app.server().delete("/api/v1/spaces/by-name/nowhere").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn test_get_space_by_id_and_name() {
    let mut app = TestApp::new();
    app.spaces
        .expect_get_space()
        .with(eq(100))
        .returning(|id| Ok(space(id, "MAI")));
    app.spaces
        .expect_get_space_by_name()
        .withf(|name| name == "MAI")
        .returning(|name| Ok(space(100, name)));

    let server = app.server();

    let by_id: SpaceResponse = server.get("/api/v1/spaces/100").await.json();
    let by_name: SpaceResponse = server.get("/api/v1/spaces/by-name/MAI").await.json();

    assert_eq!(by_id, by_name);
}

#[tokio::test]
async fn test_update_space_takes_id_from_path() {
    let mut app = TestApp::new();
    app.spaces
        .expect_update_space()
        .withf(|command| command.id == 100 && command.name.as_deref() == Some("MAI-2"))
        .times(1)
        .returning(|command| Ok(space(command.id, "MAI-2")));

    let response = app
        .server()
        .patch("/api/v1/spaces/100")
        .json(&json!({ "name": "MAI-2" }))
        .await;

    response.assert_status_ok();
    let body: SpaceResponse = response.json();
    assert_eq!(body.name, "MAI-2");
}

#[tokio::test]
async fn test_list_space_events() {
    let mut app = TestApp::new();
    app.spaces
        .expect_list_events()
        .with(eq(100))
        .returning(|space_id| Ok(vec![event(1, space_id, vec![42]), event(2, space_id, vec![])]));

    let events: Vec<EventResponse> = app.server().get("/api/v1/spaces/100/events").await.json();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].members, vec!["42".to_string()]);
    assert!(events[1].members.is_empty());
}

#[tokio::test]
async fn test_space_id_must_be_numeric() {
    let mut app = TestApp::new();
    app.spaces.expect_list_events().times(0);

    app.server()
        .get("/api/v1/spaces/MAI/events")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
