//! Event Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::parse_id;
use crate::application::dto::{
    AddReviewCommand, CreateEventCommand, EventResponse, JoinEventCommand, MemberRequest,
};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create an event; the creator joins it immediately
pub async fn create_event(
    State(state): State<AppState>,
    Json(command): Json<CreateEventCommand>,
) -> Result<(StatusCode, Json<EventResponse>), AppError> {
    let event = state.events.create_event(command).await?;

    Ok((StatusCode::CREATED, Json(EventResponse::from(event))))
}

/// Get event with its members
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<EventResponse>, AppError> {
    let event_id = parse_id(&event_id, "event")?;
    let event = state.events.get_event(event_id).await?;

    Ok(Json(EventResponse::from(event)))
}

/// Delete event
pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let event_id = parse_id(&event_id, "event")?;
    state.events.delete_event(event_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Join event
pub async fn join_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(body): Json<MemberRequest>,
) -> Result<StatusCode, AppError> {
    let command = JoinEventCommand {
        event_id: parse_id(&event_id, "event")?,
        user_id: body.user_id,
    };
    state.events.join_event(command).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Rate another participant
pub async fn add_review(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(mut command): Json<AddReviewCommand>,
) -> Result<StatusCode, AppError> {
    command.event_id = parse_id(&event_id, "event")?;
    state.events.add_review(command).await?;

    Ok(StatusCode::CREATED)
}
