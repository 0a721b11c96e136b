//! Space Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::parse_id;
use crate::application::dto::response::list;
use crate::application::dto::{
    CreateSpaceCommand, EventResponse, MemberRequest, SpaceMembershipCommand, SpaceResponse,
    UpdateSpaceCommand,
};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create a space; the caller in `user_id` becomes its admin
pub async fn create_space(
    State(state): State<AppState>,
    Json(command): Json<CreateSpaceCommand>,
) -> Result<(StatusCode, Json<SpaceResponse>), AppError> {
    let space = state.spaces.create_space(command).await?;

    Ok((StatusCode::CREATED, Json(SpaceResponse::from(space))))
}

/// Get space by ID
pub async fn get_space(
    State(state): State<AppState>,
    Path(space_id): Path<String>,
) -> Result<Json<SpaceResponse>, AppError> {
    let space_id = parse_id(&space_id, "space")?;
    let space = state.spaces.get_space(space_id).await?;

    Ok(Json(SpaceResponse::from(space)))
}

/// Get space by name
pub async fn get_space_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<SpaceResponse>, AppError> {
    let space = state.spaces.get_space_by_name(&name).await?;

    Ok(Json(SpaceResponse::from(space)))
}

/// Rename or re-describe a space
pub async fn update_space(
    State(state): State<AppState>,
    Path(space_id): Path<String>,
    Json(mut command): Json<UpdateSpaceCommand>,
) -> Result<Json<SpaceResponse>, AppError> {
    command.id = parse_id(&space_id, "space")?;
    let space = state.spaces.update_space(command).await?;

    Ok(Json(SpaceResponse::from(space)))
}

/// Delete a space with its events and memberships
pub async fn delete_space(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, AppError> {
    state.spaces.delete_space(&name).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Join a space
pub async fn join_space(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<MemberRequest>,
) -> Result<StatusCode, AppError> {
    state
        .spaces
        .join_space(SpaceMembershipCommand {
            space_name: name,
            user_id: body.user_id,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Leave a space
pub async fn leave_space(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<MemberRequest>,
) -> Result<StatusCode, AppError> {
    state
        .spaces
        .leave_space(SpaceMembershipCommand {
            space_name: name,
            user_id: body.user_id,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Events hosted by a space
pub async fn list_events(
    State(state): State<AppState>,
    Path(space_id): Path<String>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let space_id = parse_id(&space_id, "space")?;
    let events = state.spaces.list_events(space_id).await?;

    Ok(Json(list(events)))
}
