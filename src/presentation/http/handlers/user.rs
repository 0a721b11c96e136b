//! User Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::parse_id;
use crate::application::dto::response::list;
use crate::application::dto::{
    BlockUserCommand, BlockUserRequest, CreateUserCommand, EventResponse, FormByIdCommand,
    FormResponse, SetHolidayCommand, SetHolidayRequest, SpaceResponse, UpdateFormCommand,
    UpdateUserCommand, UserResponse,
};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Register a user
pub async fn create_user(
    State(state): State<AppState>,
    Json(command): Json<CreateUserCommand>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = state.users.create_user(command).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Get user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user_id = parse_id(&user_id, "user")?;
    let user = state.users.get_user(user_id).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Get user by username
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.users.get_user_by_username(&username).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Update profile fields
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(mut command): Json<UpdateUserCommand>,
) -> Result<Json<UserResponse>, AppError> {
    command.id = parse_id(&user_id, "user")?;
    let user = state.users.update_user(command).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Block another user
pub async fn block_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<BlockUserRequest>,
) -> Result<StatusCode, AppError> {
    let command = BlockUserCommand {
        who_id: parse_id(&user_id, "user")?,
        whom_id: body.whom_id,
    };
    state.users.block_user(command).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Pause matching until a date
pub async fn set_holiday(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<SetHolidayRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let command = SetHolidayCommand {
        user_id: parse_id(&user_id, "user")?,
        till_date: body.till_date,
    };
    let user = state.users.set_holiday(command).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Cancel the current pause
pub async fn cancel_holiday(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let user_id = parse_id(&user_id, "user")?;
    state.users.cancel_holiday(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the forms of every space the user belongs to
pub async fn list_forms(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<FormResponse>>, AppError> {
    let user_id = parse_id(&user_id, "user")?;
    let forms = state.users.list_forms(user_id).await?;

    Ok(Json(list(forms)))
}

/// Get one form
pub async fn get_form(
    State(state): State<AppState>,
    Path((user_id, space_id)): Path<(String, String)>,
) -> Result<Json<FormResponse>, AppError> {
    let command = FormByIdCommand {
        user_id: parse_id(&user_id, "user")?,
        space_id: parse_id(&space_id, "space")?,
    };
    let form = state.users.get_form(command).await?;

    Ok(Json(FormResponse::from(form)))
}

/// Update flags or tags of one form
pub async fn update_form(
    State(state): State<AppState>,
    Path((user_id, space_id)): Path<(String, String)>,
    Json(mut command): Json<UpdateFormCommand>,
) -> Result<Json<FormResponse>, AppError> {
    command.user_id = parse_id(&user_id, "user")?;
    command.space_id = parse_id(&space_id, "space")?;
    let form = state.users.update_form(command).await?;

    Ok(Json(FormResponse::from(form)))
}

/// Spaces the user is a member of
pub async fn list_spaces(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<SpaceResponse>>, AppError> {
    let user_id = parse_id(&user_id, "user")?;
    let spaces = state.users.list_spaces(user_id).await?;

    Ok(Json(list(spaces)))
}

/// Events the user has joined
pub async fn list_events(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let user_id = parse_id(&user_id, "user")?;
    let events = state.users.list_events(user_id).await?;

    Ok(Json(list(events)))
}
