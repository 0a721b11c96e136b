//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user_routes())
        .nest("/spaces", space_routes())
        .nest("/events", event_routes())
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::user::create_user))
        .route(
            "/by-username/{username}",
            get(handlers::user::get_user_by_username),
        )
        .route(
            "/{user_id}",
            get(handlers::user::get_user).patch(handlers::user::update_user),
        )
        .route("/{user_id}/block", post(handlers::user::block_user))
        .route(
            "/{user_id}/holiday",
            post(handlers::user::set_holiday).delete(handlers::user::cancel_holiday),
        )
        .route("/{user_id}/forms", get(handlers::user::list_forms))
        .route(
            "/{user_id}/forms/{space_id}",
            get(handlers::user::get_form).patch(handlers::user::update_form),
        )
        .route("/{user_id}/spaces", get(handlers::user::list_spaces))
        .route("/{user_id}/events", get(handlers::user::list_events))
}

/// Space routes
fn space_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::space::create_space))
        .route(
            "/by-name/{name}",
            get(handlers::space::get_space_by_name).delete(handlers::space::delete_space),
        )
        .route(
            "/by-name/{name}/members",
            post(handlers::space::join_space).delete(handlers::space::leave_space),
        )
        .route(
            "/{space_id}",
            get(handlers::space::get_space).patch(handlers::space::update_space),
        )
        .route("/{space_id}/events", get(handlers::space::list_events))
}

/// Event routes
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::event::create_event))
        .route(
            "/{event_id}",
            get(handlers::event::get_event).delete(handlers::event::delete_event),
        )
        .route("/{event_id}/members", post(handlers::event::join_event))
        .route("/{event_id}/reviews", post(handlers::event::add_review))
}
