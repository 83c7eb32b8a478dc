//! Route definitions
//!
//! API routes mounted under the plugin namespace; health probes are exported separately.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{events, fields, health, participants, roles};
use crate::state::AppState;

/// Namespace every API route lives under
pub const API_PREFIX: &str = "/tactical-game-organizer/v1";

/// Create the API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest(API_PREFIX, api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(event_routes())
        .merge(field_routes())
        .route("/roles", get(roles::list_roles))
}

/// Event and registration routes
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", post(events::create_event))
        .route(
            "/events/:event_id",
            get(events::get_event).patch(events::update_event),
        )
        .route("/events/:event_id/allowed-roles", put(events::set_allowed_roles))
        // Registration
        .route(
            "/events/:event_id/participants",
            get(participants::list_participants),
        )
        .route("/events/:event_id/register", post(participants::register))
        .route("/events/:event_id/cancel", delete(participants::cancel))
}

fn field_routes() -> Router<AppState> {
    Router::new()
        .route("/fields", post(fields::create_field))
        .route("/fields/:field_id", get(fields::get_field))
}
