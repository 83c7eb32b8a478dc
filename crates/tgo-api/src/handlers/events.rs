//! Event handlers
//!
//! Public event details plus organizer-only writes.

use axum::{extract::State, Json};
use tgo_service::{
    AllowedRolesResponse, CreateEventRequest, EventAdminService, EventResponse,
    SetAllowedRolesRequest, UpdateEventRequest,
};

use crate::extractors::{EventPath, OrganizerUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Get event details
///
/// GET /events/{event_id}
pub async fn get_event(
    State(state): State<AppState>,
    EventPath(event_id): EventPath,
) -> ApiResult<Json<EventResponse>> {
    let service = EventAdminService::new(state.service_context());
    Ok(Json(service.get_event(event_id).await?))
}

/// Create an event
///
/// POST /events
pub async fn create_event(
    State(state): State<AppState>,
    OrganizerUser(user): OrganizerUser,
    ValidatedJson(request): ValidatedJson<CreateEventRequest>,
) -> ApiResult<Created<Json<EventResponse>>> {
    tracing::debug!(organizer = %user.user_id, "Creating event");
    let service = EventAdminService::new(state.service_context());
    let response = service.create_event(request).await?;
    Ok(Created(Json(response)))
}

/// Update an event
///
/// PATCH /events/{event_id}
pub async fn update_event(
    State(state): State<AppState>,
    EventPath(event_id): EventPath,
    OrganizerUser(_): OrganizerUser,
    ValidatedJson(request): ValidatedJson<UpdateEventRequest>,
) -> ApiResult<Json<EventResponse>> {
    let service = EventAdminService::new(state.service_context());
    Ok(Json(service.update_event(event_id, request).await?))
}

/// Replace the event's role allow-list
///
/// PUT /events/{event_id}/allowed-roles
pub async fn set_allowed_roles(
    State(state): State<AppState>,
    EventPath(event_id): EventPath,
    OrganizerUser(_): OrganizerUser,
    ValidatedJson(request): ValidatedJson<SetAllowedRolesRequest>,
) -> ApiResult<Json<AllowedRolesResponse>> {
    let service = EventAdminService::new(state.service_context());
    Ok(Json(service.set_allowed_roles(event_id, request).await?))
}
