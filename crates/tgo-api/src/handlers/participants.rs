//! Participant handlers
//!
//! The registration endpoints the event page polls and posts to.

use axum::{extract::State, Json};
use tgo_service::{
    MessageResponse, ParticipantListResponse, RegisterRequest, RegistrationService,
};

use crate::extractors::{EventPath, OptionalAuthUser, PlayerUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// List participants with derived display fields
///
/// GET /events/{event_id}/participants
pub async fn list_participants(
    State(state): State<AppState>,
    EventPath(event_id): EventPath,
    auth: OptionalAuthUser,
) -> ApiResult<Json<ParticipantListResponse>> {
    let service = RegistrationService::new(state.service_context());
    let response = service.list_participants(event_id, auth.user_id()).await?;
    Ok(Json(response))
}

/// Register the caller, or update their registration
///
/// POST /events/{event_id}/register
pub async fn register(
    State(state): State<AppState>,
    EventPath(event_id): EventPath,
    PlayerUser(user): PlayerUser,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = RegistrationService::new(state.service_context());
    let response = service.register(event_id, user.user_id, request).await?;
    Ok(Json(response))
}

/// Cancel the caller's registration
///
/// DELETE /events/{event_id}/cancel
pub async fn cancel(
    State(state): State<AppState>,
    EventPath(event_id): EventPath,
    PlayerUser(user): PlayerUser,
) -> ApiResult<Json<MessageResponse>> {
    let service = RegistrationService::new(state.service_context());
    let response = service.cancel(event_id, user.user_id).await?;
    Ok(Json(response))
}
