//! Field handlers

use axum::{extract::State, Json};
use tgo_service::{CreateFieldRequest, EventAdminService, FieldResponse};

use crate::extractors::{FieldManagerUser, FieldPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a field owned by the caller
///
/// POST /fields
pub async fn create_field(
    State(state): State<AppState>,
    FieldManagerUser(user): FieldManagerUser,
    ValidatedJson(request): ValidatedJson<CreateFieldRequest>,
) -> ApiResult<Created<Json<FieldResponse>>> {
    let service = EventAdminService::new(state.service_context());
    let response = service.create_field(user.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// GET /fields/{field_id}
pub async fn get_field(
    State(state): State<AppState>,
    FieldPath(field_id): FieldPath,
) -> ApiResult<Json<FieldResponse>> {
    let service = EventAdminService::new(state.service_context());
    Ok(Json(service.get_field(field_id).await?))
}
