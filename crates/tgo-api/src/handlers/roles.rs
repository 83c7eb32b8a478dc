//! Role registry handler

use axum::{extract::State, Json};
use tgo_service::{EventAdminService, RolesResponse};

use crate::state::AppState;

/// Every registered role, default first in the selector
///
/// GET /roles
pub async fn list_roles(State(state): State<AppState>) -> Json<RolesResponse> {
    Json(EventAdminService::new(state.service_context()).roles())
}
