//! Path parameter extractors
//!
//! `EventPath` resolves the event before any handler runs: a malformed or unknown id is
//! rejected with 400 `INVALID_EVENT`.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Path},
    http::request::Parts,
};
use tgo_common::MessageKey;
use tgo_core::ObjectId;

use crate::response::ApiError;
use crate::state::AppState;

/// Id of an existing event taken from `:event_id`
#[derive(Debug, Clone, Copy)]
pub struct EventPath(pub ObjectId);

#[async_trait]
impl<S> FromRequestParts<S> for EventPath
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let invalid =
            || ApiError::InvalidEvent(app_state.messages().get(MessageKey::InvalidEvent).to_string());

        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid())?;
        let event_id = ObjectId::parse(&raw).map_err(|_| invalid())?;

        if !app_state.service_context().event_repo().exists(event_id).await? {
            tracing::debug!(event_id = %event_id, "Request for unknown event");
            return Err(invalid());
        }

        Ok(Self(event_id))
    }
}

/// Field id taken from `:field_id`
#[derive(Debug, Clone, Copy)]
pub struct FieldPath(pub ObjectId);

#[async_trait]
impl<S> FromRequestParts<S> for FieldPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        ObjectId::parse(&raw)
            .map(Self)
            .map_err(|e| ApiError::invalid_path(format!("field_id: {e}")))
    }
}
