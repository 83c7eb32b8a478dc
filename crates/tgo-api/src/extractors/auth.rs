//! Authentication extractors
//!
//! Extracts and validates bearer tokens, then checks capabilities derived from the
//! token's site roles.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use tgo_common::{AppError, MessageKey};
use tgo_core::{Capabilities, UserId};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from a bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: UserId,
    pub capabilities: Capabilities,
}

impl AuthUser {
    pub fn new(user_id: UserId, capabilities: Capabilities) -> Self {
        Self {
            user_id,
            capabilities,
        }
    }

    /// Fail with 403 unless the user holds a capability
    pub fn require(&self, capability: Capabilities) -> Result<(), ApiError> {
        if self.capabilities.has(capability) {
            Ok(())
        } else {
            tracing::warn!(
                user_id = %self.user_id,
                required = ?capability.list(),
                "Capability check failed"
            );
            Err(ApiError::App(AppError::InsufficientPermissions))
        }
    }
}

/// Verify a bearer token and build the user it names
fn authenticate(state: &AppState, token: &str) -> Result<AuthUser, ApiError> {
    let unauthenticated =
        || ApiError::Unauthenticated(state.messages().get(MessageKey::NotLoggedIn).to_string());

    let claims = state.jwt_service().validate(token).map_err(|e| {
        tracing::warn!(error = %e, "Rejected access token");
        unauthenticated()
    })?;

    let user_id = claims.user_id().map_err(|e| {
        tracing::warn!(error = %e, "Invalid user ID in token");
        unauthenticated()
    })?;

    Ok(AuthUser::new(user_id, claims.capabilities()))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    ApiError::Unauthenticated(
                        app_state.messages().get(MessageKey::NotLoggedIn).to_string(),
                    )
                })?;

        authenticate(&app_state, bearer.token())
    }
}

/// Optional authenticated user
///
/// `None` when no authorization header is present; a present but invalid token is
/// rejected.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    pub fn user_id(&self) -> Option<UserId> {
        self.0.as_ref().map(|user| user.user_id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await {
            Ok(TypedHeader(Authorization(bearer))) => {
                let app_state = AppState::from_ref(state);
                authenticate(&app_state, bearer.token()).map(|user| Self(Some(user)))
            }
            Err(_) => Ok(Self(None)),
        }
    }
}

/// Authenticated user allowed to register for events
#[derive(Debug, Clone)]
pub struct PlayerUser(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for PlayerUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.capabilities.has(Capabilities::REGISTER_FOR_EVENTS) {
            let app_state = AppState::from_ref(state);
            tracing::warn!(user_id = %user.user_id, "Registration attempt without player capability");
            return Err(ApiError::Forbidden(
                app_state.messages().get(MessageKey::NoPermission).to_string(),
            ));
        }
        Ok(Self(user))
    }
}

/// Authenticated user allowed to manage events
#[derive(Debug, Clone)]
pub struct OrganizerUser(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for OrganizerUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        user.require(Capabilities::MANAGE_EVENTS)?;
        Ok(Self(user))
    }
}

/// Authenticated user allowed to create fields
#[derive(Debug, Clone)]
pub struct FieldManagerUser(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for FieldManagerUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        user.require(Capabilities::MANAGE_FIELDS)?;
        Ok(Self(user))
    }
}
