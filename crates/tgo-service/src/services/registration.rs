//! Registration service
//!
//! The per-(event, user) state machine: Unregistered -> Registered on `register`,
//! back to Unregistered on `cancel`. Capacity is checked against the roster size before
//! the write and the check-and-append runs atomically in the store.

use tgo_common::MessageKey;
use tgo_core::{sanitize_text_field, AddOutcome, ObjectId, UserId};
use tracing::{info, instrument, warn};

use crate::dto::{MessageResponse, ParticipantListResponse, ParticipantRow, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::participant::ParticipantService;
use super::role_policy::RolePolicy;

/// Registration service
pub struct RegistrationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RegistrationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Roster with display fields for one event
    ///
    /// Never fails for an unknown event: the listing is empty, unlimited and allows every
    /// role.
    #[instrument(skip(self))]
    pub async fn list_participants(
        &self,
        event_id: ObjectId,
        requester: Option<UserId>,
    ) -> ServiceResult<ParticipantListResponse> {
        let policy = RolePolicy::new(self.ctx);
        let default_role = policy.default_role_for_user(requester).await?;

        let Some(event) = self.ctx.event_repo().find_by_id(event_id).await? else {
            return Ok(ParticipantListResponse {
                participants: Vec::new(),
                max_participants: 0,
                current_count: 0,
                has_available_slots: true,
                allowed_roles: self.ctx.role_registry().all(),
                default_role,
            });
        };

        let allowed_roles = policy.allowed_roles(event_id).await?;
        let roster = ParticipantService::new(self.ctx).participants(event_id).await?;

        let mut participants = Vec::with_capacity(roster.len());
        for user_id in &roster {
            let profile = self.ctx.profile_repo().find(*user_id).await?;
            participants.push(ParticipantRow {
                user_id: *user_id,
                role_label: allowed_roles.label_or_default(&profile.role).to_string(),
                callsign: profile.callsign,
                role: profile.role,
                team: profile.team,
                can_cancel: requester == Some(*user_id),
            });
        }

        let current_count = roster.len();
        Ok(ParticipantListResponse {
            participants,
            max_participants: event.max_participants,
            current_count,
            has_available_slots: event.has_available_slots(current_count),
            allowed_roles,
            default_role,
        })
    }

    /// Register a user, or update the profile of an existing registration
    ///
    /// The role is clamped to the event's allow-list. A full event rejects the request
    /// without touching the roster or the profile.
    #[instrument(skip(self, request))]
    pub async fn register(
        &self,
        event_id: ObjectId,
        user_id: UserId,
        request: RegisterRequest,
    ) -> ServiceResult<MessageResponse> {
        let messages = self.ctx.messages();

        let callsign = sanitize_text_field(&request.callsign);
        if callsign.is_empty() {
            return Err(ServiceError::validation(messages.get(MessageKey::CallsignRequired)));
        }
        let team = sanitize_text_field(&request.team);
        if team.is_empty() {
            return Err(ServiceError::validation(messages.get(MessageKey::TeamRequired)));
        }

        let event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| ServiceError::InvalidEvent(messages.get(MessageKey::InvalidEvent).into()))?;

        let allowed_roles = RolePolicy::new(self.ctx).allowed_roles(event_id).await?;
        let submitted_role = sanitize_text_field(&request.role);
        let role = allowed_roles.clamp(&submitted_role).to_string();
        if role != submitted_role {
            info!(submitted = %submitted_role, stored = %role, "Role not allowed, using default");
        }

        let participants = ParticipantService::new(self.ctx);
        let outcome = participants
            .add_within_capacity(event_id, user_id, event.max_participants)
            .await?;

        if outcome == AddOutcome::Full {
            warn!(max = event.max_participants, "Registration rejected, event full");
            return Err(ServiceError::EventFull(messages.get(MessageKey::EventFull).into()));
        }

        participants
            .set_last_profile(user_id, &callsign, &role, &team)
            .await?;

        info!(?outcome, role = %role, "Registration saved");
        Ok(MessageResponse::new(messages.get(MessageKey::Registered)))
    }

    /// Cancel a registration; succeeds whether or not the user was registered
    #[instrument(skip(self))]
    pub async fn cancel(
        &self,
        event_id: ObjectId,
        user_id: UserId,
    ) -> ServiceResult<MessageResponse> {
        ParticipantService::new(self.ctx)
            .remove_participant(event_id, user_id)
            .await?;

        info!("Registration cancelled");
        Ok(MessageResponse::new(self.ctx.messages().get(MessageKey::Cancelled)))
    }
}
