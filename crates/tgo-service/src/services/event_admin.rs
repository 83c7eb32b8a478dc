//! Event and field administration
//!
//! Organizer-side writes: venues, events and their role allow-lists. Capability checks
//! happen before these methods are called.

use chrono::{NaiveDate, NaiveTime, Utc};
use tgo_common::MessageKey;
use tgo_core::{
    combine_date_time, sanitize_text_field, DomainError, Event, EventPatch, NewEvent, ObjectId,
    UserId,
};
use tracing::{info, instrument};

use crate::dto::{
    AllowedRolesResponse, CreateEventRequest, CreateFieldRequest, EventDetails, EventResponse,
    FieldResponse, RolesResponse, SetAllowedRolesRequest, UpdateEventRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::role_policy::RolePolicy;

/// Event administration service
pub struct EventAdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventAdminService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // === Fields ===

    /// Create a field owned by the requesting organizer
    #[instrument(skip(self, request))]
    pub async fn create_field(
        &self,
        owner_id: UserId,
        request: CreateFieldRequest,
    ) -> ServiceResult<FieldResponse> {
        let title = required_text(&request.title, "title")?;
        let field = self.ctx.field_repo().create(&title, owner_id).await?;

        info!(field_id = %field.id, "Field created");
        Ok(FieldResponse::from(field))
    }

    #[instrument(skip(self))]
    pub async fn get_field(&self, field_id: ObjectId) -> ServiceResult<FieldResponse> {
        self.ctx
            .field_repo()
            .find_by_id(field_id)
            .await?
            .map(FieldResponse::from)
            .ok_or_else(|| ServiceError::not_found("Field", field_id.to_string()))
    }

    // === Events ===

    /// Create an event; the allow-list is normalized before it is stored
    #[instrument(skip(self, request))]
    pub async fn create_event(&self, request: CreateEventRequest) -> ServiceResult<EventResponse> {
        let title = required_text(&request.title, "title")?;
        let start = combine_date_time(&request.date, &request.time)?;
        let field_id = self.resolve_field(request.field_id).await?;

        let allowed_roles = request
            .allowed_roles
            .map(|roles| self.ctx.role_registry().normalize_allow_list(roles.as_slice()))
            .unwrap_or_default();

        let event = self
            .ctx
            .event_repo()
            .create(&NewEvent {
                title,
                start_date_time: Some(start),
                field_id,
                max_participants: request.max_participants,
                allowed_roles,
            })
            .await?;

        info!(event_id = %event.id, max = event.max_participants, "Event created");
        self.details(event).await
    }

    /// Write the attributes present in the request
    ///
    /// A lone date or time is merged with the other half of the stored start.
    #[instrument(skip(self, request))]
    pub async fn update_event(
        &self,
        event_id: ObjectId,
        request: UpdateEventRequest,
    ) -> ServiceResult<EventResponse> {
        let event = self.require_event(event_id).await?;

        let title = match request.title.as_deref() {
            Some(raw) => Some(required_text(raw, "title")?),
            None => None,
        };
        let start_date_time = merge_start(&event, request.date.as_deref(), request.time.as_deref())?;
        let field_id = self.resolve_field(request.field_id).await?;

        let patch = EventPatch {
            title,
            start_date_time,
            field_id,
            max_participants: request.max_participants,
        };
        if patch.is_empty() {
            return self.details(event).await;
        }

        let event = self.ctx.event_repo().update(event_id, &patch).await?;
        info!(event_id = %event_id, "Event updated");
        self.details(event).await
    }

    #[instrument(skip(self))]
    pub async fn get_event(&self, event_id: ObjectId) -> ServiceResult<EventResponse> {
        let event = self.require_event(event_id).await?;
        self.details(event).await
    }

    /// Replace an event's allow-list
    #[instrument(skip(self, request))]
    pub async fn set_allowed_roles(
        &self,
        event_id: ObjectId,
        request: SetAllowedRolesRequest,
    ) -> ServiceResult<AllowedRolesResponse> {
        self.require_event(event_id).await?;
        let allowed_roles = RolePolicy::new(self.ctx)
            .save_allowed_roles(event_id, request.roles.as_slice())
            .await?;

        Ok(AllowedRolesResponse {
            event_id,
            allowed_roles,
        })
    }

    /// The whole role registry
    pub fn roles(&self) -> RolesResponse {
        let registry = self.ctx.role_registry();
        RolesResponse {
            roles: registry.all(),
            default_role: registry.default_key().to_string(),
        }
    }

    // === Helpers ===

    async fn require_event(&self, event_id: ObjectId) -> ServiceResult<Event> {
        self.ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| {
                ServiceError::InvalidEvent(self.ctx.messages().get(MessageKey::InvalidEvent).into())
            })
    }

    async fn resolve_field(&self, field_id: Option<u64>) -> ServiceResult<Option<ObjectId>> {
        let Some(raw) = field_id else {
            return Ok(None);
        };

        let field_id = ObjectId::new(raw);
        match self.ctx.field_repo().find_by_id(field_id).await? {
            Some(_) => Ok(Some(field_id)),
            None => Err(DomainError::FieldNotFound(field_id).into()),
        }
    }

    async fn details(&self, event: Event) -> ServiceResult<EventResponse> {
        let field = match event.field_id {
            Some(id) => self.ctx.field_repo().find_by_id(id).await?,
            None => None,
        };
        let allowed_roles = RolePolicy::new(self.ctx).allowed_roles(event.id).await?;
        let current_count = self.ctx.participant_repo().list(event.id).await?.len();
        let is_active = event.is_active(Utc::now().naive_utc());

        Ok(EventResponse::from(EventDetails {
            event,
            field,
            allowed_roles,
            current_count,
            is_active,
        }))
    }
}

fn required_text(raw: &str, name: &str) -> ServiceResult<String> {
    let value = sanitize_text_field(raw);
    if value.is_empty() {
        return Err(ServiceError::validation(format!("{name} must not be empty")));
    }
    Ok(value)
}

fn merge_start(
    event: &Event,
    date: Option<&str>,
    time: Option<&str>,
) -> ServiceResult<Option<chrono::NaiveDateTime>> {
    let stored_date = event.start_date_time.map(|dt| dt.date());
    let stored_time = event.start_date_time.map(|dt| dt.time());

    let (date, time) = match (date, time) {
        (None, None) => return Ok(None),
        (Some(date), Some(time)) => (date.to_string(), time.to_string()),
        (Some(date), None) => (
            date.to_string(),
            format_time(stored_time.unwrap_or(NaiveTime::MIN)),
        ),
        (None, Some(time)) => {
            let stored = stored_date.ok_or_else(|| {
                ServiceError::from(DomainError::InvalidDateTime(
                    "date is required when the event has none".into(),
                ))
            })?;
            (format_date(stored), time.to_string())
        }
    };

    Ok(Some(combine_date_time(&date, &time)?))
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}
