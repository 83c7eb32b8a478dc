//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use tgo_core::{AllowedRoles, Event, Field};

use super::responses::{EventResponse, FieldResponse};

// ============================================================================
// Field Mappers
// ============================================================================

impl From<&Field> for FieldResponse {
    fn from(field: &Field) -> Self {
        Self {
            id: field.id,
            title: field.title.clone(),
            owner_id: field.owner_id,
        }
    }
}

impl From<Field> for FieldResponse {
    fn from(field: Field) -> Self {
        Self::from(&field)
    }
}

// ============================================================================
// Event Mappers
// ============================================================================

/// Event with the data resolved around it
#[derive(Debug, Clone)]
pub struct EventDetails {
    pub event: Event,
    pub field: Option<Field>,
    pub allowed_roles: AllowedRoles,
    pub current_count: usize,
    pub is_active: bool,
}

impl From<EventDetails> for EventResponse {
    fn from(details: EventDetails) -> Self {
        let EventDetails {
            event,
            field,
            allowed_roles,
            current_count,
            is_active,
        } = details;

        Self {
            id: event.id,
            start_date_time: event.formatted_start(),
            has_available_slots: event.has_available_slots(current_count),
            max_participants: event.max_participants,
            title: event.title,
            field: field.map(FieldResponse::from),
            current_count,
            allowed_roles,
            is_active,
        }
    }
}
