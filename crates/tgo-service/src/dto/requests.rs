//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Free text is sanitized by the services, the limits here only bound raw input size.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Registration Requests
// ============================================================================

/// Register (or update a registration) for an event
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(max = 100, message = "Callsign must be at most 100 characters"))]
    pub callsign: String,

    /// Role key; anything outside the event's allow-list is replaced by the default role
    #[serde(default)]
    pub role: String,

    #[validate(length(max = 100, message = "Team must be at most 100 characters"))]
    pub team: String,
}

// ============================================================================
// Event Requests
// ============================================================================

/// Create event request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    /// `YYYY-MM-DD`
    pub date: String,

    /// `HH:MM`
    pub time: String,

    pub field_id: Option<u64>,

    /// 0 means unlimited
    #[serde(default)]
    pub max_participants: u32,

    /// Omitted means every role is allowed
    pub allowed_roles: Option<Vec<String>>,
}

/// Update event request; omitted attributes stay as they are
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    pub date: Option<String>,

    pub time: Option<String>,

    pub field_id: Option<u64>,

    pub max_participants: Option<u32>,
}

/// Replace an event's role allow-list
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetAllowedRolesRequest {
    #[validate(length(max = 32, message = "At most 32 roles"))]
    pub roles: Vec<String>,
}

// ============================================================================
// Field Requests
// ============================================================================

/// Create field request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFieldRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
}
