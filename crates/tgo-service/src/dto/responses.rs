//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Ids are plain numbers, the
//! platform's ids are well inside the safe integer range.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tgo_core::{AllowedRoles, ObjectId, UserId};

// ============================================================================
// Registration Responses
// ============================================================================

/// Localized confirmation text
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One roster row with derived display fields
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantRow {
    pub user_id: UserId,
    pub callsign: String,
    pub role: String,
    pub role_label: String,
    pub team: String,
    pub can_cancel: bool,
}

/// Roster listing for an event
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantListResponse {
    pub participants: Vec<ParticipantRow>,
    pub max_participants: u32,
    pub current_count: usize,
    pub has_available_slots: bool,
    pub allowed_roles: AllowedRoles,
    pub default_role: String,
}

// ============================================================================
// Event Responses
// ============================================================================

/// Event details as the single-event page shows them
#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub id: ObjectId,
    pub title: String,
    /// `YYYY-MM-DD HH:MM:SS`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldResponse>,
    pub max_participants: u32,
    pub current_count: usize,
    pub has_available_slots: bool,
    pub allowed_roles: AllowedRoles,
    pub is_active: bool,
}

/// Stored allow-list after an update
#[derive(Debug, Clone, Serialize)]
pub struct AllowedRolesResponse {
    pub event_id: ObjectId,
    pub allowed_roles: Vec<String>,
}

/// Every registered role
#[derive(Debug, Clone, Serialize)]
pub struct RolesResponse {
    pub roles: AllowedRoles,
    pub default_role: String,
}

// ============================================================================
// Field Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct FieldResponse {
    pub id: ObjectId,
    pub title: String,
    pub owner_id: UserId,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health of the persistence backend
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub store: String,
    pub backend: String,
}

impl ReadinessResponse {
    pub fn ready(backend: &str, store_healthy: bool) -> Self {
        Self {
            status: if store_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                store: if store_healthy { "healthy" } else { "unhealthy" }.to_string(),
                backend: backend.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
