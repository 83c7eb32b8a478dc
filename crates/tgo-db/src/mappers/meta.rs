//! Metadata keys and value codecs
//!
//! Values are strings. Anything unreadable decodes to the documented default instead of
//! failing the request, except a roster that is about to be rewritten.

use chrono::NaiveDateTime;
use tgo_core::{DomainError, ObjectId, Roster, UserId, EVENT_DATE_FORMAT};
use tracing::warn;

/// Object type of event records
pub const OBJECT_TYPE_EVENT: &str = "tgo_event";
/// Object type of field records
pub const OBJECT_TYPE_FIELD: &str = "tgo_field";

// Event metadata
pub const EVENT_DATE: &str = "tgo_event_date";
pub const EVENT_FIELD: &str = "tgo_event_field";
pub const EVENT_MAX_PARTICIPANTS: &str = "tgo_event_max_participants";
pub const EVENT_ALLOWED_ROLES: &str = "_tgo_allowed_roles";
pub const EVENT_PARTICIPANTS: &str = "tgo_participants";

// User metadata
pub const USER_CALLSIGN: &str = "callsign";
pub const USER_LAST_ROLE: &str = "last_role";
pub const USER_LAST_TEAM: &str = "last_team";

/// Roster stored as a JSON array of user ids; unreadable values list as empty
pub fn decode_roster(raw: Option<&str>) -> Roster {
    decode_roster_for_update(raw).unwrap_or_else(|e| {
        warn!(error = %e, "Unreadable roster, listing it as empty");
        Roster::default()
    })
}

/// Roster read ahead of a write
///
/// An unreadable value is an error so the write cannot replace it.
pub fn decode_roster_for_update(raw: Option<&str>) -> Result<Roster, DomainError> {
    let ids: Vec<u64> = match raw {
        Some(s) => serde_json::from_str(s)
            .map_err(|e| DomainError::InternalError(format!("unreadable roster: {e}")))?,
        None => Vec::new(),
    };
    Ok(Roster::from_ids(ids.into_iter().filter(|id| *id > 0).map(UserId::new)))
}

pub fn encode_roster(roster: &Roster) -> Result<String, DomainError> {
    serde_json::to_string(roster).map_err(|e| DomainError::InternalError(e.to_string()))
}

/// Allow-list stored as a JSON array of role keys; `None` when absent or unreadable
pub fn decode_allowed_roles(raw: Option<&str>) -> Option<Vec<String>> {
    raw.and_then(|s| serde_json::from_str(s).ok())
}

pub fn encode_allowed_roles(roles: &[String]) -> Result<String, DomainError> {
    serde_json::to_string(roles).map_err(|e| DomainError::InternalError(e.to_string()))
}

/// Capacity, 0 (unlimited) when absent or not a number
pub fn decode_max(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

pub fn decode_date(raw: Option<&str>) -> Option<NaiveDateTime> {
    raw.and_then(|s| NaiveDateTime::parse_from_str(s.trim(), EVENT_DATE_FORMAT).ok())
}

pub fn encode_date(date: NaiveDateTime) -> String {
    date.format(EVENT_DATE_FORMAT).to_string()
}

pub fn decode_object_id(raw: Option<&str>) -> Option<ObjectId> {
    raw.and_then(|s| ObjectId::parse(s).ok())
}
