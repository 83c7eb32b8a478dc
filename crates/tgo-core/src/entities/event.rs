//! Event entity - a scheduled game with capacity and a role allow-list

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::ObjectId;

/// Storage format of the combined start timestamp
pub const EVENT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Event entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: ObjectId,
    pub title: String,
    pub start_date_time: Option<NaiveDateTime>,
    pub field_id: Option<ObjectId>,
    /// Capacity; 0 means unlimited
    pub max_participants: u32,
    /// Raw stored allow-list, empty means every role
    pub allowed_roles: Vec<String>,
}

impl Event {
    /// Check if another participant fits given the current roster size
    #[inline]
    pub fn has_available_slots(&self, current_count: usize) -> bool {
        has_available_slots(self.max_participants, current_count)
    }

    /// Check if the event has not started yet
    pub fn is_active(&self, now: NaiveDateTime) -> bool {
        self.start_date_time.is_some_and(|start| start > now)
    }

    /// Start timestamp in storage format
    pub fn formatted_start(&self) -> Option<String> {
        self.start_date_time
            .map(|dt| dt.format(EVENT_DATE_FORMAT).to_string())
    }

    /// Apply a partial update
    pub fn apply(&mut self, patch: &EventPatch) {
        if let Some(title) = &patch.title {
            self.title.clone_from(title);
        }
        if let Some(start) = patch.start_date_time {
            self.start_date_time = Some(start);
        }
        if let Some(field_id) = patch.field_id {
            self.field_id = Some(field_id);
        }
        if let Some(max) = patch.max_participants {
            self.max_participants = max;
        }
    }
}

/// Capacity rule shared by the listing and the registration check
#[inline]
pub fn has_available_slots(max_participants: u32, current_count: usize) -> bool {
    max_participants == 0 || current_count < max_participants as usize
}

/// Data for a new event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub start_date_time: Option<NaiveDateTime>,
    pub field_id: Option<ObjectId>,
    pub max_participants: u32,
    /// Already normalized allow-list
    pub allowed_roles: Vec<String>,
}

/// Partial event update; `None` leaves the attribute untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub start_date_time: Option<NaiveDateTime>,
    pub field_id: Option<ObjectId>,
    pub max_participants: Option<u32>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.start_date_time.is_none()
            && self.field_id.is_none()
            && self.max_participants.is_none()
    }
}

/// Combine a `YYYY-MM-DD` date and an `HH:MM` (or `HH:MM:SS`) time into one timestamp
pub fn combine_date_time(date: &str, time: &str) -> Result<NaiveDateTime, DomainError> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidDateTime(format!("bad date: {}", date.trim())))?;

    let time = time.trim();
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .map_err(|_| DomainError::InvalidDateTime(format!("bad time: {time}")))?;

    Ok(date.and_time(time))
}
