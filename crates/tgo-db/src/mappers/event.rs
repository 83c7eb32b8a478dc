//! Event entity <-> metadata mapper

use std::collections::HashMap;

use tgo_core::{DomainError, Event, EventPatch, NewEvent, ObjectId};

use super::meta;

/// Build an event from its object row and metadata
pub fn event_from_meta(id: ObjectId, title: String, values: &HashMap<String, String>) -> Event {
    let get = |key: &str| values.get(key).map(String::as_str);

    Event {
        id,
        title,
        start_date_time: meta::decode_date(get(meta::EVENT_DATE)),
        field_id: meta::decode_object_id(get(meta::EVENT_FIELD)),
        max_participants: meta::decode_max(get(meta::EVENT_MAX_PARTICIPANTS)),
        allowed_roles: meta::decode_allowed_roles(get(meta::EVENT_ALLOWED_ROLES)).unwrap_or_default(),
    }
}

/// Metadata rows written for a new event
pub fn new_event_meta(event: &NewEvent) -> Result<Vec<(&'static str, String)>, DomainError> {
    let mut rows = vec![(
        meta::EVENT_MAX_PARTICIPANTS,
        event.max_participants.to_string(),
    )];
    if let Some(date) = event.start_date_time {
        rows.push((meta::EVENT_DATE, meta::encode_date(date)));
    }
    if let Some(field_id) = event.field_id {
        rows.push((meta::EVENT_FIELD, field_id.to_string()));
    }
    if !event.allowed_roles.is_empty() {
        rows.push((
            meta::EVENT_ALLOWED_ROLES,
            meta::encode_allowed_roles(&event.allowed_roles)?,
        ));
    }
    Ok(rows)
}

/// Metadata rows written for the present attributes of a patch
pub fn patch_meta(patch: &EventPatch) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    if let Some(date) = patch.start_date_time {
        rows.push((meta::EVENT_DATE, meta::encode_date(date)));
    }
    if let Some(field_id) = patch.field_id {
        rows.push((meta::EVENT_FIELD, field_id.to_string()));
    }
    if let Some(max) = patch.max_participants {
        rows.push((meta::EVENT_MAX_PARTICIPANTS, max.to_string()));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use tgo_core::combine_date_time;

    #[test]
    fn test_round_trip_through_meta() {
        let new_event = NewEvent {
            title: "Op Dawn".into(),
            start_date_time: Some(combine_date_time("2026-06-01", "06:00").unwrap()),
            field_id: Some(ObjectId::new(4)),
            max_participants: 20,
            allowed_roles: vec!["sniper".into(), "assault".into()],
        };

        let values: HashMap<String, String> = new_event_meta(&new_event)
            .unwrap()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_eq!(values[meta::EVENT_DATE], "2026-06-01 06:00:00");

        let event = event_from_meta(ObjectId::new(10), new_event.title.clone(), &values);
        assert_eq!(event.start_date_time, new_event.start_date_time);
        assert_eq!(event.field_id, Some(ObjectId::new(4)));
        assert_eq!(event.max_participants, 20);
        assert_eq!(event.allowed_roles, new_event.allowed_roles);
    }

    #[test]
    fn test_missing_meta_defaults() {
        let event = event_from_meta(ObjectId::new(1), "Bare".into(), &HashMap::new());
        assert_eq!(event.max_participants, 0);
        assert!(event.start_date_time.is_none());
        assert!(event.allowed_roles.is_empty());
    }

    #[test]
    fn test_patch_meta_only_present() {
        let rows = patch_meta(&EventPatch {
            max_participants: Some(8),
            ..Default::default()
        });
        assert_eq!(rows, vec![(meta::EVENT_MAX_PARTICIPANTS, "8".to_string())]);
    }
}
