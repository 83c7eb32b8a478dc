//! `dashmap`-backed implementation of every repository trait
//!
//! Each object's metadata lives in one map entry. Roster mutations run while holding that
//! entry's write guard, which makes the capacity check and the append atomic per event.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, instrument};

use tgo_core::traits::{
    EventRepository, FieldRepository, ParticipantRepository, ProfileRepository, RepoResult,
};
use tgo_core::{
    AddOutcome, DomainError, Event, EventPatch, Field, NewEvent, ObjectId, PlayerProfile, Roster,
    UserId,
};

use crate::mappers::{
    event_from_meta, meta, new_event_meta, patch_meta, profile_from_meta, profile_meta,
};

#[derive(Debug, Clone)]
struct StoredObject {
    object_type: &'static str,
    title: String,
    author_id: Option<UserId>,
    meta: HashMap<String, String>,
}

#[derive(Debug, Default)]
struct Inner {
    objects: DashMap<ObjectId, StoredObject>,
    user_meta: DashMap<UserId, HashMap<String, String>>,
    next_id: AtomicU64,
}

/// Shared in-memory store; clones share state
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> ObjectId {
        ObjectId::new(self.inner.next_id.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Run a read-modify-write on an event's roster under the entry lock
    fn with_roster<T>(
        &self,
        event_id: ObjectId,
        mutate: impl FnOnce(&mut Roster) -> (T, bool),
    ) -> RepoResult<T> {
        let mut object = self
            .inner
            .objects
            .get_mut(&event_id)
            .filter(|o| o.object_type == meta::OBJECT_TYPE_EVENT)
            .ok_or(DomainError::EventNotFound(event_id))?;

        let mut roster = meta::decode_roster_for_update(
            object.meta.get(meta::EVENT_PARTICIPANTS).map(String::as_str),
        )?;
        let (result, changed) = mutate(&mut roster);

        if changed {
            let encoded = meta::encode_roster(&roster)?;
            object
                .meta
                .insert(meta::EVENT_PARTICIPANTS.to_string(), encoded);
        }
        Ok(result)
    }

    fn find_event(&self, id: ObjectId) -> Option<Event> {
        self.inner
            .objects
            .get(&id)
            .filter(|o| o.object_type == meta::OBJECT_TYPE_EVENT)
            .map(|o| event_from_meta(id, o.title.clone(), &o.meta))
    }
}

#[async_trait]
impl EventRepository for MemoryStore {
    async fn find_by_id(&self, id: ObjectId) -> RepoResult<Option<Event>> {
        Ok(self.find_event(id))
    }

    async fn exists(&self, id: ObjectId) -> RepoResult<bool> {
        Ok(self
            .inner
            .objects
            .get(&id)
            .is_some_and(|o| o.object_type == meta::OBJECT_TYPE_EVENT))
    }

    #[instrument(skip(self, event), fields(title = %event.title))]
    async fn create(&self, event: &NewEvent) -> RepoResult<Event> {
        let id = self.next_id();
        let values = new_event_meta(event)?
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();

        self.inner.objects.insert(
            id,
            StoredObject {
                object_type: meta::OBJECT_TYPE_EVENT,
                title: event.title.clone(),
                author_id: None,
                meta: values,
            },
        );

        self.find_event(id)
            .ok_or_else(|| DomainError::InternalError("created event vanished".into()))
    }

    async fn update(&self, id: ObjectId, patch: &EventPatch) -> RepoResult<Event> {
        {
            let mut object = self
                .inner
                .objects
                .get_mut(&id)
                .filter(|o| o.object_type == meta::OBJECT_TYPE_EVENT)
                .ok_or(DomainError::EventNotFound(id))?;

            if let Some(title) = &patch.title {
                object.title.clone_from(title);
            }
            for (key, value) in patch_meta(patch) {
                object.meta.insert(key.to_string(), value);
            }
        }

        self.find_event(id).ok_or(DomainError::EventNotFound(id))
    }

    async fn allowed_roles(&self, id: ObjectId) -> RepoResult<Option<Vec<String>>> {
        Ok(self.inner.objects.get(&id).and_then(|o| {
            meta::decode_allowed_roles(o.meta.get(meta::EVENT_ALLOWED_ROLES).map(String::as_str))
        }))
    }

    async fn set_allowed_roles(&self, id: ObjectId, roles: &[String]) -> RepoResult<()> {
        let value = meta::encode_allowed_roles(roles)?;
        let mut object = self
            .inner
            .objects
            .get_mut(&id)
            .ok_or(DomainError::EventNotFound(id))?;
        object
            .meta
            .insert(meta::EVENT_ALLOWED_ROLES.to_string(), value);
        Ok(())
    }
}

#[async_trait]
impl FieldRepository for MemoryStore {
    async fn find_by_id(&self, id: ObjectId) -> RepoResult<Option<Field>> {
        Ok(self
            .inner
            .objects
            .get(&id)
            .filter(|o| o.object_type == meta::OBJECT_TYPE_FIELD)
            .map(|o| Field {
                id,
                title: o.title.clone(),
                owner_id: o.author_id.unwrap_or(UserId::new(0)),
            }))
    }

    async fn create(&self, title: &str, owner_id: UserId) -> RepoResult<Field> {
        let id = self.next_id();
        self.inner.objects.insert(
            id,
            StoredObject {
                object_type: meta::OBJECT_TYPE_FIELD,
                title: title.to_string(),
                author_id: Some(owner_id),
                meta: HashMap::new(),
            },
        );

        Ok(Field {
            id,
            title: title.to_string(),
            owner_id,
        })
    }
}

#[async_trait]
impl ParticipantRepository for MemoryStore {
    async fn list(&self, event_id: ObjectId) -> RepoResult<Vec<UserId>> {
        let raw = self
            .inner
            .objects
            .get(&event_id)
            .and_then(|o| o.meta.get(meta::EVENT_PARTICIPANTS).cloned());
        Ok(meta::decode_roster(raw.as_deref()).into_vec())
    }

    async fn add(&self, event_id: ObjectId, user_id: UserId) -> RepoResult<bool> {
        self.with_roster(event_id, |roster| {
            let added = roster.add(user_id);
            (added, added)
        })
    }

    #[instrument(skip(self))]
    async fn add_within_capacity(
        &self,
        event_id: ObjectId,
        user_id: UserId,
        max: u32,
    ) -> RepoResult<AddOutcome> {
        let outcome = self.with_roster(event_id, |roster| {
            let outcome = roster.add_within_capacity(user_id, max);
            (outcome, outcome == AddOutcome::Added)
        })?;

        debug!(?outcome, "Roster append");
        Ok(outcome)
    }

    async fn remove(&self, event_id: ObjectId, user_id: UserId) -> RepoResult<bool> {
        match self.with_roster(event_id, |roster| {
            let removed = roster.remove(user_id);
            (removed, removed)
        }) {
            Err(DomainError::EventNotFound(_)) => Ok(false),
            other => other,
        }
    }
}

#[async_trait]
impl ProfileRepository for MemoryStore {
    async fn find(&self, user_id: UserId) -> RepoResult<PlayerProfile> {
        Ok(self
            .inner
            .user_meta
            .get(&user_id)
            .map(|values| profile_from_meta(&values))
            .unwrap_or_default())
    }

    async fn save(&self, user_id: UserId, profile: &PlayerProfile) -> RepoResult<()> {
        // One entry guard covers all three values
        let mut values = self.inner.user_meta.entry(user_id).or_default();
        for (key, value) in profile_meta(profile) {
            values.insert(key.to_string(), value);
        }
        Ok(())
    }
}
