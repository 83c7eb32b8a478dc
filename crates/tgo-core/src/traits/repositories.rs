//! Repository traits (ports) - define the interface for data access
//!
//! Everything the add-on persists lives in the host platform's object storage as
//! key/value metadata on events and users. The domain layer defines what it needs here
//! and the infrastructure layer maps it onto metadata rows.

use async_trait::async_trait;

use crate::entities::{AddOutcome, Event, EventPatch, Field, NewEvent, PlayerProfile};
use crate::error::DomainError;
use crate::value_objects::{ObjectId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Event Repository
// ============================================================================

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find event by ID
    async fn find_by_id(&self, id: ObjectId) -> RepoResult<Option<Event>>;

    /// Check if an event with this ID exists
    async fn exists(&self, id: ObjectId) -> RepoResult<bool>;

    /// Create a new event and return it with its assigned ID
    async fn create(&self, event: &NewEvent) -> RepoResult<Event>;

    /// Write the present attributes of a patch
    async fn update(&self, id: ObjectId, patch: &EventPatch) -> RepoResult<Event>;

    /// Stored role allow-list, `None` when never set
    async fn allowed_roles(&self, id: ObjectId) -> RepoResult<Option<Vec<String>>>;

    /// Replace the stored role allow-list
    async fn set_allowed_roles(&self, id: ObjectId, roles: &[String]) -> RepoResult<()>;
}

// ============================================================================
// Field Repository
// ============================================================================

#[async_trait]
pub trait FieldRepository: Send + Sync {
    /// Find field by ID
    async fn find_by_id(&self, id: ObjectId) -> RepoResult<Option<Field>>;

    /// Create a new field
    async fn create(&self, title: &str, owner_id: UserId) -> RepoResult<Field>;
}

// ============================================================================
// Participant Repository
// ============================================================================

#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Roster in registration order
    async fn list(&self, event_id: ObjectId) -> RepoResult<Vec<UserId>>;

    /// Append a user unless already present; returns whether the roster changed
    async fn add(&self, event_id: ObjectId, user_id: UserId) -> RepoResult<bool>;

    /// Atomically check capacity, then append
    ///
    /// Capacity is evaluated on the roster size before the write, so a full roster reports
    /// `Full` even for a user already on it. `max == 0` means unlimited.
    async fn add_within_capacity(
        &self,
        event_id: ObjectId,
        user_id: UserId,
        max: u32,
    ) -> RepoResult<AddOutcome>;

    /// Remove every occurrence of a user; returns whether the roster changed
    async fn remove(&self, event_id: ObjectId, user_id: UserId) -> RepoResult<bool>;
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Last used values; empty strings for anything never stored
    async fn find(&self, user_id: UserId) -> RepoResult<PlayerProfile>;

    /// Store callsign, role and team in one write
    async fn save(&self, user_id: UserId, profile: &PlayerProfile) -> RepoResult<()>;
}
