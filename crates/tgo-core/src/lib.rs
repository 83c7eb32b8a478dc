//! # tgo-core
//!
//! Domain layer containing entities, value objects, repository traits, and text sanitization.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod sanitize;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    combine_date_time, has_available_slots, AddOutcome, Event, EventPatch, Field, NewEvent,
    PlayerProfile, Roster, EVENT_DATE_FORMAT,
};
pub use error::DomainError;
pub use sanitize::sanitize_text_field;
pub use traits::{
    EventRepository, FieldRepository, ParticipantRepository, ProfileRepository, RepoResult,
};
pub use value_objects::{
    AllowedRoles, Capabilities, IdParseError, ObjectId, RoleEntry, RoleRegistry, UserId,
    DEFAULT_ROLE_KEY, PLAYER_SITE_ROLE,
};
