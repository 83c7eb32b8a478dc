//! Repository traits (ports)

mod repositories;

pub use repositories::{
    EventRepository, FieldRepository, ParticipantRepository, ProfileRepository, RepoResult,
};
