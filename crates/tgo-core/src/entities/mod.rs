//! Domain entities - core business objects

mod event;
mod field;
mod profile;
mod roster;

pub use event::{
    combine_date_time, has_available_slots, Event, EventPatch, NewEvent, EVENT_DATE_FORMAT,
};
pub use field::Field;
pub use profile::PlayerProfile;
pub use roster::{AddOutcome, Roster};
