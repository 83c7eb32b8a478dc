//! Entity <-> metadata mappers
//!
//! Shared by the PostgreSQL and in-memory stores.

pub mod meta;

mod event;
mod field;
mod profile;

pub use event::{event_from_meta, new_event_meta, patch_meta};
pub use field::field_from_model;
pub use profile::{profile_from_meta, profile_meta};
