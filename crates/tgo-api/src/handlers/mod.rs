//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod events;
pub mod fields;
pub mod health;
pub mod participants;
pub mod roles;
