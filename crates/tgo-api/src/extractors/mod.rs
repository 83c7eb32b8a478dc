//! Axum extractors for request handling
//!
//! Custom extractors for identity, capability checks, path ids and validated bodies.

mod auth;
mod path;
mod validated;

pub use auth::{AuthUser, FieldManagerUser, OptionalAuthUser, OrganizerUser, PlayerUser};
pub use path::{EventPath, FieldPath};
pub use validated::ValidatedJson;
