//! Value objects - immutable types that represent domain concepts

mod capabilities;
mod ids;
mod role_registry;

pub use capabilities::{Capabilities, PLAYER_SITE_ROLE};
pub use ids::{IdParseError, ObjectId, UserId};
pub use role_registry::{AllowedRoles, RoleEntry, RoleRegistry, DEFAULT_ROLE_KEY};
