//! Capability flags granted to authenticated platform users
//!
//! The identity provider hands us site role names (`tgo_player`, `administrator`, ...);
//! each maps to a fixed capability set. Registration requires `REGISTER_FOR_EVENTS`.

use bitflags::bitflags;
use serde::{Serialize, Serializer};

/// Site role assigned to players on account creation
pub const PLAYER_SITE_ROLE: &str = "tgo_player";

bitflags! {
    /// What an authenticated user may do
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u32 {
        /// Read public event data
        const READ                = 1 << 0;
        /// Register and cancel own registrations
        const REGISTER_FOR_EVENTS = 1 << 1;
        /// Create and edit events, including role allow-lists
        const MANAGE_EVENTS       = 1 << 2;
        /// Create fields
        const MANAGE_FIELDS       = 1 << 3;

        /// Everything a player gets
        const PLAYER = Self::READ.bits() | Self::REGISTER_FOR_EVENTS.bits();

        /// Everything an organizer gets
        const ORGANIZER = Self::READ.bits()
            | Self::MANAGE_EVENTS.bits()
            | Self::MANAGE_FIELDS.bits();

        const ALL = Self::READ.bits()
            | Self::REGISTER_FOR_EVENTS.bits()
            | Self::MANAGE_EVENTS.bits()
            | Self::MANAGE_FIELDS.bits();
    }
}

impl Capabilities {
    /// Check if the set contains a required capability
    #[inline]
    pub fn has(&self, capability: Capabilities) -> bool {
        self.contains(capability)
    }

    /// Capabilities granted by a single site role name
    ///
    /// Unknown names grant nothing.
    pub fn from_site_role(role: &str) -> Self {
        match role {
            // Subscribers are granted event registration on install
            PLAYER_SITE_ROLE | "player" | "subscriber" => Self::PLAYER,
            "organizer" | "editor" => Self::ORGANIZER,
            "administrator" => Self::ALL,
            "author" | "contributor" => Self::READ,
            _ => Self::empty(),
        }
    }

    /// Union of capabilities across all site roles held by a user
    pub fn from_roles<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        roles
            .into_iter()
            .fold(Self::empty(), |acc, role| acc | Self::from_site_role(role.as_ref()))
    }

    /// Names of the individual capabilities that are set
    pub fn list(&self) -> Vec<&'static str> {
        let mut result = Vec::new();
        if self.contains(Self::READ) {
            result.push("read");
        }
        if self.contains(Self::REGISTER_FOR_EVENTS) {
            result.push("register_for_events");
        }
        if self.contains(Self::MANAGE_EVENTS) {
            result.push("manage_events");
        }
        if self.contains(Self::MANAGE_FIELDS) {
            result.push("manage_fields");
        }
        result
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::empty()
    }
}

impl Serialize for Capabilities {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.list().serialize(serializer)
    }
}
