//! Wire types as the client sees them
//!
//! These mirror the server's JSON without depending on the server crates.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

/// One roster row
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Participant {
    pub user_id: u64,
    pub callsign: String,
    pub role: String,
    pub role_label: String,
    pub team: String,
    pub can_cancel: bool,
}

/// `GET /events/{id}/participants`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParticipantList {
    pub participants: Vec<Participant>,
    pub max_participants: u32,
    pub current_count: usize,
    pub has_available_slots: bool,
    #[serde(default)]
    pub allowed_roles: RoleOptions,
    #[serde(default)]
    pub default_role: String,
}

/// `GET /roles`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RolesList {
    pub roles: RoleOptions,
    pub default_role: String,
}

/// Success body of register and cancel
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Body of `POST /events/{id}/register`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationForm {
    pub callsign: String,
    pub role: String,
    pub team: String,
}

/// Role key to label pairs in the order the server sent them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleOptions(Vec<(String, String)>);

impl RoleOptions {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self(entries)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, label)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn first_key(&self) -> Option<&str> {
        self.0.first().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for RoleOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = RoleOptions;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of role keys to labels")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, label)) = map.next_entry::<String, String>()? {
                    entries.push((key, label));
                }
                Ok(RoleOptions(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}
