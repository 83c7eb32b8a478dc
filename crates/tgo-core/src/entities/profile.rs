//! Player profile - last used registration values, shared across events

use serde::{Deserialize, Serialize};

/// Most recent callsign, role and team a user registered with
///
/// Missing values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub callsign: String,
    pub role: String,
    pub team: String,
}

impl PlayerProfile {
    pub fn new(
        callsign: impl Into<String>,
        role: impl Into<String>,
        team: impl Into<String>,
    ) -> Self {
        Self {
            callsign: callsign.into(),
            role: role.into(),
            team: team.into(),
        }
    }

    /// Whether nothing has been stored for this user yet
    pub fn is_empty(&self) -> bool {
        self.callsign.is_empty() && self.role.is_empty() && self.team.is_empty()
    }
}
