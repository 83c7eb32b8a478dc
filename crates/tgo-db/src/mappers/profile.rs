//! Player profile <-> user metadata mapper

use std::collections::HashMap;

use tgo_core::PlayerProfile;

use super::meta;

/// Build a profile from user metadata; missing values become empty strings
pub fn profile_from_meta(values: &HashMap<String, String>) -> PlayerProfile {
    let get = |key: &str| values.get(key).cloned().unwrap_or_default();
    PlayerProfile {
        callsign: get(meta::USER_CALLSIGN),
        role: get(meta::USER_LAST_ROLE),
        team: get(meta::USER_LAST_TEAM),
    }
}

/// The three user metadata rows a profile occupies
pub fn profile_meta(profile: &PlayerProfile) -> [(&'static str, String); 3] {
    [
        (meta::USER_CALLSIGN, profile.callsign.clone()),
        (meta::USER_LAST_ROLE, profile.role.clone()),
        (meta::USER_LAST_TEAM, profile.team.clone()),
    ]
}
