//! Roster - the ordered set of users registered to one event

use serde::{Deserialize, Serialize};

use super::event::has_available_slots;
use crate::value_objects::UserId;

/// Result of a capacity-gated roster append
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// User was appended to the roster
    Added,
    /// User was already on the roster, nothing changed
    AlreadyRegistered,
    /// Roster was at capacity, nothing changed
    Full,
}

/// Registered users in registration order, without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(Vec<UserId>);

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored ids, dropping repeats after the first occurrence
    pub fn from_ids(ids: impl IntoIterator<Item = UserId>) -> Self {
        let mut roster = Self::new();
        for id in ids {
            roster.add(id);
        }
        roster
    }

    pub fn contains(&self, user_id: UserId) -> bool {
        self.0.contains(&user_id)
    }

    /// Append unless present; returns whether the roster changed
    pub fn add(&mut self, user_id: UserId) -> bool {
        if self.contains(user_id) {
            return false;
        }
        self.0.push(user_id);
        true
    }

    /// Capacity check on the size before the write, then append
    ///
    /// A full roster reports `Full` even for a user already on it.
    pub fn add_within_capacity(&mut self, user_id: UserId, max: u32) -> AddOutcome {
        if !has_available_slots(max, self.0.len()) {
            return AddOutcome::Full;
        }
        if self.add(user_id) {
            AddOutcome::Added
        } else {
            AddOutcome::AlreadyRegistered
        }
    }

    /// Remove every occurrence; returns whether the roster changed
    pub fn remove(&mut self, user_id: UserId) -> bool {
        let before = self.0.len();
        self.0.retain(|id| *id != user_id);
        self.0.len() != before
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[UserId] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<UserId> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid(n: u64) -> UserId {
        UserId::new(n)
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut roster = Roster::new();
        assert!(roster.add(uid(1)));
        assert!(!roster.add(uid(1)));
        assert_eq!(roster.as_slice(), &[uid(1)]);
    }

    #[test]
    fn test_from_ids_dedupes() {
        let roster = Roster::from_ids([uid(3), uid(1), uid(3), uid(2)]);
        assert_eq!(roster.as_slice(), &[uid(3), uid(1), uid(2)]);
    }

    #[test]
    fn test_add_within_capacity() {
        let mut roster = Roster::new();
        assert_eq!(roster.add_within_capacity(uid(1), 2), AddOutcome::Added);
        assert_eq!(roster.add_within_capacity(uid(1), 2), AddOutcome::AlreadyRegistered);
        assert_eq!(roster.add_within_capacity(uid(2), 2), AddOutcome::Added);
        assert_eq!(roster.add_within_capacity(uid(3), 2), AddOutcome::Full);
        // Full is checked before the duplicate check
        assert_eq!(roster.add_within_capacity(uid(1), 2), AddOutcome::Full);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_unlimited_capacity() {
        let mut roster = Roster::new();
        for n in 1..=50 {
            assert_eq!(roster.add_within_capacity(uid(n), 0), AddOutcome::Added);
        }
        assert_eq!(roster.len(), 50);
    }

    #[test]
    fn test_remove() {
        let mut roster = Roster::from_ids([uid(1), uid(2)]);
        assert!(roster.remove(uid(1)));
        assert!(!roster.remove(uid(1)));
        assert_eq!(roster.as_slice(), &[uid(2)]);
    }

    #[test]
    fn test_serde_as_array() {
        let roster = Roster::from_ids([uid(5), uid(6)]);
        assert_eq!(serde_json::to_string(&roster).unwrap(), "[5,6]");
        let back: Roster = serde_json::from_str("[5,6]").unwrap();
        assert_eq!(back, roster);
    }
}
