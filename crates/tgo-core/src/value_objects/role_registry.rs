//! Role registry - the closed set of in-game roles a player can pick
//!
//! The registry is an immutable table built once at startup and shared by reference.
//! One role is distinguished as the default: it is allowed for every event regardless
//! of the organizer's allow-list and replaces any role a player may not take.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::DomainError;

/// Key of the default role in the standard registry
pub const DEFAULT_ROLE_KEY: &str = "assault";

/// A single role: machine key plus display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleEntry {
    pub key: String,
    pub label: String,
}

impl RoleEntry {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Immutable table of every known role, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRegistry {
    entries: Vec<RoleEntry>,
    default_key: String,
}

impl RoleRegistry {
    /// Build a registry from entries and the key of the default role
    ///
    /// # Errors
    /// Returns a validation error if keys repeat, a key is blank, or the default key is
    /// not among the entries.
    pub fn new(entries: Vec<RoleEntry>, default_key: impl Into<String>) -> Result<Self, DomainError> {
        let default_key = default_key.into();

        for (i, entry) in entries.iter().enumerate() {
            if entry.key.trim().is_empty() {
                return Err(DomainError::ValidationError("role key must not be blank".into()));
            }
            if entries[..i].iter().any(|e| e.key == entry.key) {
                return Err(DomainError::ValidationError(format!(
                    "duplicate role key: {}",
                    entry.key
                )));
            }
        }

        if !entries.iter().any(|e| e.key == default_key) {
            return Err(DomainError::ValidationError(format!(
                "default role {default_key} is not registered"
            )));
        }

        Ok(Self {
            entries,
            default_key,
        })
    }

    /// The standard airsoft role set
    pub fn standard() -> Self {
        let entries = [
            ("assault", "Assault"),
            ("sniper", "Sniper"),
            ("support", "Support"),
            ("medic", "Medic"),
            ("scout", "Scout"),
            ("engineer", "Engineer"),
            ("commander", "Commander"),
            ("gunner", "Gunner"),
            ("marksman", "Marksman"),
        ]
        .into_iter()
        .map(|(key, label)| RoleEntry::new(key, label))
        .collect();

        Self {
            entries,
            default_key: DEFAULT_ROLE_KEY.to_string(),
        }
    }

    /// Check if a key names a registered role
    #[inline]
    pub fn is_valid_role(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// Display label for a key, if registered
    pub fn label(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.label.as_str())
    }

    /// Key of the default role
    #[inline]
    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    /// The default role entry
    pub fn default_role(&self) -> &RoleEntry {
        self.entries
            .iter()
            .find(|e| e.key == self.default_key)
            .unwrap_or(&self.entries[0])
    }

    /// All registered roles, in registry order
    pub fn entries(&self) -> &[RoleEntry] {
        &self.entries
    }

    /// Every role is allowed (event without an allow-list)
    pub fn all(&self) -> AllowedRoles {
        AllowedRoles {
            entries: self.entries.clone(),
            default_key: self.default_key.clone(),
        }
    }

    /// Intersect a stored allow-list with the registry
    ///
    /// The default role comes first, followed by the listed roles in stored order.
    /// Unknown keys and repeats are dropped.
    pub fn restrict<S: AsRef<str>>(&self, allow_list: &[S]) -> AllowedRoles {
        let mut entries = vec![self.default_role().clone()];
        for key in allow_list {
            let key = key.as_ref();
            if entries.iter().any(|e| e.key == key) {
                continue;
            }
            if let Some(entry) = self.entries.iter().find(|e| e.key == key) {
                entries.push(entry.clone());
            }
        }

        AllowedRoles {
            entries,
            default_key: self.default_key.clone(),
        }
    }

    /// Normalize an organizer-submitted allow-list before it is persisted
    ///
    /// Keeps valid keys in submitted order without repeats and appends the default role
    /// when it is missing.
    pub fn normalize_allow_list<S: AsRef<str>>(&self, roles: &[S]) -> Vec<String> {
        let mut result: Vec<String> = Vec::with_capacity(roles.len() + 1);
        for key in roles {
            let key = key.as_ref().trim();
            if self.is_valid_role(key) && !result.iter().any(|k| k == key) {
                result.push(key.to_string());
            }
        }
        if !result.iter().any(|k| *k == self.default_key) {
            result.push(self.default_key.clone());
        }
        result
    }
}

impl Default for RoleRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Ordered role-key to label mapping permitted for one event
///
/// Always contains the default role. Serializes as a JSON object in entry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedRoles {
    entries: Vec<RoleEntry>,
    default_key: String,
}

impl AllowedRoles {
    /// Check if a role may be taken for this event
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// Label of an allowed role
    pub fn label(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.label.as_str())
    }

    /// Label of a role, or the default role's label when it is not allowed
    pub fn label_or_default(&self, key: &str) -> &str {
        self.label(key)
            .or_else(|| self.label(&self.default_key))
            .unwrap_or(self.default_key.as_str())
    }

    /// The submitted role if allowed, otherwise the default role
    pub fn clamp<'a>(&'a self, key: &'a str) -> &'a str {
        if self.contains(key) {
            key
        } else {
            &self.default_key
        }
    }

    /// Key of the default role
    #[inline]
    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    /// Allowed keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Allowed entries in order
    pub fn iter(&self) -> impl Iterator<Item = &RoleEntry> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for AllowedRoles {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, &entry.label)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry() {
        let registry = RoleRegistry::standard();
        assert_eq!(registry.default_key(), "assault");
        assert_eq!(registry.default_role().label, "Assault");
        assert_eq!(registry.entries().len(), 9);
        assert!(registry.is_valid_role("marksman"));
        assert!(!registry.is_valid_role("pilot"));
        assert_eq!(registry.label("medic"), Some("Medic"));
    }

    #[test]
    fn test_new_rejects_missing_default() {
        let result = RoleRegistry::new(vec![RoleEntry::new("sniper", "Sniper")], "assault");
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let result = RoleRegistry::new(
            vec![
                RoleEntry::new("assault", "Assault"),
                RoleEntry::new("assault", "Again"),
            ],
            "assault",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_restrict_puts_default_first() {
        let registry = RoleRegistry::standard();
        let allowed = registry.restrict(&["sniper", "medic"]);
        let keys: Vec<&str> = allowed.keys().collect();
        assert_eq!(keys, vec!["assault", "sniper", "medic"]);
    }

    #[test]
    fn test_restrict_drops_unknown_and_repeats() {
        let registry = RoleRegistry::standard();
        let allowed = registry.restrict(&["pilot", "sniper", "sniper", "assault"]);
        let keys: Vec<&str> = allowed.keys().collect();
        assert_eq!(keys, vec!["assault", "sniper"]);
    }

    #[test]
    fn test_normalize_allow_list() {
        let registry = RoleRegistry::standard();
        assert_eq!(
            registry.normalize_allow_list(&["medic", "bogus", "medic"]),
            vec!["medic".to_string(), "assault".to_string()]
        );
        let empty: [&str; 0] = [];
        assert_eq!(registry.normalize_allow_list(&empty), vec!["assault".to_string()]);

        let once = registry.normalize_allow_list(&["scout", "assault"]);
        let twice = registry.normalize_allow_list(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_clamp_and_labels() {
        let registry = RoleRegistry::standard();
        let allowed = registry.restrict(&["sniper"]);
        assert_eq!(allowed.clamp("sniper"), "sniper");
        assert_eq!(allowed.clamp("commander"), "assault");
        assert_eq!(allowed.label_or_default("commander"), "Assault");
        assert_eq!(allowed.label_or_default("sniper"), "Sniper");
    }

    #[test]
    fn test_serialize_keeps_order() {
        let registry = RoleRegistry::standard();
        let allowed = registry.restrict(&["sniper", "medic"]);
        let json = serde_json::to_string(&allowed).unwrap();
        assert_eq!(json, r#"{"assault":"Assault","sniper":"Sniper","medic":"Medic"}"#);
    }
}
