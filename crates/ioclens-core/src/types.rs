//! Shared types used across the ioclens application.
//!
//! This module defines the domain model for indicator classification and
//! per-type user preferences.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The fixed set of indicator types the classifier can produce.
///
/// The classifier's pattern table is fixed to these variants; everything
/// downstream (reconciliation, persistence, menu registration) iterates the
/// configured key set instead of hardcoding them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IocType {
    /// IPv4 or IPv6 address
    Ip,
    /// MD5, SHA-1 or SHA-256 file hash
    Hash,
    /// HTTP(S) URL, with or without scheme
    Url,
}

impl IocType {
    /// All indicator types, in classification precedence order.
    pub const ALL: [IocType; 3] = [IocType::Ip, IocType::Hash, IocType::Url];

    /// The persisted key for this type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            IocType::Ip => "ip",
            IocType::Hash => "hash",
            IocType::Url => "url",
        }
    }

    /// Parse a persisted key back into an indicator type.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ip" => Some(IocType::Ip),
            "hash" => Some(IocType::Hash),
            "url" => Some(IocType::Url),
            _ => None,
        }
    }
}

impl fmt::Display for IocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One user-togglable option, possibly with nested child options.
///
/// Flags form a tree owned by their [`IocDefinition`]. Sibling names are not
/// guaranteed unique; lookup takes the first match in insertion order (see
/// [`crate::flags::flag_value`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    /// Display name, also the lookup key within its sibling level
    pub name: String,
    /// Whether the option is enabled
    pub value: bool,
    /// Child options, only consulted when this flag is on the lookup path
    #[serde(rename = "subFlags", default, skip_serializing_if = "Vec::is_empty")]
    pub sub_flags: Vec<Flag>,
}

impl Flag {
    /// Create a leaf flag with no children.
    #[must_use]
    pub fn new(name: impl Into<String>, value: bool) -> Self {
        Self {
            name: name.into(),
            value,
            sub_flags: Vec::new(),
        }
    }

    /// Create a flag with child flags.
    #[must_use]
    pub fn with_sub_flags(name: impl Into<String>, value: bool, sub_flags: Vec<Flag>) -> Self {
        Self {
            name: name.into(),
            value,
            sub_flags,
        }
    }
}

/// Per-indicator-type preferences: display name, activation, option flags
/// and lookup URL templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IocDefinition {
    /// Human-readable name shown in menus
    pub name: String,
    /// Whether this indicator type participates in investigation at all
    pub active: bool,
    /// Option flag tree (copy behavior, sanitisation)
    pub flags: Vec<Flag>,
    /// Lookup URL templates, processed in stored order
    pub urls: Vec<String>,
    /// Schema version carried through persistence. No migration logic
    /// consumes this yet; it is inert metadata.
    pub version: u32,
}

/// The full user configuration: one [`IocDefinition`] per [`IocType`].
///
/// The default value (see [`crate::defaults`]) is the canonical schema that
/// reconciliation merges persisted documents against; every key present here
/// is also present in the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration(BTreeMap<IocType, IocDefinition>);

impl Configuration {
    /// Build a configuration from explicit entries.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (IocType, IocDefinition)>) -> Self {
        Self(entries.into_iter().collect())
    }

    /// Get the definition for an indicator type.
    #[must_use]
    pub fn get(&self, ioc_type: IocType) -> Option<&IocDefinition> {
        self.0.get(&ioc_type)
    }

    /// Get a mutable definition for an indicator type.
    pub fn get_mut(&mut self, ioc_type: IocType) -> Option<&mut IocDefinition> {
        self.0.get_mut(&ioc_type)
    }

    /// Iterate all entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&IocType, &IocDefinition)> {
        self.0.iter()
    }

    /// The set of currently active indicator types, in key order.
    #[must_use]
    pub fn active_types(&self) -> Vec<IocType> {
        self.0
            .iter()
            .filter(|(_, def)| def.active)
            .map(|(ty, _)| *ty)
            .collect()
    }

    /// Number of configured indicator types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no indicator types are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ioc_type_round_trip() {
        for ty in IocType::ALL {
            assert_eq!(IocType::from_key(ty.as_str()), Some(ty));
        }
        assert_eq!(IocType::from_key("domain"), None);
    }

    #[test]
    fn test_ioc_type_serde_key() {
        let json = serde_json::to_string(&IocType::Hash).expect("serialize ioc type");
        assert_eq!(json, "\"hash\"");
    }

    #[test]
    fn test_flag_sub_flags_serde_name() {
        let flag = Flag::with_sub_flags("Copy IP", true, vec![Flag::new("Sanitise IP", true)]);
        let json = serde_json::to_value(&flag).expect("serialize flag");
        assert!(json.get("subFlags").is_some());

        let parsed: Flag = serde_json::from_value(json).expect("parse flag");
        assert_eq!(parsed, flag);
    }

    #[test]
    fn test_flag_missing_sub_flags_is_empty() {
        let parsed: Flag = serde_json::from_str(r#"{"name": "Copy Hash", "value": false}"#)
            .expect("parse flag without subFlags");
        assert!(parsed.sub_flags.is_empty());
    }

    #[test]
    fn test_active_types() {
        let mut config = Configuration::default();
        assert_eq!(config.active_types(), vec![IocType::Ip, IocType::Hash, IocType::Url]);

        config
            .get_mut(IocType::Hash)
            .expect("hash definition exists")
            .active = false;
        assert_eq!(config.active_types(), vec![IocType::Ip, IocType::Url]);
    }

    #[test]
    fn test_configuration_json_shape() {
        let config = Configuration::default();
        let json = serde_json::to_value(&config).expect("serialize configuration");
        let map = json.as_object().expect("configuration serializes to object");
        assert!(map.contains_key("ip"));
        assert!(map.contains_key("hash"));
        assert!(map.contains_key("url"));
    }
}
