//! The canonical default configuration.
//!
//! This is the merge target for schema reconciliation and the source of
//! truth for which indicator types, flags and flag nesting are valid. A
//! persisted document is always reshaped to match this structure.

use crate::types::{Configuration, Flag, IocDefinition, IocType};

/// Current definition schema version, stored on every entry.
pub const DEFINITION_VERSION: u32 = 1;

impl Default for Configuration {
    fn default() -> Self {
        Configuration::from_entries([
            (IocType::Ip, default_ip_definition()),
            (IocType::Hash, default_hash_definition()),
            (IocType::Url, default_url_definition()),
        ])
    }
}

fn default_ip_definition() -> IocDefinition {
    IocDefinition {
        name: "IP Address".to_string(),
        active: true,
        flags: vec![Flag::with_sub_flags(
            "Copy IP",
            true,
            vec![Flag::new("Sanitise IP", true)],
        )],
        urls: vec![
            "https://www.virustotal.com/gui/ip-address/{ip}".to_string(),
            "https://www.abuseipdb.com/check/{ip}".to_string(),
        ],
        version: DEFINITION_VERSION,
    }
}

fn default_hash_definition() -> IocDefinition {
    IocDefinition {
        name: "File Hash".to_string(),
        active: true,
        flags: vec![Flag::new("Copy Hash", true)],
        urls: vec!["https://www.virustotal.com/gui/file/{hash}".to_string()],
        version: DEFINITION_VERSION,
    }
}

fn default_url_definition() -> IocDefinition {
    IocDefinition {
        name: "URL".to_string(),
        active: true,
        flags: vec![Flag::with_sub_flags(
            "Copy URL",
            true,
            vec![Flag::new("Sanitise URL", true)],
        )],
        urls: vec![
            "https://www.virustotal.com/gui/search/{encodedUrl}".to_string(),
            "https://urlscan.io/domain/{domain}".to_string(),
        ],
        version: DEFINITION_VERSION,
    }
}
