//! Schema reconciliation of raw persisted documents.
//!
//! The persisted document can be stale (written by an older release),
//! corrupted, or partially typed. Reconciliation merges whatever is usable
//! into the shape of the default configuration and silently drops the rest;
//! it never fails.

use ioclens_classify::is_valid_url;
use ioclens_core::{Configuration, Flag, IocDefinition};
use serde_json::Value;
use tracing::debug;

/// Merge a raw persisted document against the canonical defaults.
///
/// Output guarantees:
/// - exactly the key set of `defaults` (unknown keys in `raw` are dropped);
/// - flag trees mirror the default shape, only `value` is taken from `raw`
///   and only when it is a boolean;
/// - every `urls` entry passes the URL validity rule (invalid entries are
///   dropped, not corrected);
/// - idempotent: reconciling an already-reconciled value is a no-op.
#[must_use]
pub fn reconcile(raw: &Value, defaults: &Configuration) -> Configuration {
    let raw_map = raw.as_object();
    if raw_map.is_none() && !raw.is_null() {
        debug!("persisted document is not an object, falling back to defaults");
    }

    Configuration::from_entries(defaults.iter().map(|(ty, default_def)| {
        let raw_def = raw_map.and_then(|m| m.get(ty.as_str()));
        (*ty, reconcile_definition(raw_def, default_def))
    }))
}

fn reconcile_definition(raw: Option<&Value>, default: &IocDefinition) -> IocDefinition {
    let Some(obj) = raw.and_then(Value::as_object) else {
        return default.clone();
    };

    IocDefinition {
        name: obj
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| default.name.clone()),
        active: obj
            .get("active")
            .and_then(Value::as_bool)
            .unwrap_or(default.active),
        flags: reconcile_flags(obj.get("flags").and_then(Value::as_array), &default.flags),
        urls: reconcile_urls(obj.get("urls").and_then(Value::as_array), &default.urls),
        version: obj
            .get("version")
            .and_then(Value::as_u64)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(default.version),
    }
}

/// Rebuild a flag level in the default shape. Raw flags are matched by name
/// (first match wins); unknown raw flags are dropped, missing ones filled
/// from the defaults.
fn reconcile_flags(raw: Option<&Vec<Value>>, defaults: &[Flag]) -> Vec<Flag> {
    defaults
        .iter()
        .map(|default_flag| {
            let raw_flag = raw.and_then(|arr| {
                arr.iter().find(|v| {
                    v.get("name").and_then(Value::as_str) == Some(default_flag.name.as_str())
                })
            });

            Flag {
                name: default_flag.name.clone(),
                value: raw_flag
                    .and_then(|v| v.get("value"))
                    .and_then(Value::as_bool)
                    .unwrap_or(default_flag.value),
                sub_flags: reconcile_flags(
                    raw_flag
                        .and_then(|v| v.get("subFlags"))
                        .and_then(Value::as_array),
                    &default_flag.sub_flags,
                ),
            }
        })
        .collect()
}

/// Keep the raw URL list when present, filtered down to entries that are
/// strings and pass the validity rule; keep stored order. Absent or
/// mistyped lists fall back to the defaults.
fn reconcile_urls(raw: Option<&Vec<Value>>, defaults: &[String]) -> Vec<String> {
    match raw {
        Some(entries) => entries
            .iter()
            .filter_map(Value::as_str)
            .filter(|candidate| is_valid_url(candidate))
            .map(str::to_owned)
            .collect(),
        None => defaults.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ioclens_core::{flag_value, IocType};
    use serde_json::json;

    #[test]
    fn test_empty_document_yields_defaults() {
        let defaults = Configuration::default();
        assert_eq!(reconcile(&json!({}), &defaults), defaults);
        assert_eq!(reconcile(&Value::Null, &defaults), defaults);
    }

    #[test]
    fn test_non_object_document_yields_defaults() {
        let defaults = Configuration::default();
        assert_eq!(reconcile(&json!("garbage"), &defaults), defaults);
        assert_eq!(reconcile(&json!([1, 2, 3]), &defaults), defaults);
    }

    #[test]
    fn test_unknown_keys_are_dropped() {
        let defaults = Configuration::default();
        let raw = json!({
            "domain": { "name": "Domain", "active": true, "flags": [], "urls": [], "version": 1 }
        });
        assert_eq!(reconcile(&raw, &defaults), defaults);
    }

    #[test]
    fn test_scalar_values_taken_from_raw() {
        let defaults = Configuration::default();
        let raw = json!({
            "hash": { "name": "Hashes", "active": false, "version": 3 }
        });

        let merged = reconcile(&raw, &defaults);
        let hash = merged.get(IocType::Hash).expect("hash definition");
        assert_eq!(hash.name, "Hashes");
        assert!(!hash.active);
        assert_eq!(hash.version, 3);
        // Absent fields fall back to defaults
        assert_eq!(hash.urls, defaults.get(IocType::Hash).expect("default hash").urls);
    }

    #[test]
    fn test_type_mismatched_scalars_fall_back_to_defaults() {
        let defaults = Configuration::default();
        let raw = json!({
            "ip": { "name": 42, "active": "yes", "version": "two" }
        });

        let merged = reconcile(&raw, &defaults);
        let ip = merged.get(IocType::Ip).expect("ip definition");
        let default_ip = defaults.get(IocType::Ip).expect("default ip");
        assert_eq!(ip.name, default_ip.name);
        assert_eq!(ip.active, default_ip.active);
        assert_eq!(ip.version, default_ip.version);
    }

    #[test]
    fn test_invalid_urls_dropped_in_order() {
        let defaults = Configuration::default();
        let raw = json!({
            "ip": {
                "urls": [
                    "https://first.example.com/{ip}",
                    "not a url",
                    "second.example.com/{ip}",
                    17
                ]
            }
        });

        let merged = reconcile(&raw, &defaults);
        assert_eq!(
            merged.get(IocType::Ip).expect("ip definition").urls,
            vec![
                "https://first.example.com/{ip}".to_string(),
                "second.example.com/{ip}".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_url_list_is_preserved() {
        let defaults = Configuration::default();
        let raw = json!({ "url": { "urls": [] } });

        let merged = reconcile(&raw, &defaults);
        assert!(merged.get(IocType::Url).expect("url definition").urls.is_empty());
    }

    #[test]
    fn test_flag_values_merge_by_name() {
        let defaults = Configuration::default();
        let raw = json!({
            "ip": {
                "flags": [
                    {
                        "name": "Copy IP",
                        "value": false,
                        "subFlags": [
                            { "name": "Sanitise IP", "value": false },
                            { "name": "Retired Flag", "value": true }
                        ]
                    }
                ]
            }
        });

        let merged = reconcile(&raw, &defaults);
        let flags = &merged.get(IocType::Ip).expect("ip definition").flags;
        assert_eq!(flag_value(flags, &["Copy IP"]), Some(false));
        assert_eq!(flag_value(flags, &["Copy IP", "Sanitise IP"]), Some(false));
        // Unknown flag dropped, shape mirrors the defaults
        assert_eq!(flag_value(flags, &["Copy IP", "Retired Flag"]), None);
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].sub_flags.len(), 1);
    }

    #[test]
    fn test_non_boolean_flag_value_falls_back() {
        let defaults = Configuration::default();
        let raw = json!({
            "ip": { "flags": [ { "name": "Copy IP", "value": "off" } ] }
        });

        let merged = reconcile(&raw, &defaults);
        let flags = &merged.get(IocType::Ip).expect("ip definition").flags;
        assert_eq!(flag_value(flags, &["Copy IP"]), Some(true));
    }

    #[test]
    fn test_missing_flags_filled_from_defaults() {
        let defaults = Configuration::default();
        let raw = json!({ "ip": { "flags": [] } });

        let merged = reconcile(&raw, &defaults);
        let flags = &merged.get(IocType::Ip).expect("ip definition").flags;
        assert_eq!(flag_value(flags, &["Copy IP", "Sanitise IP"]), Some(true));
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let defaults = Configuration::default();
        let raw = json!({
            "ip": {
                "name": "Addresses",
                "active": false,
                "flags": [ { "name": "Copy IP", "value": false } ],
                "urls": [ "https://first.example.com/{ip}", "broken url" ]
            },
            "retired": { "active": true }
        });

        let once = reconcile(&raw, &defaults);
        let raw_again = serde_json::to_value(&once).expect("serialize reconciled config");
        let twice = reconcile(&raw_again, &defaults);
        assert_eq!(once, twice);
    }
}
