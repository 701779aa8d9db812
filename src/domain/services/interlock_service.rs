//! Interlock normalization, validation, and serialization
//!
//! Interlocks cross the persistence boundary in two shapes: the structured
//! `{mode, items}` object and a legacy bare array of relay-tag strings. Both
//! normalize to the same `InterlockSpec`, and a spec with no usable items
//! normalizes to "no interlocks" (`None`), never to an empty object.

use serde_json::{json, Value};

use crate::domain::value_objects::{
    InterlockItem, InterlockMode, InterlockSpec, DEFAULT_INTERLOCK_CATEGORY,
};
use crate::error::{BaylineError, BaylineResult};

/// Normalize a raw JSON value into an interlock spec
///
/// Accepts `null`, a legacy `["86T2", ...]` array, or `{mode, items}` where
/// items may themselves be strings or objects. Items without a non-empty
/// `relay_tag` are dropped; an unknown mode coerces to AND.
pub fn normalize(raw: &Value) -> Option<InterlockSpec> {
    match raw {
        Value::Null => None,
        Value::Array(entries) => {
            let items: Vec<InterlockItem> = entries.iter().filter_map(item_from_value).collect();
            if items.is_empty() {
                None
            } else {
                Some(InterlockSpec::and(items))
            }
        }
        Value::Object(map) => {
            let mode = match map.get("mode").and_then(Value::as_str) {
                Some("OR") => InterlockMode::Or,
                _ => InterlockMode::And,
            };
            let items: Vec<InterlockItem> = map
                .get("items")
                .and_then(Value::as_array)
                .map(|entries| entries.iter().filter_map(item_from_value).collect())
                .unwrap_or_default();
            if items.is_empty() {
                None
            } else {
                Some(InterlockSpec { mode, items })
            }
        }
        _ => None,
    }
}

fn item_from_value(value: &Value) -> Option<InterlockItem> {
    match value {
        Value::String(tag) => {
            let tag = tag.trim();
            if tag.is_empty() {
                None
            } else {
                Some(InterlockItem::new(tag))
            }
        }
        Value::Object(map) => {
            let relay_tag = map
                .get("relay_tag")
                .and_then(Value::as_str)
                .unwrap_or("")
                .trim()
                .to_string();
            if relay_tag.is_empty() {
                return None;
            }
            Some(InterlockItem {
                relay_tag,
                category: map
                    .get("category")
                    .and_then(Value::as_str)
                    .unwrap_or(DEFAULT_INTERLOCK_CATEGORY)
                    .to_string(),
                source_device_id: map
                    .get("source_device_id")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                source_signal_id: map
                    .get("source_signal_id")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            })
        }
        _ => None,
    }
}

/// Serialize for the project document: `{mode, items}` or `[]` when empty
pub fn serialize(spec: Option<&InterlockSpec>) -> Value {
    match spec {
        Some(spec) if !spec.items.is_empty() => json!({
            "mode": spec.mode,
            "items": spec.items,
        }),
        _ => json!([]),
    }
}

/// The relay tags carried by a spec, in order
pub fn tags(spec: Option<&InterlockSpec>) -> Vec<String> {
    spec.map(|s| {
        s.items
            .iter()
            .map(|i| i.relay_tag.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// Domain validation: every item must carry a relay tag
pub fn validate(spec: Option<&InterlockSpec>) -> BaylineResult<()> {
    let Some(spec) = spec else { return Ok(()) };
    for (idx, item) in spec.items.iter().enumerate() {
        if item.relay_tag.trim().is_empty() {
            return Err(BaylineError::InvalidInterlock { position: idx + 1 });
        }
    }
    Ok(())
}
