//! Interlock annotation attached to IN endpoints
//!
//! An interlock records a relay that blocks the input (e.g. "86T2"). Items
//! combine under a boolean mode; today only AND (series) carries meaning,
//! OR (parallel) is accepted and round-tripped for forward compatibility.

use serde::{Deserialize, Serialize};

/// Default category assigned to interlock items
pub const DEFAULT_INTERLOCK_CATEGORY: &str = "Bloqueos";

/// Boolean combination mode for interlock items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum InterlockMode {
    /// Series: every relay must clear
    #[default]
    And,
    /// Parallel: reserved, no distinct behavior yet
    Or,
}

/// One blocking condition applied to an input
///
/// `source_device_id`/`source_signal_id` are unused today, reserved for a
/// future logic-diagram cross-reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterlockItem {
    /// Tag of the blocking relay (required, e.g. "86T2")
    pub relay_tag: String,
    /// Grouping label
    pub category: String,
    pub source_device_id: Option<String>,
    pub source_signal_id: Option<String>,
}

impl InterlockItem {
    /// Create an item with the default category
    pub fn new(relay_tag: impl Into<String>) -> Self {
        Self {
            relay_tag: relay_tag.into(),
            category: DEFAULT_INTERLOCK_CATEGORY.to_string(),
            source_device_id: None,
            source_signal_id: None,
        }
    }
}

/// Ordered interlock items combined under one mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterlockSpec {
    pub mode: InterlockMode,
    pub items: Vec<InterlockItem>,
}

impl InterlockSpec {
    /// Create an AND spec over the given items
    pub fn and(items: Vec<InterlockItem>) -> Self {
        Self {
            mode: InterlockMode::And,
            items,
        }
    }
}
