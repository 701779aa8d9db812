//! Signal entity - one named logical relationship
//!
//! A Signal is identified by a stable `signal_id`; its display name is
//! mutable and echoed into every endpoint text that references it.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Nature;

/// A named logical signal relationship
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    /// Unique, stable identifier
    pub signal_id: String,
    /// Mutable display name
    pub name: String,
    pub nature: Nature,
    #[serde(default)]
    pub description: String,
}

impl Signal {
    pub fn new(signal_id: impl Into<String>, name: impl Into<String>, nature: Nature) -> Self {
        Self {
            signal_id: signal_id.into(),
            name: name.into(),
            nature,
            description: String::new(),
        }
    }
}

/// Reusable signal definition from the global template library
///
/// Templates seed new links in the authoring layer; the core only persists
/// them alongside the project document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalTemplate {
    pub code: String,
    pub label: String,
    #[serde(default)]
    pub nature: Nature,
    #[serde(default = "default_template_category")]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

fn default_template_category() -> String {
    "General".to_string()
}
