//! Structural validation
//!
//! Read-only advisories over a bay's endpoint graph. Validation never
//! mutates, never fails, and never blocks an operation; callers decide what
//! to do with the findings.

use crate::domain::entities::Bay;

/// Advisory severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "WARNING"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// One structural finding
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Advisory {
    pub severity: Severity,
    pub message: String,
}

impl Advisory {
    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Check one signal's endpoint structure within a bay
pub fn validate_signal(bay: &Bay, signal_id: &str) -> Vec<Advisory> {
    let mut ins = Vec::new();
    let mut outs = Vec::new();
    for device in bay.devices.values() {
        ins.extend(device.inputs.iter().filter(|e| e.signal_id == signal_id));
        outs.extend(device.outputs.iter().filter(|e| e.signal_id == signal_id));
    }

    let mut issues = Vec::new();
    if !outs.is_empty() && ins.is_empty() {
        if outs.iter().all(|e| e.is_pending()) {
            issues.push(Advisory::warning(
                "pending output without a mirrored input (not yet recognized)",
            ));
        } else {
            issues.push(Advisory::warning("output without an associated input"));
        }
    }
    if !ins.is_empty() && outs.is_empty() {
        issues.push(Advisory::error(
            "input without an associated output (inconsistency)",
        ));
    }

    for device in bay.devices.values() {
        if has_duplicate(device.inputs.iter().map(|e| e.signal_id.as_str())) {
            issues.push(Advisory::error(format!(
                "duplicate signal id in inputs of {}",
                device.name
            )));
        }
        if has_duplicate(device.outputs.iter().map(|e| e.signal_id.as_str())) {
            issues.push(Advisory::error(format!(
                "duplicate signal id in outputs of {}",
                device.name
            )));
        }
    }
    issues
}

/// Check a whole bay: one warning per pending endpoint, then every distinct
/// referenced signal folded through [`validate_signal`]
pub fn validate_bay(bay: &Bay) -> Vec<Advisory> {
    let mut issues = Vec::new();
    for device in bay.devices.values() {
        for end in device.endpoints() {
            if end.is_pending() {
                issues.push(Advisory::warning(format!(
                    "pending: {} ({}) -> {}",
                    device.name, end.direction, end.text
                )));
            }
        }
    }
    for signal_id in bay.referenced_signal_ids() {
        for advisory in validate_signal(bay, &signal_id) {
            issues.push(Advisory {
                severity: advisory.severity,
                message: format!("{signal_id}: {}", advisory.message),
            });
        }
    }
    issues
}

fn has_duplicate<'a>(ids: impl Iterator<Item = &'a str>) -> bool {
    let mut seen = std::collections::BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return true;
        }
    }
    false
}
