//! `bayline validate`

use std::path::Path;

use anyhow::Result;
use crossterm::style::Stylize;
use serde_json::json;

use crate::domain::services::validation_service::{validate_bay, Severity};
use crate::infrastructure::persistence;

use super::use_color;

/// Validate one bay or every bay; returns the process exit code
pub fn run(project_path: &Path, bay_filter: Option<&str>, strict: bool, json: bool) -> Result<i32> {
    let project = persistence::load_project(project_path)?;

    let mut findings = Vec::new();
    for bay in project.bays.values() {
        if let Some(filter) = bay_filter {
            if bay.bay_id != filter {
                continue;
            }
        }
        for advisory in validate_bay(bay) {
            findings.push((bay.bay_id.clone(), advisory));
        }
    }
    if let Some(filter) = bay_filter {
        if !project.bays.contains_key(filter) {
            anyhow::bail!("bay '{filter}' not found");
        }
    }

    let errors = findings
        .iter()
        .filter(|(_, a)| a.severity == Severity::Error)
        .count();
    let warnings = findings.len() - errors;

    if json {
        let items: Vec<_> = findings
            .iter()
            .map(|(bay_id, a)| {
                json!({
                    "bay": bay_id,
                    "severity": a.severity,
                    "message": a.message,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "findings": items,
                "errors": errors,
                "warnings": warnings,
            }))?
        );
    } else {
        for (bay_id, advisory) in &findings {
            let tag = advisory.severity.to_string();
            let tag = if use_color() {
                match advisory.severity {
                    Severity::Error => tag.red().bold().to_string(),
                    Severity::Warning => tag.yellow().to_string(),
                }
            } else {
                tag
            };
            println!("{tag} [{bay_id}] {}", advisory.message);
        }
        println!("{} error(s), {} warning(s)", errors, warnings);
    }

    let failed = errors > 0 || (strict && warnings > 0);
    Ok(if failed { 1 } else { 0 })
}
