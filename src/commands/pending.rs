//! `bayline pending`

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use crate::domain::services::pending_service::{count_pending_for_bay, count_pending_for_device};
use crate::infrastructure::persistence;

/// Report pending endpoint counters; returns the process exit code
pub fn run(project_path: &Path, bay_filter: Option<&str>, json: bool) -> Result<i32> {
    let project = persistence::load_project(project_path)?;

    if let Some(filter) = bay_filter {
        if !project.bays.contains_key(filter) {
            anyhow::bail!("bay '{filter}' not found");
        }
    }

    let mut report = Vec::new();
    for bay in project.bays.values() {
        if let Some(filter) = bay_filter {
            if bay.bay_id != filter {
                continue;
            }
        }
        let totals = count_pending_for_bay(bay);
        let devices: Vec<_> = bay
            .devices
            .values()
            .map(|d| (d.device_id.clone(), d.name.clone(), count_pending_for_device(d)))
            .collect();
        report.push((bay.bay_id.clone(), bay.name.clone(), totals, devices));
    }

    if json {
        let items: Vec<_> = report
            .iter()
            .map(|(bay_id, name, totals, devices)| {
                json!({
                    "bay": bay_id,
                    "name": name,
                    "in_pending": totals.in_pending,
                    "out_pending": totals.out_pending,
                    "total": totals.total(),
                    "devices": devices
                        .iter()
                        .map(|(id, name, c)| json!({
                            "device": id,
                            "name": name,
                            "in_pending": c.in_pending,
                            "out_pending": c.out_pending,
                        }))
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for (bay_id, name, totals, devices) in &report {
            println!(
                "{bay_id} ({name}): {} pending ({} in, {} out)",
                totals.total(),
                totals.in_pending,
                totals.out_pending
            );
            for (device_id, device_name, counts) in devices {
                if counts.is_clear() {
                    continue;
                }
                println!(
                    "  {device_id} ({device_name}): {} in, {} out",
                    counts.in_pending, counts.out_pending
                );
            }
        }
    }
    Ok(0)
}
