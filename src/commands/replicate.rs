//! `bayline replicate`

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use crate::config::ReplicateConfig;
use crate::domain::services::idgen;
use crate::domain::services::replication_service::{replicate_bay, ReplicateOptions};
use crate::infrastructure::persistence;

pub struct ReplicateArgs<'a> {
    pub source: &'a str,
    pub name: &'a str,
    pub src_token: &'a str,
    pub dst_token: &'a str,
    pub dx: Option<f64>,
    pub dy: Option<f64>,
    pub mask_external: bool,
    pub output: Option<&'a Path>,
}

/// Replicate a bay and save; returns the process exit code
pub fn run(
    project_path: &Path,
    defaults: &ReplicateConfig,
    args: ReplicateArgs<'_>,
    json: bool,
) -> Result<i32> {
    let mut project = persistence::load_project(project_path)?;

    let options = ReplicateOptions {
        new_bay_name: args.name.to_string(),
        copy_signals: true,
        dx: args.dx.unwrap_or(defaults.dx),
        dy: args.dy.unwrap_or(defaults.dy),
        src_token: args.src_token.to_string(),
        dst_token: args.dst_token.to_string(),
        apply_to_external: if args.mask_external {
            false
        } else {
            defaults.keep_external_names
        },
    };

    let candidate_id = idgen::next_bay_id(&project);
    let new_bay_id = replicate_bay(&mut project, args.source, &candidate_id, &options)?;

    let out_path = args.output.unwrap_or(project_path);
    persistence::save_project(&project, out_path)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "new_bay_id": new_bay_id,
                "name": args.name,
                "written_to": out_path,
            }))?
        );
    } else {
        println!(
            "replicated '{}' as {} ({}) -> {}",
            args.source,
            new_bay_id,
            args.name,
            out_path.display()
        );
    }
    Ok(0)
}
