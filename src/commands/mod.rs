//! CLI command handlers
//!
//! Thin orchestration over the domain services: load the document, run the
//! operation, render the result, save when the operation mutates. Exit
//! codes bubble up as plain integers.

pub mod pending;
pub mod remove_signal;
pub mod replicate;
pub mod validate;

use std::path::PathBuf;

use anyhow::{bail, Result};
use is_terminal::IsTerminal;

use crate::config::Config;

/// Pick the project document: flag first, then config, then give up
pub fn resolve_project_path(flag: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    if let Some(path) = &config.project {
        return Ok(path.clone());
    }
    bail!("no project document given; pass --project or set `project` in bayline.toml");
}

/// Style output only when stdout is a real terminal
pub(crate) fn use_color() -> bool {
    std::io::stdout().is_terminal()
}
