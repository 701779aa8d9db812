//! `bayline remove-signal`

use std::path::Path;

use anyhow::Result;

use crate::domain::ports::{AlwaysConfirm, ConfirmationGate};
use crate::domain::services::link_service;
use crate::error::BaylineError;
use crate::infrastructure::confirm::PromptGate;
use crate::infrastructure::persistence;

/// Remove a signal behind the confirmation gate; returns the exit code
pub fn run(
    project_path: &Path,
    bay_id: &str,
    signal_id: &str,
    all_bays: bool,
    assume_yes: bool,
) -> Result<i32> {
    let mut project = persistence::load_project(project_path)?;

    let scope = if all_bays { "every bay" } else { bay_id };
    let prompt = format!("Delete signal '{signal_id}' and all its endpoints in {scope}?");
    let confirmed = if assume_yes {
        AlwaysConfirm.confirm(&prompt)
    } else {
        PromptGate.confirm(&prompt)
    };
    if !confirmed {
        return Err(BaylineError::Aborted.into());
    }

    if all_bays {
        link_service::remove_project(&mut project, signal_id)?;
    } else {
        let bay = project.bay_mut(bay_id)?;
        link_service::remove(bay, signal_id)?;
    }

    persistence::save_project(&project, project_path)?;
    println!("removed '{signal_id}'");
    Ok(0)
}
