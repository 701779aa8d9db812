//! Persistence
//!
//! JSON project documents on disk. The file format is an interface: the
//! domain never sees DTOs, and the DTOs never carry domain logic.

mod document;

use std::path::Path;

use crate::domain::entities::Project;
use crate::error::BaylineResult;

pub use document::ProjectDocument;

/// Load a project document from disk
pub fn load_project(path: &Path) -> BaylineResult<Project> {
    let raw = std::fs::read_to_string(path)?;
    from_json(&raw)
}

/// Save a project document to disk, pretty-printed
pub fn save_project(project: &Project, path: &Path) -> BaylineResult<()> {
    std::fs::write(path, to_json(project)?)?;
    Ok(())
}

/// Parse a project from document JSON
pub fn from_json(raw: &str) -> BaylineResult<Project> {
    let document: ProjectDocument = serde_json::from_str(raw)?;
    document.into_project()
}

/// Render a project as document JSON
pub fn to_json(project: &Project) -> BaylineResult<String> {
    let document = ProjectDocument::from_project(project);
    Ok(serde_json::to_string_pretty(&document)?)
}
