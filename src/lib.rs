//! Bayline - signal wiring and link-consistency engine
//!
//! Bayline tracks directional signal links between devices grouped into
//! bays: which device emits a signal, which receives it, whether the link is
//! resolved or pending, and the per-endpoint annotations (test blocks,
//! interlocks). The domain services keep the denormalized link graph and
//! its display texts consistent under creation, recognition, retargeting,
//! renaming, removal, duplication, and whole-bay replication.

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{Bay, CanvasLayout, Device, Project, Signal, SignalEnd, SignalTemplate};
pub use domain::services::{
    device_service, idgen, interlock_service, link_service, pending_service, rename_service,
    replication_service, validation_service,
};
pub use domain::value_objects::{
    Direction, InterlockItem, InterlockMode, InterlockSpec, LinkStatus, Nature,
};
pub use error::{BaylineError, BaylineResult};
pub use infrastructure::persistence::{from_json, load_project, save_project, to_json};
