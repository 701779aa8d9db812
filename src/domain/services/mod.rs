//! Domain Services
//!
//! All mutation of the project graph goes through these modules; the
//! presentation layer never edits entities directly. Services are free
//! functions over explicitly passed entities, with no I/O and no ambient
//! state.

pub mod device_service;
pub mod idgen;
pub mod interlock_service;
pub mod link_service;
pub mod pending_service;
pub mod rename_service;
pub mod replication_service;
pub mod validation_service;
