//! Link status value object - whether an endpoint's counterpart is resolved
//!
//! A PENDING end is waiting for its opposite side to be created or recognized;
//! a CONFIRMED end has a counterpart that exists and agrees.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a signal endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LinkStatus {
    /// Both ends exist and agree
    #[default]
    Confirmed,
    /// The opposing endpoint is absent or unresolved
    Pending,
}

impl LinkStatus {
    /// Returns true if the endpoint is still unresolved
    pub fn is_pending(&self) -> bool {
        matches!(self, LinkStatus::Pending)
    }
}

impl std::fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkStatus::Confirmed => write!(f, "CONFIRMED"),
            LinkStatus::Pending => write!(f, "PENDING"),
        }
    }
}
