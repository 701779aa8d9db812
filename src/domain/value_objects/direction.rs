//! Direction value object - which way a signal endpoint faces
//!
//! An OUT end emits the signal from its device; an IN end receives it.

use serde::{Deserialize, Serialize};

/// Direction of a signal endpoint on a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Receiving end
    In,
    /// Emitting end
    Out,
}

impl Direction {
    /// Returns true if this is a receiving end
    pub fn is_in(&self) -> bool {
        matches!(self, Direction::In)
    }

    /// Returns true if this is an emitting end
    pub fn is_out(&self) -> bool {
        matches!(self, Direction::Out)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::In => write!(f, "IN"),
            Direction::Out => write!(f, "OUT"),
        }
    }
}
