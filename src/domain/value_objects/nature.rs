//! Nature value object - physical kind of a signal

use serde::{Deserialize, Serialize};

/// Physical nature of a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Nature {
    /// Binary state (trips, positions, alarms)
    #[default]
    Digital,
    /// Continuous measurement (currents, voltages)
    Analog,
}

impl std::fmt::Display for Nature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Nature::Digital => write!(f, "DIGITAL"),
            Nature::Analog => write!(f, "ANALOG"),
        }
    }
}
