//! SignalEnd entity - one directional endpoint of a signal on a device

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Direction, InterlockSpec, LinkStatus};

/// One directional endpoint of a signal
///
/// References its Signal by id, never owns it. `text` is the formatted
/// display string (see `value_objects::link_text`); it is derived from the
/// structured state but persisted for compatibility. `test_block` is
/// meaningful only on OUT ends, `interlocks` only on IN ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalEnd {
    pub signal_id: String,
    pub direction: Direction,
    pub text: String,
    pub status: LinkStatus,
    #[serde(default)]
    pub test_block: bool,
    #[serde(default)]
    pub interlocks: Option<InterlockSpec>,
}

impl SignalEnd {
    /// Create an IN end
    pub fn input(signal_id: impl Into<String>, text: impl Into<String>, status: LinkStatus) -> Self {
        Self {
            signal_id: signal_id.into(),
            direction: Direction::In,
            text: text.into(),
            status,
            test_block: false,
            interlocks: None,
        }
    }

    /// Create an OUT end
    pub fn output(signal_id: impl Into<String>, text: impl Into<String>, status: LinkStatus) -> Self {
        Self {
            signal_id: signal_id.into(),
            direction: Direction::Out,
            text: text.into(),
            status,
            test_block: false,
            interlocks: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }
}
