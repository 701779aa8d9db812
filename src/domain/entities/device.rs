//! Device entity - equipment node exposing IN/OUT signal endpoints

use serde::{Deserialize, Serialize};

use super::SignalEnd;

/// A piece of equipment inside a bay
///
/// `device_id` never changes; `name` is mutable and echoed inline into every
/// endpoint text that references this device (see the rename service).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub device_id: String,
    pub bay_id: String,
    pub name: String,
    pub dev_type: String,
    #[serde(default)]
    pub inputs: Vec<SignalEnd>,
    #[serde(default)]
    pub outputs: Vec<SignalEnd>,
}

impl Device {
    pub fn new(
        device_id: impl Into<String>,
        bay_id: impl Into<String>,
        name: impl Into<String>,
        dev_type: impl Into<String>,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            bay_id: bay_id.into(),
            name: name.into(),
            dev_type: dev_type.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// All endpoints, inputs first
    pub fn endpoints(&self) -> impl Iterator<Item = &SignalEnd> {
        self.inputs.iter().chain(self.outputs.iter())
    }

    /// Drop every endpoint referencing the signal
    pub fn detach_signal(&mut self, signal_id: &str) {
        self.inputs.retain(|e| e.signal_id != signal_id);
        self.outputs.retain(|e| e.signal_id != signal_id);
    }
}
