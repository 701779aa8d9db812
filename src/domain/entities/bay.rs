//! Bay entity - namespace grouping devices and their signal endpoints

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{BaylineError, BaylineResult};

use super::{Device, Signal};

/// A bay: keyed device container plus a per-bay projection of the signal
/// metadata its endpoints reference
///
/// The `signals` map is not a global registry; the same logical signal may
/// carry an independent record in every bay that references it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bay {
    pub bay_id: String,
    pub name: String,
    #[serde(default)]
    pub devices: BTreeMap<String, Device>,
    #[serde(default)]
    pub signals: BTreeMap<String, Signal>,
}

impl Bay {
    pub fn new(bay_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            bay_id: bay_id.into(),
            name: name.into(),
            devices: BTreeMap::new(),
            signals: BTreeMap::new(),
        }
    }

    /// Insert a device, rejecting duplicate ids
    pub fn insert_device(&mut self, device: Device) -> BaylineResult<()> {
        if self.devices.contains_key(&device.device_id) {
            return Err(BaylineError::DuplicateDeviceId {
                bay_id: self.bay_id.clone(),
                device_id: device.device_id.clone(),
            });
        }
        self.devices.insert(device.device_id.clone(), device);
        Ok(())
    }

    pub fn device(&self, device_id: &str) -> BaylineResult<&Device> {
        self.devices
            .get(device_id)
            .ok_or_else(|| BaylineError::DeviceNotFound {
                bay_id: self.bay_id.clone(),
                device_id: device_id.to_string(),
            })
    }

    pub fn device_mut(&mut self, device_id: &str) -> BaylineResult<&mut Device> {
        let bay_id = self.bay_id.clone();
        self.devices
            .get_mut(device_id)
            .ok_or(BaylineError::DeviceNotFound {
                bay_id,
                device_id: device_id.to_string(),
            })
    }

    /// Every distinct signal id referenced by any endpoint in the bay
    pub fn referenced_signal_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .devices
            .values()
            .flat_map(|d| d.endpoints().map(|e| e.signal_id.clone()))
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }
}
