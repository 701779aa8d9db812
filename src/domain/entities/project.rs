//! Project entity - the root aggregate

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{BaylineError, BaylineResult};

use super::{Bay, SignalTemplate};

/// Canvas layout carried per bay
///
/// Collaborator data owned by the rendering layer; the core only stores it
/// and offsets device positions during bay replication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasLayout {
    pub bay_id: String,
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    #[serde(default)]
    pub device_positions: BTreeMap<String, DevicePosition>,
}

/// Canvas coordinates for one device
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DevicePosition {
    pub x: f64,
    pub y: f64,
}

impl CanvasLayout {
    pub fn new(bay_id: impl Into<String>) -> Self {
        Self {
            bay_id: bay_id.into(),
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            device_positions: BTreeMap::new(),
        }
    }
}

/// The loaded project: keyed bays plus layout and template collaborator data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub schema_version: String,
    pub name: String,
    #[serde(default)]
    pub bays: BTreeMap<String, Bay>,
    #[serde(default)]
    pub canvases: BTreeMap<String, CanvasLayout>,
    #[serde(default)]
    pub templates: Vec<SignalTemplate>,
}

impl Project {
    pub fn new(schema_version: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema_version: schema_version.into(),
            name: name.into(),
            bays: BTreeMap::new(),
            canvases: BTreeMap::new(),
            templates: Vec::new(),
        }
    }

    pub fn bay(&self, bay_id: &str) -> BaylineResult<&Bay> {
        self.bays.get(bay_id).ok_or_else(|| BaylineError::BayNotFound {
            bay_id: bay_id.to_string(),
        })
    }

    pub fn bay_mut(&mut self, bay_id: &str) -> BaylineResult<&mut Bay> {
        self.bays.get_mut(bay_id).ok_or(BaylineError::BayNotFound {
            bay_id: bay_id.to_string(),
        })
    }
}
