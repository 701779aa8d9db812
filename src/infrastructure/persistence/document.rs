//! Project document DTOs
//!
//! The persisted JSON schema, kept separate from the domain entities so the
//! file format can stay stable while the in-memory model evolves. The
//! boundary enforces endpoint exclusivity: inputs always serialize with
//! `test_block: false`, outputs always with `interlocks: []`, and legacy
//! interlock shorthand (a bare array of relay-tag strings) is accepted on
//! load.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::{
    Bay, CanvasLayout, Device, DevicePosition, Project, Signal, SignalEnd, SignalTemplate,
};
use crate::domain::services::interlock_service;
use crate::domain::value_objects::{Direction, LinkStatus, Nature};
use crate::error::BaylineResult;

fn default_schema_version() -> String {
    "1.0.0".to_string()
}

fn default_project_name() -> String {
    "Proyecto".to_string()
}

fn default_zoom() -> f64 {
    1.0
}

/// Root of the persisted document
#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectDocument {
    #[serde(default)]
    pub meta: MetaDto,
    #[serde(default)]
    pub project: BodyDto,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MetaDto {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    #[serde(default = "default_project_name")]
    pub name: String,
}

impl Default for MetaDto {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            name: default_project_name(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BodyDto {
    #[serde(default)]
    pub bays: Vec<BayDto>,
    #[serde(default)]
    pub signals: Vec<SignalDto>,
    #[serde(default)]
    pub devices: Vec<DeviceDto>,
    #[serde(default)]
    pub canvases: Vec<CanvasDto>,
    #[serde(default)]
    pub templates: Vec<SignalTemplate>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BayDto {
    pub bay_id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SignalDto {
    pub signal_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nature: Nature,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeviceDto {
    pub device_id: String,
    pub bay_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub dev_type: String,
    #[serde(default)]
    pub inputs: Vec<EndpointDto>,
    #[serde(default)]
    pub outputs: Vec<EndpointDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EndpointDto {
    pub signal_id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub status: LinkStatus,
    #[serde(default)]
    pub test_block: bool,
    #[serde(default)]
    pub interlocks: Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CanvasDto {
    pub bay_id: String,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(default)]
    pub pan: PanDto,
    #[serde(default)]
    pub device_positions: BTreeMap<String, DevicePosition>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PanDto {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl ProjectDocument {
    /// Flatten a project into document shape
    pub fn from_project(project: &Project) -> Self {
        let mut body = BodyDto::default();

        for bay in project.bays.values() {
            body.bays.push(BayDto {
                bay_id: bay.bay_id.clone(),
                name: bay.name.clone(),
            });
        }

        body.templates = project.templates.clone();

        // per-bay signal records deduplicate into one flat list
        let mut seen = std::collections::BTreeSet::new();
        for bay in project.bays.values() {
            for signal in bay.signals.values() {
                if !seen.insert(signal.signal_id.clone()) {
                    continue;
                }
                body.signals.push(SignalDto {
                    signal_id: signal.signal_id.clone(),
                    name: signal.name.clone(),
                    nature: signal.nature,
                    description: signal.description.clone(),
                });
            }
        }

        for bay in project.bays.values() {
            for device in bay.devices.values() {
                body.devices.push(DeviceDto {
                    device_id: device.device_id.clone(),
                    bay_id: device.bay_id.clone(),
                    name: device.name.clone(),
                    dev_type: device.dev_type.clone(),
                    inputs: device
                        .inputs
                        .iter()
                        .map(|end| EndpointDto {
                            signal_id: end.signal_id.clone(),
                            text: end.text.clone(),
                            status: end.status,
                            // never meaningful on inputs
                            test_block: false,
                            interlocks: interlock_service::serialize(end.interlocks.as_ref()),
                        })
                        .collect(),
                    outputs: device
                        .outputs
                        .iter()
                        .map(|end| EndpointDto {
                            signal_id: end.signal_id.clone(),
                            text: end.text.clone(),
                            status: end.status,
                            test_block: end.test_block,
                            // never meaningful on outputs
                            interlocks: Value::Array(Vec::new()),
                        })
                        .collect(),
                });
            }
        }

        for (bay_id, layout) in &project.canvases {
            body.canvases.push(CanvasDto {
                bay_id: bay_id.clone(),
                zoom: layout.zoom,
                pan: PanDto {
                    x: layout.pan_x,
                    y: layout.pan_y,
                },
                device_positions: layout.device_positions.clone(),
            });
        }

        Self {
            meta: MetaDto {
                schema_version: project.schema_version.clone(),
                name: project.name.clone(),
            },
            project: body,
        }
    }

    /// Rebuild the domain aggregate from document shape
    ///
    /// Devices referencing an unlisted bay create it, and each bay's signal
    /// map is re-projected from the signals its endpoints actually use.
    pub fn into_project(self) -> BaylineResult<Project> {
        let mut project = Project::new(self.meta.schema_version, self.meta.name);

        for bay in self.project.bays {
            let name = if bay.name.is_empty() {
                bay.bay_id.clone()
            } else {
                bay.name
            };
            project
                .bays
                .insert(bay.bay_id.clone(), Bay::new(bay.bay_id, name));
        }

        project.templates = self.project.templates;

        let mut signals_by_id: BTreeMap<String, Signal> = BTreeMap::new();
        for dto in self.project.signals {
            let name = if dto.name.is_empty() {
                dto.signal_id.clone()
            } else {
                dto.name
            };
            let mut signal = Signal::new(&dto.signal_id, name, dto.nature);
            signal.description = dto.description;
            signals_by_id.insert(dto.signal_id, signal);
        }

        for dto in self.project.devices {
            let name = if dto.name.is_empty() {
                dto.device_id.clone()
            } else {
                dto.name
            };
            let dev_type = if dto.dev_type.is_empty() {
                "IED".to_string()
            } else {
                dto.dev_type
            };
            let mut device = Device::new(&dto.device_id, &dto.bay_id, name, dev_type);

            for end in dto.inputs {
                device.inputs.push(SignalEnd {
                    signal_id: end.signal_id,
                    direction: Direction::In,
                    text: end.text,
                    status: end.status,
                    test_block: false,
                    interlocks: interlock_service::normalize(&end.interlocks),
                });
            }
            for end in dto.outputs {
                device.outputs.push(SignalEnd {
                    signal_id: end.signal_id,
                    direction: Direction::Out,
                    text: end.text,
                    status: end.status,
                    test_block: end.test_block,
                    interlocks: None,
                });
            }

            let bay = project
                .bays
                .entry(dto.bay_id.clone())
                .or_insert_with(|| Bay::new(&dto.bay_id, &dto.bay_id));
            bay.insert_device(device)?;
        }

        // project each bay's signal map from actual endpoint usage
        for bay in project.bays.values_mut() {
            for signal_id in bay.referenced_signal_ids() {
                if let Some(signal) = signals_by_id.get(&signal_id) {
                    bay.signals.insert(signal_id, signal.clone());
                }
            }
        }

        for dto in self.project.canvases {
            let mut layout = CanvasLayout::new(&dto.bay_id);
            layout.zoom = dto.zoom;
            layout.pan_x = dto.pan.x;
            layout.pan_y = dto.pan.y;
            layout.device_positions = dto.device_positions;
            project.canvases.insert(dto.bay_id, layout);
        }

        Ok(project)
    }
}
