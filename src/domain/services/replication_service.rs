//! Whole-bay replication
//!
//! Clones a bay's devices, endpoint graph, and referenced signals into a new
//! bay, remapping every identity. Each logical source signal maps to exactly
//! one replacement signal no matter how many endpoints reference it
//! (sub-signal equivalence). Links that stay inside the replicated bay remain
//! CONFIRMED against the remapped device names; links to anything else are
//! reclassified PENDING.

use std::collections::BTreeMap;

use crate::domain::entities::{
    Bay, CanvasLayout, Device, DevicePosition, Project, Signal, SignalEnd,
};
use crate::domain::value_objects::link_text::{
    self, counterpart_name, EXTERNAL, KW_FROM, KW_TO, PENDING_MARK,
};
use crate::domain::value_objects::LinkStatus;
use crate::error::{BaylineError, BaylineResult};

use super::idgen;

/// Knobs for [`replicate_bay`]
#[derive(Debug, Clone)]
pub struct ReplicateOptions {
    /// Display name of the new bay
    pub new_bay_name: String,
    /// Clone the endpoint/signal graph, not just the devices
    pub copy_signals: bool,
    /// Canvas offset applied to every copied device position
    pub dx: f64,
    pub dy: f64,
    /// Literal token substituted case-insensitively in ids, names, and texts
    /// (e.g. "H1" -> "H2"). Empty tokens disable substitution.
    pub src_token: String,
    pub dst_token: String,
    /// Keep the original counterpart name on now-external links; when false
    /// they are re-pointed at EXTERNO instead
    pub apply_to_external: bool,
}

impl Default for ReplicateOptions {
    fn default() -> Self {
        Self {
            new_bay_name: String::new(),
            copy_signals: true,
            dx: 80.0,
            dy: 60.0,
            src_token: String::new(),
            dst_token: String::new(),
            apply_to_external: true,
        }
    }
}

/// Replicate a bay; returns the id of the new bay
pub fn replicate_bay(
    project: &mut Project,
    src_bay_id: &str,
    new_bay_id: &str,
    options: &ReplicateOptions,
) -> BaylineResult<String> {
    if options.new_bay_name.trim().is_empty() {
        return Err(BaylineError::EmptyName { entity: "bay" });
    }
    let src = project.bay(src_bay_id)?.clone();

    let new_bay_id = idgen::unique_bay_id(project, new_bay_id);
    let mut dst = Bay::new(&new_bay_id, options.new_bay_name.trim());

    let src_layout = project.canvases.get(src_bay_id).cloned();
    let mut dst_layout = CanvasLayout::new(&new_bay_id);
    if let Some(layout) = &src_layout {
        dst_layout.zoom = layout.zoom;
        dst_layout.pan_x = layout.pan_x;
        dst_layout.pan_y = layout.pan_y;
    }

    // old id -> new id, old name -> new name
    let mut id_map: BTreeMap<String, String> = BTreeMap::new();
    let mut name_map: BTreeMap<String, String> = BTreeMap::new();

    for device in src.devices.values() {
        let base_id = device.device_id.replace(src_bay_id, &new_bay_id);
        let base_id = replace_token(&base_id, &options.src_token, &options.dst_token);
        let new_id = idgen::unique_device_id(&dst, &base_id);

        let mut new_name = replace_token(&device.name, &options.src_token, &options.dst_token);
        if new_name == device.name {
            // token substitution did not differentiate; suffix the bay name
            new_name = format!("{}-{}", device.name, dst.name);
        }

        dst.devices.insert(
            new_id.clone(),
            Device::new(&new_id, &new_bay_id, &new_name, &device.dev_type),
        );
        id_map.insert(device.device_id.clone(), new_id.clone());
        name_map.insert(device.name.clone(), new_name);

        let position = src_layout
            .as_ref()
            .and_then(|l| l.device_positions.get(&device.device_id));
        dst_layout.device_positions.insert(
            new_id,
            match position {
                Some(p) => DevicePosition {
                    x: p.x + options.dx,
                    y: p.y + options.dy,
                },
                None => DevicePosition { x: 240.0, y: 220.0 },
            },
        );
    }

    project.bays.insert(new_bay_id.clone(), dst);
    project.canvases.insert(new_bay_id.clone(), dst_layout);

    if !options.copy_signals {
        return Ok(new_bay_id);
    }

    // memoized per source signal id, so every endpoint of one logical signal
    // converges on the same replacement
    let mut signal_id_map: BTreeMap<String, String> = BTreeMap::new();

    for old_device in src.devices.values() {
        let new_device_id = id_map[&old_device.device_id].clone();

        for end in old_device.endpoints() {
            let new_sid = match signal_id_map.get(&end.signal_id) {
                Some(sid) => sid.clone(),
                None => {
                    let sid = idgen::next_signal_id(project, &new_bay_id);
                    signal_id_map.insert(end.signal_id.clone(), sid.clone());

                    let old_signal = src.signals.get(&end.signal_id);
                    let name = old_signal
                        .map(|s| s.name.clone())
                        .unwrap_or_else(|| link_text::infer_signal_name(&end.text));
                    let name = replace_token(&name, &options.src_token, &options.dst_token);
                    let nature = old_signal.map(|s| s.nature).unwrap_or_default();

                    project
                        .bay_mut(&new_bay_id)?
                        .signals
                        .insert(sid.clone(), Signal::new(&sid, name, nature));
                    sid
                }
            };

            let (text, forced) = rewrite_endpoint(&end.text, &name_map, options);
            let clone = SignalEnd {
                signal_id: new_sid,
                direction: end.direction,
                text,
                status: forced.unwrap_or(end.status),
                test_block: end.test_block,
                interlocks: end.interlocks.clone(),
            };

            let device = project.bay_mut(&new_bay_id)?.device_mut(&new_device_id)?;
            if clone.direction.is_in() {
                device.inputs.push(clone);
            } else {
                device.outputs.push(clone);
            }
        }
    }

    Ok(new_bay_id)
}

/// Rewrite one endpoint text for the replica
///
/// Internal links (counterpart is a replicated device, by old or new name)
/// stay as they were status-wise; anything else forces PENDING. Returns the
/// new text and the forced status, if any.
fn rewrite_endpoint(
    text: &str,
    name_map: &BTreeMap<String, String>,
    options: &ReplicateOptions,
) -> (String, Option<LinkStatus>) {
    let text = replace_token(text, &options.src_token, &options.dst_token);

    for keyword in [KW_TO, KW_FROM] {
        let Some((left, right)) = text.split_once(keyword) else {
            continue;
        };
        let left = left.trim();
        let right_clean = counterpart_name(right);

        if let Some(mapped) = name_map.get(&right_clean) {
            return (format!("{left}{keyword}{mapped}"), None);
        }
        if name_map.values().any(|v| v == &right_clean) {
            return (format!("{left}{keyword}{right_clean}"), None);
        }
        if options.apply_to_external {
            return (
                format!("{left}{keyword}{right_clean} {PENDING_MARK}"),
                Some(LinkStatus::Pending),
            );
        }
        return (
            format!("{left}{keyword}{EXTERNAL} {PENDING_MARK}"),
            Some(LinkStatus::Pending),
        );
    }

    (text, None)
}

/// Case-insensitive literal substitution, preserving the destination token
/// exactly as typed. Empty tokens make this a no-op.
fn replace_token(text: &str, src_token: &str, dst_token: &str) -> String {
    if text.is_empty() || src_token.is_empty() || dst_token.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    let len = src_token.len();
    while i < text.len() {
        if text.is_char_boundary(i)
            && i + len <= text.len()
            && text.is_char_boundary(i + len)
            && text[i..i + len].eq_ignore_ascii_case(src_token)
        {
            out.push_str(dst_token);
            i += len;
        } else {
            // advance one char
            let ch = match text[i..].chars().next() {
                Some(c) => c,
                None => break,
            };
            out.push(ch);
            i += ch.len_utf8();
        }
    }
    out
}
