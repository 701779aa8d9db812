//! Link consistency service
//!
//! The only supported way to create, retarget, resolve, or remove a signal
//! relationship. Keeps the denormalized endpoint records and their display
//! texts in agreement: one logical signal, any number of OUT ends, at most
//! one IN end per bay.
//!
//! Every operation checks the bays/devices/signals it references before
//! mutating anything; a failed precondition leaves the project untouched.

use crate::domain::entities::{Project, Signal, SignalEnd};
use crate::domain::value_objects::link_text::{self, KW_FROM, KW_TO};
use crate::domain::value_objects::{LinkStatus, Nature};
use crate::error::{BaylineError, BaylineResult};

use super::idgen;
use crate::domain::entities::Bay;

/// Create a new signal with an OUT end on the origin device
///
/// With a destination and `force_pending` false the CONFIRMED IN mirror is
/// appended immediately; otherwise the link stays PENDING towards the given
/// destination, or towards EXTERNO when there is none.
///
/// Returns the allocated signal id.
pub fn create_link(
    project: &mut Project,
    bay_id: &str,
    origin_device_id: &str,
    signal_name: &str,
    nature: Nature,
    dest_device_id: Option<&str>,
    force_pending: bool,
) -> BaylineResult<String> {
    let signal_id = idgen::next_signal_id(project, bay_id);
    let bay = project.bay_mut(bay_id)?;

    let origin_name = bay.device(origin_device_id)?.name.clone();
    let dest_name = match dest_device_id {
        Some(id) => Some(bay.device(id)?.name.clone()),
        None => None,
    };

    bay.signals.insert(
        signal_id.clone(),
        Signal::new(&signal_id, signal_name, nature),
    );

    let (counterpart, status) = match &dest_name {
        None => (link_text::EXTERNAL.to_string(), LinkStatus::Pending),
        Some(name) => {
            let status = if force_pending {
                LinkStatus::Pending
            } else {
                LinkStatus::Confirmed
            };
            (name.clone(), status)
        }
    };

    let text = link_text::out_text(signal_name, &counterpart, status.is_pending());
    bay.device_mut(origin_device_id)?
        .outputs
        .push(SignalEnd::output(&signal_id, text, status));

    if let Some(dest_id) = dest_device_id {
        if !force_pending {
            let text = link_text::in_text(signal_name, &origin_name);
            bay.device_mut(dest_id)?
                .inputs
                .push(SignalEnd::input(&signal_id, text, LinkStatus::Confirmed));
        }
    }

    Ok(signal_id)
}

/// Resolve a pending OUT end within one bay
///
/// Rewrites every matching OUT end on the origin to CONFIRMED towards the
/// destination. An IN end already present on the destination is taken as
/// already-resolved and left alone (the operation is idempotent); otherwise
/// the CONFIRMED mirror is appended.
pub fn recognize(
    bay: &mut Bay,
    origin_device_id: &str,
    signal_id: &str,
    dest_device_id: &str,
) -> BaylineResult<()> {
    let origin_name = bay.device(origin_device_id)?.name.clone();
    let dest_name = bay.device(dest_device_id)?.name.clone();
    let sig_name = signal_display_name(bay, signal_id);

    let origin = bay.device_mut(origin_device_id)?;
    for end in origin
        .outputs
        .iter_mut()
        .filter(|e| e.signal_id == signal_id)
    {
        end.text = link_text::rewrite_counterpart(&end.text, KW_TO, &sig_name, &dest_name);
        end.status = LinkStatus::Confirmed;
    }

    if bay
        .device(dest_device_id)?
        .inputs
        .iter()
        .any(|e| e.signal_id == signal_id)
    {
        return Ok(());
    }
    // single-destination cardinality: an IN left on another device from an
    // earlier recognition must not survive the retarget
    drop_in_ends_except(bay, signal_id, dest_device_id);
    bay.device_mut(dest_device_id)?.inputs.push(SignalEnd::input(
        signal_id,
        link_text::in_text(&sig_name, &origin_name),
        LinkStatus::Confirmed,
    ));
    Ok(())
}

/// Resolve a pending OUT end towards a device in another bay
///
/// Seeds a Signal record for the id into whichever of the two bays lacks one
/// (fill-if-absent, never overwrite; nature defaults to DIGITAL when neither
/// bay has metadata). Unlike [`recognize`], an existing IN end at the
/// destination is confirmed and re-texted in place rather than treated as
/// already-resolved.
pub fn recognize_cross(
    project: &mut Project,
    origin_bay_id: &str,
    origin_device_id: &str,
    signal_id: &str,
    dest_bay_id: &str,
    dest_device_id: &str,
) -> BaylineResult<()> {
    let origin_name = project
        .bay(origin_bay_id)?
        .device(origin_device_id)?
        .name
        .clone();
    let dest_name = project.bay(dest_bay_id)?.device(dest_device_id)?.name.clone();

    let seed = project
        .bay(origin_bay_id)?
        .signals
        .get(signal_id)
        .or_else(|| project.bays[dest_bay_id].signals.get(signal_id))
        .cloned();
    let (sig_name, sig_nature) = match &seed {
        Some(sig) => (sig.name.clone(), sig.nature),
        None => (signal_id.to_string(), Nature::Digital),
    };

    for bay_id in [origin_bay_id, dest_bay_id] {
        project
            .bay_mut(bay_id)?
            .signals
            .entry(signal_id.to_string())
            .or_insert_with(|| Signal::new(signal_id, &sig_name, sig_nature));
    }

    let origin = project.bay_mut(origin_bay_id)?.device_mut(origin_device_id)?;
    if let Some(end) = origin.outputs.iter_mut().find(|e| e.signal_id == signal_id) {
        end.text = link_text::rewrite_counterpart(&end.text, KW_TO, &sig_name, &dest_name);
        end.status = LinkStatus::Confirmed;
    }

    let dest_bay = project.bay_mut(dest_bay_id)?;
    drop_in_ends_except(dest_bay, signal_id, dest_device_id);
    let dest = dest_bay.device_mut(dest_device_id)?;
    if let Some(end) = dest.inputs.iter_mut().find(|e| e.signal_id == signal_id) {
        end.text = link_text::rewrite_counterpart(&end.text, KW_FROM, &sig_name, &origin_name);
        end.status = LinkStatus::Confirmed;
        return Ok(());
    }
    dest.inputs.push(SignalEnd::input(
        signal_id,
        link_text::in_text(&sig_name, &origin_name),
        LinkStatus::Confirmed,
    ));
    Ok(())
}

/// Remove IN ends for a signal on every device except the named one
fn drop_in_ends_except(bay: &mut Bay, signal_id: &str, keep_device_id: &str) {
    for device in bay.devices.values_mut() {
        if device.device_id != keep_device_id {
            device.inputs.retain(|e| e.signal_id != signal_id);
        }
    }
}

/// Retarget a signal within one bay
///
/// `new_dest_device_id = None` re-points matching OUT ends at EXTERNO as
/// PENDING; otherwise they become CONFIRMED towards the new destination.
/// `origin_device_id` restricts the OUT pass to one emitting device. The IN
/// side is rebuilt so that only the destination device holds an IN end,
/// enforcing single-destination cardinality by construction.
pub fn update_destination(
    bay: &mut Bay,
    signal_id: &str,
    new_dest_device_id: Option<&str>,
    origin_device_id: Option<&str>,
) -> BaylineResult<()> {
    if let Some(filter) = origin_device_id {
        bay.device(filter)?;
    }
    let dest_name = match new_dest_device_id {
        Some(id) => Some(bay.device(id)?.name.clone()),
        None => None,
    };
    let sig_name = signal_display_name(bay, signal_id);
    let origin_name = infer_origin_name(bay, signal_id, origin_device_id);

    for device in bay.devices.values_mut() {
        if let Some(filter) = origin_device_id {
            if device.device_id != filter {
                continue;
            }
        }
        for end in device
            .outputs
            .iter_mut()
            .filter(|e| e.signal_id == signal_id)
        {
            match &dest_name {
                None => {
                    end.status = LinkStatus::Pending;
                    end.text = link_text::out_text(&sig_name, link_text::EXTERNAL, true);
                }
                Some(name) => {
                    end.status = LinkStatus::Confirmed;
                    end.text = link_text::out_text(&sig_name, name, false);
                }
            }
        }
    }

    for device in bay.devices.values_mut() {
        let is_dest = new_dest_device_id.is_some_and(|id| device.device_id == id);
        if !is_dest {
            device.inputs.retain(|e| e.signal_id != signal_id);
            continue;
        }
        let text = match &origin_name {
            Some(origin) => link_text::in_text(&sig_name, origin),
            None => sig_name.clone(),
        };
        if let Some(end) = device.inputs.iter_mut().find(|e| e.signal_id == signal_id) {
            end.status = LinkStatus::Confirmed;
            end.text = text;
        } else {
            device
                .inputs
                .push(SignalEnd::input(signal_id, text, LinkStatus::Confirmed));
        }
    }
    Ok(())
}

/// Delete every endpoint of the signal in one bay plus its Signal record
pub fn remove(bay: &mut Bay, signal_id: &str) -> BaylineResult<()> {
    let tracked = bay.signals.contains_key(signal_id);
    let referenced = bay
        .devices
        .values()
        .any(|d| d.endpoints().any(|e| e.signal_id == signal_id));
    if !tracked && !referenced {
        return Err(BaylineError::SignalNotFound {
            bay_id: bay.bay_id.clone(),
            signal_id: signal_id.to_string(),
        });
    }
    for device in bay.devices.values_mut() {
        device.detach_signal(signal_id);
    }
    bay.signals.remove(signal_id);
    Ok(())
}

/// Delete every endpoint and Signal record of the signal across the project
pub fn remove_project(project: &mut Project, signal_id: &str) -> BaylineResult<()> {
    let anywhere = project.bays.values().any(|b| {
        b.signals.contains_key(signal_id)
            || b.devices
                .values()
                .any(|d| d.endpoints().any(|e| e.signal_id == signal_id))
    });
    if !anywhere {
        return Err(BaylineError::SignalNotFoundInProject {
            signal_id: signal_id.to_string(),
        });
    }
    for bay in project.bays.values_mut() {
        for device in bay.devices.values_mut() {
            device.detach_signal(signal_id);
        }
        bay.signals.remove(signal_id);
    }
    Ok(())
}

/// Rename a signal, rewriting only the name side of every endpoint text
pub fn rename_signal(bay: &mut Bay, signal_id: &str, new_name: &str) -> BaylineResult<()> {
    let new_name = new_name.trim();
    if new_name.is_empty() {
        return Err(BaylineError::EmptyName { entity: "signal" });
    }
    let signal = bay
        .signals
        .get_mut(signal_id)
        .ok_or_else(|| BaylineError::SignalNotFound {
            bay_id: bay.bay_id.clone(),
            signal_id: signal_id.to_string(),
        })?;
    signal.name = new_name.to_string();

    for device in bay.devices.values_mut() {
        for end in device
            .outputs
            .iter_mut()
            .filter(|e| e.signal_id == signal_id)
        {
            end.text = link_text::rewrite_name(&end.text, KW_TO, new_name);
        }
        for end in device
            .inputs
            .iter_mut()
            .filter(|e| e.signal_id == signal_id)
        {
            end.text = link_text::rewrite_name(&end.text, KW_FROM, new_name);
        }
    }
    Ok(())
}

/// The device currently holding the IN end for a signal, if any
pub fn find_destination(bay: &Bay, signal_id: &str) -> Option<String> {
    bay.devices
        .values()
        .find(|d| d.inputs.iter().any(|e| e.signal_id == signal_id))
        .map(|d| d.device_id.clone())
}

fn signal_display_name(bay: &Bay, signal_id: &str) -> String {
    bay.signals
        .get(signal_id)
        .map(|s| s.name.clone())
        .unwrap_or_else(|| signal_id.to_string())
}

/// Best-effort origin name for rebuilding an IN text: the filter device if
/// given, else any device emitting the signal, else the name already encoded
/// in an existing IN text.
fn infer_origin_name(bay: &Bay, signal_id: &str, origin_device_id: Option<&str>) -> Option<String> {
    if let Some(id) = origin_device_id {
        if let Some(device) = bay.devices.get(id) {
            return Some(device.name.clone());
        }
    }
    for device in bay.devices.values() {
        if device.outputs.iter().any(|e| e.signal_id == signal_id) {
            return Some(device.name.clone());
        }
    }
    for device in bay.devices.values() {
        for end in device.inputs.iter().filter(|e| e.signal_id == signal_id) {
            if let Some((_, right)) = end.text.split_once(KW_FROM) {
                let name = link_text::counterpart_name(right);
                if !name.is_empty() {
                    return Some(name);
                }
            }
        }
    }
    None
}
