//! Device lifecycle: explicit creation, deletion, in-bay duplication
//!
//! Deleting a device removes its endpoints with it but never cascades into
//! Signal records; a signal whose endpoints all lived on the deleted device
//! stays tracked by the bay until removed through the link service.

use crate::domain::entities::{Device, Project, Signal, SignalEnd};
use crate::domain::value_objects::link_text::{pending_reset, KW_FROM, KW_TO};
use crate::domain::value_objects::LinkStatus;
use crate::error::{BaylineError, BaylineResult};

/// Create a device in a bay; the id must be free
pub fn add_device(
    project: &mut Project,
    bay_id: &str,
    device_id: &str,
    name: &str,
    dev_type: &str,
) -> BaylineResult<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BaylineError::EmptyName { entity: "device" });
    }
    let bay = project.bay_mut(bay_id)?;
    bay.insert_device(Device::new(device_id, bay_id, name, dev_type))
}

/// Delete a device and its canvas position
pub fn remove_device(project: &mut Project, bay_id: &str, device_id: &str) -> BaylineResult<()> {
    let bay = project.bay_mut(bay_id)?;
    if bay.devices.remove(device_id).is_none() {
        return Err(BaylineError::DeviceNotFound {
            bay_id: bay_id.to_string(),
            device_id: device_id.to_string(),
        });
    }
    if let Some(layout) = project.canvases.get_mut(bay_id) {
        layout.device_positions.remove(device_id);
    }
    Ok(())
}

/// Duplicate a device inside its bay
///
/// With `copy_signals`, endpoints are cloned re-pointed at EXTERNO as
/// PENDING: the duplicate shares the originals' signal ids but none of their
/// resolved counterparts. Signal ids the bay does not track get a
/// placeholder record so the copy stays self-consistent.
pub fn duplicate_device(
    project: &mut Project,
    bay_id: &str,
    src_device_id: &str,
    new_device_id: &str,
    new_name: &str,
    copy_signals: bool,
) -> BaylineResult<()> {
    let new_name = new_name.trim();
    if new_name.is_empty() {
        return Err(BaylineError::EmptyName { entity: "device" });
    }
    let bay = project.bay_mut(bay_id)?;
    let src = bay.device(src_device_id)?.clone();
    if bay.devices.contains_key(new_device_id) {
        return Err(BaylineError::DuplicateDeviceId {
            bay_id: bay_id.to_string(),
            device_id: new_device_id.to_string(),
        });
    }

    let mut duplicate = Device::new(new_device_id, bay_id, new_name, &src.dev_type);
    if copy_signals {
        for end in &src.inputs {
            bay.signals
                .entry(end.signal_id.clone())
                .or_insert_with(|| Signal::new(&end.signal_id, &end.signal_id, Default::default()));
            duplicate.inputs.push(SignalEnd::input(
                &end.signal_id,
                pending_reset(&end.text, KW_FROM),
                LinkStatus::Pending,
            ));
        }
        for end in &src.outputs {
            bay.signals
                .entry(end.signal_id.clone())
                .or_insert_with(|| Signal::new(&end.signal_id, &end.signal_id, Default::default()));
            duplicate.outputs.push(SignalEnd::output(
                &end.signal_id,
                pending_reset(&end.text, KW_TO),
                LinkStatus::Pending,
            ));
        }
    }
    bay.insert_device(duplicate)
}
