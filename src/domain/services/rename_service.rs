//! Rename propagation
//!
//! Device ids never change; renaming touches `Device.name` and then repairs
//! every endpoint text in the whole project that references the device by
//! name. The repair only fires when the old name is an exact prefix of what
//! follows a `" hacia "` / `" desde "` anchor, so an unrelated occurrence of
//! the old name elsewhere in a text is never touched.

use crate::domain::entities::Project;
use crate::domain::value_objects::link_text::{rename_counterpart_prefix, KW_FROM, KW_TO};
use crate::error::{BaylineError, BaylineResult};

/// Rename a device and repair name references project-wide
pub fn rename_device(
    project: &mut Project,
    bay_id: &str,
    device_id: &str,
    new_name: &str,
) -> BaylineResult<()> {
    let new_name = new_name.trim();
    if new_name.is_empty() {
        return Err(BaylineError::EmptyName { entity: "device" });
    }

    let device = project.bay_mut(bay_id)?.device_mut(device_id)?;
    let old_name = device.name.clone();
    if new_name == old_name {
        return Ok(());
    }
    device.name = new_name.to_string();

    // other bays may reference this device by name in their endpoint texts
    for bay in project.bays.values_mut() {
        for device in bay.devices.values_mut() {
            for end in device.outputs.iter_mut() {
                end.text = rename_counterpart_prefix(&end.text, KW_TO, &old_name, new_name);
            }
            for end in device.inputs.iter_mut() {
                end.text = rename_counterpart_prefix(&end.text, KW_FROM, &old_name, new_name);
            }
        }
    }
    Ok(())
}

/// Rename a bay; endpoint texts never encode bay names, so nothing propagates
pub fn rename_bay(project: &mut Project, bay_id: &str, new_name: &str) -> BaylineResult<()> {
    let new_name = new_name.trim();
    if new_name.is_empty() {
        return Err(BaylineError::EmptyName { entity: "bay" });
    }
    project.bay_mut(bay_id)?.name = new_name.to_string();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Bay, Device, SignalEnd};
    use crate::domain::value_objects::LinkStatus;

    fn project_two_bays() -> Project {
        let mut project = Project::new("1.0.0", "Test");
        let mut bay1 = Bay::new("BAY-001", "H1");
        let mut origin = Device::new("D1", "BAY-001", "52H1", "IED");
        origin.outputs.push(SignalEnd::output(
            "S1",
            "TRIP hacia 52H1 (pendiente)",
            LinkStatus::Pending,
        ));
        // old name as a plain substring, not after the anchor
        origin.outputs.push(SignalEnd::output(
            "S2",
            "52H1_ALARM hacia OTRO",
            LinkStatus::Confirmed,
        ));
        bay1.insert_device(origin).unwrap();
        bay1.insert_device(Device::new("52H1", "BAY-001", "52H1", "IED"))
            .unwrap();
        project.bays.insert("BAY-001".to_string(), bay1);

        let mut bay2 = Bay::new("BAY-002", "H2");
        let mut remote = Device::new("D9", "BAY-002", "IED-9", "IED");
        remote.inputs.push(SignalEnd::input(
            "S1",
            "TRIP desde 52H1",
            LinkStatus::Confirmed,
        ));
        bay2.insert_device(remote).unwrap();
        project.bays.insert("BAY-002".to_string(), bay2);
        project
    }

    #[test]
    fn test_rename_device_repairs_texts_project_wide() {
        let mut project = project_two_bays();
        rename_device(&mut project, "BAY-001", "52H1", "52H2").unwrap();

        let bay1 = project.bay("BAY-001").unwrap();
        assert_eq!(bay1.device("52H1").unwrap().name, "52H2");
        let outs = &bay1.device("D1").unwrap().outputs;
        assert_eq!(outs[0].text, "TRIP hacia 52H2 (pendiente)");
        // substring occurrence not after the anchor stays put
        assert_eq!(outs[1].text, "52H1_ALARM hacia OTRO");

        let remote = project.bay("BAY-002").unwrap().device("D9").unwrap();
        assert_eq!(remote.inputs[0].text, "TRIP desde 52H2");
    }

    #[test]
    fn test_rename_device_same_name_is_a_noop() {
        let mut project = project_two_bays();
        let before = project.clone();
        rename_device(&mut project, "BAY-001", "52H1", "52H1").unwrap();
        assert_eq!(project, before);
    }

    #[test]
    fn test_rename_device_rejects_empty() {
        let mut project = project_two_bays();
        let err = rename_device(&mut project, "BAY-001", "52H1", "   ").unwrap_err();
        assert!(matches!(err, BaylineError::EmptyName { entity: "device" }));
    }

    #[test]
    fn test_rename_bay_touches_name_only() {
        let mut project = project_two_bays();
        rename_bay(&mut project, "BAY-001", "H1-Reserva").unwrap();
        assert_eq!(project.bay("BAY-001").unwrap().name, "H1-Reserva");
        let outs = &project.bay("BAY-001").unwrap().device("D1").unwrap().outputs;
        assert_eq!(outs[0].text, "TRIP hacia 52H1 (pendiente)");
    }
}
