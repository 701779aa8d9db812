//! Shared builders for integration tests

use bayline::{link_service, Bay, Device, Nature, Project};

/// Project with one bay `BAY-001` ("H1") holding the named devices
pub fn project_with_devices(device_ids: &[&str]) -> Project {
    let mut project = Project::new("1.0.0", "Subestacion Test");
    let mut bay = Bay::new("BAY-001", "H1");
    for id in device_ids {
        bay.insert_device(Device::new(*id, "BAY-001", *id, "IED"))
            .unwrap();
    }
    project.bays.insert("BAY-001".to_string(), bay);
    project
}

/// Add an extra bay with the given devices
pub fn add_bay(project: &mut Project, bay_id: &str, name: &str, device_ids: &[&str]) {
    let mut bay = Bay::new(bay_id, name);
    for id in device_ids {
        bay.insert_device(Device::new(*id, bay_id, *id, "IED"))
            .unwrap();
    }
    project.bays.insert(bay_id.to_string(), bay);
}

/// Confirmed link `name` from `origin` to `dest` inside BAY-001
pub fn linked(project: &mut Project, origin: &str, name: &str, dest: &str) -> String {
    link_service::create_link(
        project,
        "BAY-001",
        origin,
        name,
        Nature::Digital,
        Some(dest),
        false,
    )
    .unwrap()
}

/// Pending link `name` from `origin` towards EXTERNO inside BAY-001
pub fn pending(project: &mut Project, origin: &str, name: &str) -> String {
    link_service::create_link(project, "BAY-001", origin, name, Nature::Digital, None, false)
        .unwrap()
}
