//! Identifier allocation
//!
//! Ids are human-readable and probed for uniqueness with numeric suffixes:
//! bays `BAY-NNN`, devices `DEV-<bay>-NNN`, signals `<bay>-SIG-NNN`.
//! Signal ids are unique project-wide, not just within the allocating bay.

use std::collections::BTreeSet;

use crate::domain::entities::{Bay, Project};

/// Next free `BAY-NNN` id
pub fn next_bay_id(project: &Project) -> String {
    let mut n = 1;
    loop {
        let candidate = format!("BAY-{n:03}");
        if !project.bays.contains_key(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Next free `DEV-<bay>-NNN` id, continuing after the highest existing number
pub fn next_device_id(bay: &Bay) -> String {
    let prefix = format!("DEV-{}-", bay.bay_id);
    let max = bay
        .devices
        .keys()
        .filter_map(|id| id.strip_prefix(&prefix))
        .filter_map(|rest| rest.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{prefix}{:03}", max + 1)
}

/// Next free `<bay>-SIG-NNN` id, checked against every bay's signal map
pub fn next_signal_id(project: &Project, bay_id: &str) -> String {
    let existing: BTreeSet<&String> = project
        .bays
        .values()
        .flat_map(|b| b.signals.keys())
        .collect();
    let mut n = 1;
    loop {
        let candidate = format!("{bay_id}-SIG-{n:03}");
        if !existing.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Disambiguate a candidate bay id with `-2`, `-3`, ... probing
pub fn unique_bay_id(project: &Project, base: &str) -> String {
    if !project.bays.contains_key(base) {
        return base.to_string();
    }
    let mut i = 2;
    loop {
        let candidate = format!("{base}-{i}");
        if !project.bays.contains_key(&candidate) {
            return candidate;
        }
        i += 1;
    }
}

/// Disambiguate a candidate device id within one bay
pub fn unique_device_id(bay: &Bay, base: &str) -> String {
    if !bay.devices.contains_key(base) {
        return base.to_string();
    }
    let mut i = 2;
    loop {
        let candidate = format!("{base}-{i}");
        if !bay.devices.contains_key(&candidate) {
            return candidate;
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Bay, Device, Project, Signal};
    use crate::domain::value_objects::Nature;

    fn project_with_bay(bay_id: &str) -> Project {
        let mut project = Project::new("1.0.0", "Test");
        project
            .bays
            .insert(bay_id.to_string(), Bay::new(bay_id, bay_id));
        project
    }

    #[test]
    fn test_next_bay_id_skips_taken() {
        let project = project_with_bay("BAY-001");
        assert_eq!(next_bay_id(&project), "BAY-002");
    }

    #[test]
    fn test_next_device_id_continues_after_max() {
        let mut bay = Bay::new("BAY-001", "H1");
        bay.insert_device(Device::new("DEV-BAY-001-007", "BAY-001", "52H1", "IED"))
            .unwrap();
        bay.insert_device(Device::new("custom-id", "BAY-001", "X", "IED"))
            .unwrap();
        assert_eq!(next_device_id(&bay), "DEV-BAY-001-008");
    }

    #[test]
    fn test_next_signal_id_probes_all_bays() {
        let mut project = project_with_bay("BAY-001");
        project
            .bays
            .insert("BAY-002".to_string(), Bay::new("BAY-002", "H2"));
        project
            .bays
            .get_mut("BAY-002")
            .unwrap()
            .signals
            .insert(
                "BAY-001-SIG-001".to_string(),
                Signal::new("BAY-001-SIG-001", "TRIP", Nature::Digital),
            );
        assert_eq!(next_signal_id(&project, "BAY-001"), "BAY-001-SIG-002");
    }

    #[test]
    fn test_unique_device_id_suffixes() {
        let mut bay = Bay::new("BAY-001", "H1");
        bay.insert_device(Device::new("52H1", "BAY-001", "52H1", "IED"))
            .unwrap();
        bay.insert_device(Device::new("52H1-2", "BAY-001", "52H1", "IED"))
            .unwrap();
        assert_eq!(unique_device_id(&bay, "52H1"), "52H1-3");
        assert_eq!(unique_device_id(&bay, "89H1"), "89H1");
    }
}
