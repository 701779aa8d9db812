//! Property tests for the link graph operations.
//!
//! Applies arbitrary sequences of create / recognize / retarget operations
//! to a small bay and checks the structural invariants afterwards.

use proptest::prelude::*;

use bayline::{link_service, Bay, Device, Nature, Project};

const DEVICES: [&str; 3] = ["IED-1", "IED-2", "IED-3"];

fn fixture() -> Project {
    let mut project = Project::new("1.0.0", "Prop");
    let mut bay = Bay::new("BAY-001", "H1");
    for id in DEVICES {
        bay.insert_device(Device::new(id, "BAY-001", id, "IED"))
            .unwrap();
    }
    project.bays.insert("BAY-001".to_string(), bay);
    project
}

/// (kind, origin index, destination index); kind picks the operation
fn op() -> impl Strategy<Value = (u8, usize, usize)> {
    (0u8..4, 0usize..DEVICES.len(), 0usize..DEVICES.len())
}

fn apply(project: &mut Project, sids: &mut Vec<String>, (kind, a, b): (u8, usize, usize)) {
    let origin = DEVICES[a];
    let dest = DEVICES[b];
    match kind {
        // pending link towards EXTERNO
        0 => {
            let name = format!("SIG{}", sids.len());
            let sid = link_service::create_link(
                project, "BAY-001", origin, &name, Nature::Digital, None, false,
            )
            .unwrap();
            sids.push(sid);
        }
        // confirmed link between two distinct devices
        1 if a != b => {
            let name = format!("SIG{}", sids.len());
            let sid = link_service::create_link(
                project,
                "BAY-001",
                origin,
                &name,
                Nature::Digital,
                Some(dest),
                false,
            )
            .unwrap();
            sids.push(sid);
        }
        // recognize an existing signal towards some device
        2 if !sids.is_empty() => {
            let sid = sids[b % sids.len()].clone();
            let bay = project.bays.get_mut("BAY-001").unwrap();
            let _ = link_service::recognize(bay, origin, &sid, dest);
        }
        // retarget an existing signal
        3 if !sids.is_empty() => {
            let sid = sids[a % sids.len()].clone();
            let bay = project.bays.get_mut("BAY-001").unwrap();
            let _ = link_service::update_destination(bay, &sid, Some(dest), None);
        }
        _ => {}
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: no operation sequence ever leaves two IN ends for the same
    /// signal in one bay, and every endpoint references a tracked signal.
    #[test]
    fn property_single_in_end_per_signal(
        ops in proptest::collection::vec(op(), 0..24),
    ) {
        let mut project = fixture();
        let mut sids = Vec::new();
        for step in ops {
            apply(&mut project, &mut sids, step);
        }

        let bay = project.bay("BAY-001").unwrap();
        for sid in &sids {
            let ins = bay
                .devices
                .values()
                .flat_map(|d| d.inputs.iter())
                .filter(|e| &e.signal_id == sid)
                .count();
            prop_assert!(ins <= 1, "signal {sid} has {ins} IN ends");
        }
        for device in bay.devices.values() {
            for end in device.endpoints() {
                prop_assert!(bay.signals.contains_key(&end.signal_id));
            }
        }
    }

    /// PROPERTY: removal always erases every trace of the signal.
    #[test]
    fn property_remove_leaves_no_references(
        ops in proptest::collection::vec(op(), 1..16),
    ) {
        let mut project = fixture();
        let mut sids = Vec::new();
        for step in ops {
            apply(&mut project, &mut sids, step);
        }

        for sid in &sids {
            link_service::remove_project(&mut project, sid).unwrap();
        }

        let bay = project.bay("BAY-001").unwrap();
        prop_assert!(bay.signals.is_empty());
        for device in bay.devices.values() {
            prop_assert!(device.inputs.is_empty());
            prop_assert!(device.outputs.is_empty());
        }
    }
}
