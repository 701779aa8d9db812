//! Property tests for bay replication.

use std::collections::BTreeSet;

use proptest::prelude::*;

use bayline::replication_service::{replicate_bay, ReplicateOptions};
use bayline::{link_service, Bay, Device, Nature, Project};

fn fixture(signal_names: &[String]) -> Project {
    let mut project = Project::new("1.0.0", "Prop");
    let mut bay = Bay::new("BAY-001", "H1");
    for id in ["52H1", "PS1-H1"] {
        bay.insert_device(Device::new(id, "BAY-001", id, "IED"))
            .unwrap();
    }
    project.bays.insert("BAY-001".to_string(), bay);
    for (i, name) in signal_names.iter().enumerate() {
        // alternate between internal confirmed links and pending ones
        let dest = if i % 2 == 0 { Some("PS1-H1") } else { None };
        link_service::create_link(
            &mut project,
            "BAY-001",
            "52H1",
            name,
            Nature::Digital,
            dest,
            false,
        )
        .unwrap();
    }
    project
}

fn signal_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][A-Z0-9_]{0,9}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the replica tracks exactly as many signals as the source,
    /// with ids disjoint from it, and both ends of every confirmed pair
    /// converge on the same remapped id.
    #[test]
    fn property_replica_preserves_signal_equivalence(
        names in proptest::collection::vec(signal_name(), 1..8),
    ) {
        let mut project = fixture(&names);
        let options = ReplicateOptions {
            new_bay_name: "H2".to_string(),
            src_token: "H1".to_string(),
            dst_token: "H2".to_string(),
            ..ReplicateOptions::default()
        };
        let new_id = replicate_bay(&mut project, "BAY-001", "BAY-002", &options).unwrap();

        let source = project.bay("BAY-001").unwrap();
        let replica = project.bay(&new_id).unwrap();
        prop_assert_eq!(replica.signals.len(), source.signals.len());

        let source_ids: BTreeSet<_> = source.signals.keys().collect();
        let replica_ids: BTreeSet<_> = replica.signals.keys().collect();
        prop_assert!(source_ids.is_disjoint(&replica_ids));

        // every IN end pairs with an OUT end carrying the same remapped id
        let out_ids: BTreeSet<_> = replica
            .devices
            .values()
            .flat_map(|d| d.outputs.iter())
            .map(|e| e.signal_id.clone())
            .collect();
        for device in replica.devices.values() {
            for end in &device.inputs {
                prop_assert!(out_ids.contains(&end.signal_id));
            }
        }
    }
}
