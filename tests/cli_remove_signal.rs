use std::process::Command;

use tempfile::tempdir;

use bayline::{load_project, save_project};

mod common;
use common::{linked, project_with_devices};

#[test]
fn test_remove_signal_yes_rewrites_the_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("project.json");
    let mut project = project_with_devices(&["IED-1", "IED-2"]);
    let sid = linked(&mut project, "IED-1", "TRIP_52", "IED-2");
    save_project(&project, &path).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_bayline"))
        .current_dir(dir.path())
        .args([
            "remove-signal",
            "--bay",
            "BAY-001",
            "--signal",
            &sid,
            "--yes",
            "--project",
            path.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let reloaded = load_project(&path).unwrap();
    let bay = reloaded.bay("BAY-001").unwrap();
    assert!(!bay.signals.contains_key(&sid));
    assert!(bay
        .devices
        .values()
        .all(|d| d.endpoints().all(|e| e.signal_id != sid)));
}

#[test]
fn test_remove_unknown_signal_fails_and_keeps_the_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("project.json");
    let mut project = project_with_devices(&["IED-1", "IED-2"]);
    linked(&mut project, "IED-1", "TRIP_52", "IED-2");
    save_project(&project, &path).unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_bayline"))
        .current_dir(dir.path())
        .args([
            "remove-signal",
            "--bay",
            "BAY-001",
            "--signal",
            "NO-SUCH-SIG",
            "--yes",
            "--project",
            path.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}
