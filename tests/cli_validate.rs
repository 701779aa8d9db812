use std::process::Command;

use serde_json::Value;
use tempfile::tempdir;

use bayline::save_project;

mod common;
use common::{linked, pending, project_with_devices};

#[test]
fn test_validate_clean_project_exits_zero() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("project.json");
    let mut project = project_with_devices(&["IED-1", "IED-2"]);
    linked(&mut project, "IED-1", "TRIP_52", "IED-2");
    save_project(&project, &path).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_bayline"))
        .current_dir(dir.path())
        .args(["validate", "--project", path.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0 error(s), 0 warning(s)"), "{stdout}");
}

#[test]
fn test_validate_strict_fails_on_pending_warnings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("project.json");
    let mut project = project_with_devices(&["IED-1"]);
    pending(&mut project, "IED-1", "ALARMA");
    save_project(&project, &path).unwrap();

    let bin = env!("CARGO_BIN_EXE_bayline");
    let relaxed = Command::new(bin)
        .current_dir(dir.path())
        .args(["validate", "--project", path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(relaxed.status.success());

    let strict = Command::new(bin)
        .current_dir(dir.path())
        .args(["validate", "--strict", "--project", path.to_str().unwrap()])
        .output()
        .unwrap();
    assert_eq!(strict.status.code(), Some(1));
}

#[test]
fn test_validate_json_reports_findings_per_bay() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("project.json");
    let mut project = project_with_devices(&["IED-1"]);
    pending(&mut project, "IED-1", "ALARMA");
    save_project(&project, &path).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_bayline"))
        .current_dir(dir.path())
        .args(["validate", "--json", "--project", path.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["errors"], 0);
    assert!(report["warnings"].as_u64().unwrap() >= 1);
    assert_eq!(report["findings"][0]["bay"], "BAY-001");
    assert_eq!(report["findings"][0]["severity"], "WARNING");
}

#[test]
fn test_validate_unknown_bay_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("project.json");
    save_project(&project_with_devices(&["IED-1"]), &path).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_bayline"))
        .current_dir(dir.path())
        .args([
            "validate",
            "--bay",
            "BAY-999",
            "--project",
            path.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("BAY-999"), "{stderr}");
}
