use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn config_directory_reports_every_switch() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("switchport-audit"));
    cmd.arg("config")
        .arg(fixture("fixtures/configs"))
        .assert()
        .success()
        .stdout(predicate::str::contains("ACCESS-SW-01"))
        .stdout(predicate::str::contains("vlans=2 interfaces=5"))
        .stdout(predicate::str::contains("ACCESS-SW-02"))
        .stdout(predicate::str::contains("- GigabitEthernet1/0/1 mode=access vlan=10(DATA_VLAN)"))
        .stdout(predicate::str::contains("- GigabitEthernet1/0/3 mode=access vlan=99(?)"))
        .stdout(predicate::str::contains(
            "Searched - Total Switches: 2 | Total Switchports: 7",
        ));
}

#[test]
fn config_json_report_carries_records_and_summary() {
    let output = Command::new(assert_cmd::cargo::cargo_bin!("switchport-audit"))
        .arg("config")
        .arg(fixture("fixtures/configs/access-sw-01.cfg"))
        .arg("--format")
        .arg("json")
        .output()
        .expect("config output");
    assert!(output.status.success(), "config should succeed");

    let report: Value = serde_json::from_slice(&output.stdout).expect("json parse");
    assert_eq!(report["profile_source"], "embedded");
    assert_eq!(report["summary"]["switchports"], 5);
    assert_eq!(report["summary"]["unnamed_vlans"], 1);

    let switch = &report["switches"][0];
    assert_eq!(switch["hostname"], "ACCESS-SW-01");
    assert_eq!(switch["vlans"][1]["name"], "VOICE_VLAN");

    let desk = &switch["interfaces"][2];
    assert_eq!(desk["name"], "GigabitEthernet1/0/2");
    assert_eq!(desk["type"], "GigabitEthernet");
    assert_eq!(desk["vlan_id"], 10);
    assert_eq!(desk["voice_vlan_name"], "VOICE_VLAN");
    assert_eq!(desk["ise_compliant"], true);
    assert_eq!(desk["switch_hostname"], "ACCESS-SW-01");
    assert!(desk["raw_config"]
        .as_str()
        .is_some_and(|raw| raw.starts_with("interface GigabitEthernet1/0/2\n")));
}

#[test]
fn missing_hostname_warns_but_succeeds() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("switchport-audit"));
    cmd.arg("config")
        .arg(fixture("fixtures/orphan/no-hostname.cfg"))
        .arg("--summary")
        .assert()
        .success()
        .stderr(predicate::str::contains("could not find the hostname"))
        .stderr(predicate::str::contains("no-hostname.cfg"))
        .stdout(predicate::str::contains("Total Switchports: 1"));
}

#[test]
fn empty_config_is_a_valid_switch() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("empty.cfg");
    fs::write(&input, "").expect("write empty config");

    let output = Command::new(assert_cmd::cargo::cargo_bin!("switchport-audit"))
        .arg("config")
        .arg(&input)
        .arg("--format")
        .arg("json")
        .output()
        .expect("config output");
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("json parse");
    let switch = &report["switches"][0];
    assert!(switch["hostname"].is_null());
    assert_eq!(switch["vlans"], serde_json::json!([]));
    assert_eq!(switch["interfaces"], serde_json::json!([]));
}

#[test]
fn strict_fails_on_noncompliant_access_ports() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("switchport-audit"));
    cmd.arg("config")
        .arg(fixture("fixtures/configs"))
        .arg("--summary")
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "strict mode failed: 3 access ports are not ISE compliant",
        ));
}

#[test]
fn export_writes_one_sheet_per_hostname() {
    let dir = tempdir().expect("tempdir");
    let export = dir.path().join("export.json");

    Command::new(assert_cmd::cargo::cargo_bin!("switchport-audit"))
        .arg("config")
        .arg(fixture("fixtures/configs"))
        .arg(fixture("fixtures/orphan/no-hostname.cfg"))
        .arg("--summary")
        .arg("--output")
        .arg(&export)
        .assert()
        .success();

    let sheets: Value =
        serde_json::from_str(&fs::read_to_string(&export).expect("read export")).expect("json");
    let names: Vec<&str> = sheets
        .as_array()
        .expect("sheet list")
        .iter()
        .filter_map(|sheet| sheet["sheet_name"].as_str())
        .collect();
    assert_eq!(names, ["ACCESS-SW-01", "ACCESS-SW-02"]);
    assert_eq!(sheets[1]["rows"][0]["name"], "FastEthernet0/1");
}

#[test]
fn export_refuses_to_overwrite_input() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("sw.cfg");
    fs::write(&input, "hostname SW\n").expect("write config");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("switchport-audit"));
    cmd.arg("config")
        .arg(&input)
        .arg("--output")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to overwrite input file"));

    assert_eq!(fs::read_to_string(&input).expect("read config"), "hostname SW\n");
}

#[test]
fn custom_profile_narrows_interface_types() {
    let dir = tempdir().expect("tempdir");
    let profile = dir.path().join("profile.toml");
    fs::write(&profile, r#"interface_types = ["TenGigabitEthernet"]"#).expect("write profile");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("switchport-audit"));
    cmd.arg("config")
        .arg(fixture("fixtures/configs/access-sw-01.cfg"))
        .arg("--profile")
        .arg(&profile)
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("profile: file:"))
        .stdout(predicate::str::contains("vlans=2 interfaces=1"))
        .stdout(predicate::str::contains("- TenGigabitEthernet1/1/1 mode=trunk"));
}

#[test]
fn byte_order_mark_does_not_hide_hostname() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("bom.cfg");
    fs::write(
        &input,
        b"\xef\xbb\xbfhostname BOM-SW\ninterface GigabitEthernet1/0/1\n",
    )
    .expect("write config");

    let output = Command::new(assert_cmd::cargo::cargo_bin!("switchport-audit"))
        .arg("config")
        .arg(&input)
        .arg("--format")
        .arg("json")
        .output()
        .expect("config output");
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("json parse");
    assert_eq!(report["switches"][0]["hostname"], "BOM-SW");
    assert_eq!(report["switches"][0]["interfaces"][0]["switch_hostname"], "BOM-SW");
}
