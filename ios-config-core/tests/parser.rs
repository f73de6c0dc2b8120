use std::path::PathBuf;

use ios_config_core::{get_str, parse_file, parse_json_file, ParseError};
use pretty_assertions::assert_eq;
use regex::Regex;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn indexes_running_config_blocks() {
    let index = parse_file(&fixture("fixtures/configs/access-sw-01.cfg")).expect("parse config");

    let hostname = Regex::new(r"^hostname\s+(\S+)").expect("regex");
    let block = index.find_first(&hostname).expect("hostname line");
    assert_eq!(block.header_capture(&hostname), Some("ACCESS-SW-01"));
    assert!(block.children().is_empty());

    let interfaces = index.find_all(&Regex::new(r"^interface\s").expect("regex"));
    assert_eq!(interfaces.len(), 7);

    let desk = &interfaces[3];
    assert_eq!(desk.header(), "interface GigabitEthernet1/0/2");
    assert_eq!(desk.children().len(), 7);
    assert!(desk.contains_lines(&[" mab", " switchport voice vlan 20"]));
}

#[test]
fn vlan_blocks_need_a_name_child() {
    let index = parse_file(&fixture("fixtures/configs/access-sw-01.cfg")).expect("parse config");
    let header = Regex::new(r"^vlan\s+(\S+)$").expect("regex");
    let name = Regex::new(r"^\s+name\s+(\S+)$").expect("regex");

    let named: Vec<_> = index
        .find_with_child(&header, &name)
        .iter()
        .filter_map(|block| block.header_capture(&header))
        .collect();
    assert_eq!(named, ["10", "20"]);
}

#[test]
fn empty_config_has_no_blocks() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("empty.cfg");
    std::fs::write(&path, "").expect("write empty config");

    let index = parse_file(&path).expect("parse empty config");
    assert!(index.is_empty());
    assert!(index.find_first(&Regex::new(".*").expect("regex")).is_none());
}

#[test]
fn reads_restconf_documents() {
    let doc = parse_json_file(&fixture("fixtures/restconf/dist-sw-02.json")).expect("parse json");
    assert_eq!(
        get_str(&doc, &["Cisco-IOS-XE-native:native", "hostname"]),
        Some("DIST-SW-02")
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let err = parse_file(&fixture("fixtures/configs/absent.cfg")).expect_err("missing file");
    assert!(matches!(err, ParseError::Io(_)));
}
