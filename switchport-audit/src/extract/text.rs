use std::sync::LazyLock as Lazy;

use ios_config_core::ConfigBlock;
use regex::Regex;

use crate::model::{Interface, RawConfig};
use crate::profile::AuditProfile;
use crate::vlans::VlanTable;

static NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^interface\s+(\S+)").unwrap());
static DESCRIPTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*description\s*(.*)$").unwrap());
static SHUTDOWN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+shutdown$").unwrap());
static ACCESS_VLAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*switchport\saccess\svlan\s+(\d+)$").unwrap());
static VOICE_VLAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*switchport\svoice\svlan\s+(\d+)$").unwrap());
static MODE_ACCESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*switchport\smode\saccess$").unwrap());
static MODE_TRUNK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*switchport\smode\strunk$").unwrap());

/// Build an interface record from its running-config block.
///
/// `block` is the `interface ...` header plus its indented lines. Child-line
/// rules take the first matching line. `vlan_name` and `voice_vlan_name` are
/// looked up in `vlans` after the ids are parsed, so a captured id that does
/// not fit a `u32` is absent along with its name.
pub fn extract_text_interface(
    block: &ConfigBlock<'_>,
    hostname: Option<&str>,
    vlans: &VlanTable,
    profile: &AuditProfile,
) -> Interface {
    let name = block.header_capture(&NAME).unwrap_or_default().to_string();
    let interface_type = leading_alpha(&name).to_string();

    let vlan_id = parse_vlan(block.child_capture(&ACCESS_VLAN));
    let voice_vlan_id = parse_vlan(block.child_capture(&VOICE_VLAN));

    // Configs often carry `switchport access vlan` without the explicit mode line.
    let is_access_port = block.has_child(&MODE_ACCESS) || vlan_id.is_some();

    Interface {
        name,
        interface_type,
        description: block.child_capture(&DESCRIPTION).map(ToOwned::to_owned),
        admin_down: block.has_child(&SHUTDOWN),
        is_access_port,
        is_trunk_port: block.has_child(&MODE_TRUNK),
        vlan_id,
        vlan_name: vlans.resolve(vlan_id),
        voice_vlan_id,
        voice_vlan_name: vlans.resolve(voice_vlan_id),
        ise_compliant: Some(block.contains_lines(&profile.ise_required_lines)),
        switch_hostname: hostname.map(ToOwned::to_owned),
        raw_config: RawConfig::Text(block.to_text()),
    }
}

fn parse_vlan(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|id| id.parse().ok())
}

fn leading_alpha(name: &str) -> &str {
    let end = name
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(name.len());
    &name[..end]
}
