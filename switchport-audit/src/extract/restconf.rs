use ios_config_core::{get_path, get_str, get_u32, has_key};
use serde_json::Value;

use crate::model::{Interface, RawConfig};
use crate::vlans::VlanTable;

const ACCESS: &str = "Cisco-IOS-XE-switch:access";
const VOICE: &str = "Cisco-IOS-XE-switch:voice";
const MODE: &str = "Cisco-IOS-XE-switch:mode";

/// Build an interface record from one entry of a native-model interface list.
///
/// The subtree only carries the port number in `name`; the type comes from the
/// list's key in the parent `interface` map and is passed in as
/// `interface_type`. ISE compliance is not evaluated for RESTCONF data.
pub fn extract_restconf_interface(
    subtree: &Value,
    interface_type: &str,
    hostname: Option<&str>,
    vlans: &VlanTable,
) -> Interface {
    let number = subtree
        .get("name")
        .map(leaf_to_string)
        .unwrap_or_default();

    let vlan_id = get_u32(subtree, &["switchport", ACCESS, "vlan", "vlan"]);
    let voice_vlan_id = get_u32(subtree, &["switchport", VOICE, "vlan", "vlan"]);
    let mode = get_path(subtree, &["switchport", MODE]);

    Interface {
        name: format!("{interface_type}{number}"),
        interface_type: interface_type.to_string(),
        description: get_str(subtree, &["description"]).map(ToOwned::to_owned),
        // Presence of the key is the whole signal; its value is always empty.
        admin_down: has_key(subtree, "shutdown"),
        is_access_port: mode.is_some_and(|mode| has_key(mode, "access")),
        is_trunk_port: mode.is_some_and(|mode| has_key(mode, "trunk")),
        vlan_id,
        vlan_name: vlans.resolve(vlan_id),
        voice_vlan_id,
        voice_vlan_name: vlans.resolve(voice_vlan_id),
        ise_compliant: None,
        switch_hostname: hostname.map(ToOwned::to_owned),
        raw_config: RawConfig::Json(subtree.clone()),
    }
}

// Port names are strings ("1/0/1") but single-number ports may arrive as numbers.
fn leaf_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
