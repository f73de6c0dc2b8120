use ios_config_core::{get_path, get_str};
use serde_json::{Map, Value};
use tracing::debug;

use crate::extract::extract_restconf_interface;
use crate::model::{Switch, SwitchSource};
use crate::profile::AuditProfile;
use crate::vlans::{vlans_from_restconf, VLAN_OPER_MODEL};

/// Key of the native configuration model in a RESTCONF document.
pub const NATIVE_MODEL: &str = "Cisco-IOS-XE-native:native";

/// Hostname recorded when the native model carries none.
pub const UNKNOWN_HOSTNAME: &str = "Unknown";

/// Assemble a switch record from a RESTCONF document.
///
/// `doc` is keyed by YANG model name and may carry the native configuration
/// (`Cisco-IOS-XE-native:native`), the VLAN operational data
/// (`Cisco-IOS-XE-vlan-oper:vlans`), both, or neither. Interfaces are emitted
/// type by type in document order, then in list order within each type.
pub fn assemble_restconf_switch(doc: &Value, profile: &AuditProfile) -> Switch {
    let hostname = get_str(doc, &[NATIVE_MODEL, "hostname"])
        .unwrap_or(UNKNOWN_HOSTNAME)
        .to_string();

    let vlans = vlans_from_restconf(doc);

    let mut interfaces = Vec::new();
    if let Some(by_type) = get_path(doc, &[NATIVE_MODEL, "interface"]).and_then(Value::as_object) {
        for (interface_type, ports) in by_type {
            if !profile.audits_type(interface_type) {
                continue;
            }
            let Some(ports) = ports.as_array() else {
                continue;
            };
            interfaces.extend(ports.iter().map(|port| {
                extract_restconf_interface(port, interface_type, Some(hostname.as_str()), &vlans)
            }));
        }
    }

    debug!(
        hostname = %hostname,
        vlans = vlans.len(),
        interfaces = interfaces.len(),
        "assembled switch from restconf"
    );

    Switch {
        hostname: Some(hostname),
        vlans,
        interfaces,
        source: SwitchSource::Restconf(doc.clone()),
    }
}

/// Combine separate native-config and VLAN responses into one document.
///
/// Each response is expected to be keyed by its model name; top-level keys of
/// `vlans` are added after those of `native`. Non-object inputs are ignored.
pub fn merge_restconf_documents(native: Value, vlans: Value) -> Value {
    let mut merged = Map::new();
    for doc in [native, vlans] {
        if let Value::Object(map) = doc {
            merged.extend(map);
        }
    }
    Value::Object(merged)
}

/// Whether a document carries the VLAN operational model.
pub fn has_vlan_model(doc: &Value) -> bool {
    get_path(doc, &[VLAN_OPER_MODEL]).is_some()
}
