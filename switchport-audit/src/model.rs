//! Source-independent switch, VLAN and interface records.

use serde::Serialize;
use serde_json::Value;

use crate::vlans::VlanTable;

/// One VLAN definition on a switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vlan {
    pub id: u32,
    pub name: String,
}

impl Vlan {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The configuration an interface record was extracted from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawConfig {
    /// Interface block from a running-config, lines joined with `\n`.
    Text(String),
    /// Per-interface subtree of the `Cisco-IOS-XE-native` model.
    Json(Value),
}

/// A switchport as seen by the audit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interface {
    pub name: String,
    #[serde(rename = "type")]
    pub interface_type: String,
    pub description: Option<String>,
    pub admin_down: bool,
    pub is_access_port: bool,
    pub is_trunk_port: bool,
    pub vlan_id: Option<u32>,
    pub vlan_name: Option<String>,
    pub voice_vlan_id: Option<u32>,
    pub voice_vlan_name: Option<String>,
    /// Only evaluated for running-config input.
    pub ise_compliant: Option<bool>,
    pub switch_hostname: Option<String>,
    pub raw_config: RawConfig,
}

/// Where a switch record came from.
#[derive(Debug, Clone, PartialEq)]
pub enum SwitchSource {
    Text(String),
    /// Document keyed by YANG model name (`Cisco-IOS-XE-native:native`,
    /// `Cisco-IOS-XE-vlan-oper:vlans`).
    Restconf(Value),
}

/// Everything extracted for one audited device or config file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Switch {
    pub hostname: Option<String>,
    pub vlans: VlanTable,
    pub interfaces: Vec<Interface>,
    #[serde(skip_serializing)]
    pub source: SwitchSource,
}

impl Switch {
    /// Interfaces configured as access ports.
    pub fn access_ports(&self) -> impl Iterator<Item = &Interface> {
        self.interfaces.iter().filter(|iface| iface.is_access_port)
    }

    /// Access ports that were checked for ISE compliance and failed.
    pub fn ise_noncompliant_ports(&self) -> impl Iterator<Item = &Interface> {
        self.access_ports()
            .filter(|iface| iface.ise_compliant == Some(false))
    }
}
