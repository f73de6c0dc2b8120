//! Tabular export rows, one sheet per switch hostname.

use serde::Serialize;

use crate::model::{Interface, Switch};

/// A flat interface row using the record's field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceRow {
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
    pub ise_compliant: Option<bool>,
    pub switch_hostname: Option<String>,
}

impl From<&Interface> for InterfaceRow {
    fn from(iface: &Interface) -> Self {
        Self {
            name: iface.name.clone(),
            interface_type: iface.interface_type.clone(),
            description: iface.description.clone(),
            admin_down: iface.admin_down,
            is_access_port: iface.is_access_port,
            is_trunk_port: iface.is_trunk_port,
            vlan_id: iface.vlan_id,
            vlan_name: iface.vlan_name.clone(),
            voice_vlan_id: iface.voice_vlan_id,
            voice_vlan_name: iface.voice_vlan_name.clone(),
            ise_compliant: iface.ise_compliant,
            switch_hostname: iface.switch_hostname.clone(),
        }
    }
}

/// All rows of one switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchSheet {
    pub sheet_name: String,
    pub rows: Vec<InterfaceRow>,
}

/// Build one sheet per switch, named after its hostname.
///
/// Switches without a hostname have no sheet name and are left out.
pub fn build_sheets(switches: &[Switch]) -> Vec<SwitchSheet> {
    switches
        .iter()
        .filter_map(|switch| {
            let sheet_name = switch.hostname.clone()?;
            Some(SwitchSheet {
                sheet_name,
                rows: switch.interfaces.iter().map(InterfaceRow::from).collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::build_sheets;
    use crate::assemble::assemble_text_switch;
    use crate::profile::AuditProfile;

    #[test]
    fn skips_switches_without_hostname() {
        let profile = AuditProfile::default();
        let named = assemble_text_switch(
            "hostname SW1\ninterface GigabitEthernet1/0/1\n description desk",
            None,
            &profile,
        );
        let unnamed = assemble_text_switch("interface GigabitEthernet1/0/1", None, &profile);

        let sheets = build_sheets(&[named, unnamed]);
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].sheet_name, "SW1");
        assert_eq!(sheets[0].rows[0].description.as_deref(), Some("desk"));
    }

    #[test]
    fn rows_serialize_with_record_field_names() {
        let switch = assemble_text_switch(
            "hostname SW1\ninterface GigabitEthernet1/0/1",
            None,
            &AuditProfile::default(),
        );
        let json = serde_json::to_value(build_sheets(&[switch])).expect("serialize");
        let row = &json[0]["rows"][0];
        assert_eq!(row["type"], "GigabitEthernet");
        assert!(row.get("raw_config").is_none());
        assert!(row["vlan_id"].is_null());
    }
}
