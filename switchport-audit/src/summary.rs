use serde::Serialize;

use crate::model::Switch;

/// Totals across every audited switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AuditSummary {
    pub switches: usize,
    pub switchports: usize,
    pub access_ports: usize,
    pub trunk_ports: usize,
    pub admin_down: usize,
    pub ise_compliant: usize,
    pub ise_noncompliant: usize,
    /// Ports whose VLAN id has no entry in their switch's VLAN table.
    pub unnamed_vlans: usize,
}

/// Count switches and switchports searched, with per-port breakdowns.
pub fn summarize(switches: &[Switch]) -> AuditSummary {
    let mut summary = AuditSummary {
        switches: switches.len(),
        ..AuditSummary::default()
    };

    for iface in switches.iter().flat_map(|switch| &switch.interfaces) {
        summary.switchports += 1;
        if iface.is_access_port {
            summary.access_ports += 1;
        }
        if iface.is_trunk_port {
            summary.trunk_ports += 1;
        }
        if iface.admin_down {
            summary.admin_down += 1;
        }
        match iface.ise_compliant {
            Some(true) => summary.ise_compliant += 1,
            Some(false) => summary.ise_noncompliant += 1,
            None => {}
        }
        if iface.vlan_id.is_some() && iface.vlan_name.is_none() {
            summary.unnamed_vlans += 1;
        }
    }

    summary
}

/// The classic one-line totals.
pub fn format_totals(summary: &AuditSummary) -> String {
    format!(
        "Searched - Total Switches: {} | Total Switchports: {}",
        summary.switches, summary.switchports
    )
}

/// Key=value breakdown of the summary.
pub fn format_breakdown(summary: &AuditSummary) -> String {
    format!(
        "access={} trunk={} admin_down={} ise_compliant={} ise_noncompliant={} unnamed_vlans={}",
        summary.access_ports,
        summary.trunk_ports,
        summary.admin_down,
        summary.ise_compliant,
        summary.ise_noncompliant,
        summary.unnamed_vlans
    )
}
