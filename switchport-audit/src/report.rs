use colored::Colorize;
use serde::Serialize;

use crate::model::{Interface, Switch};
use crate::summary::{format_breakdown, format_totals, summarize, AuditSummary};

/// Machine-readable audit output.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport<'a> {
    pub profile_source: String,
    pub switches: &'a [Switch],
    pub summary: AuditSummary,
}

impl<'a> AuditReport<'a> {
    pub fn new(switches: &'a [Switch], profile_source: impl Into<String>) -> Self {
        Self {
            profile_source: profile_source.into(),
            switches,
            summary: summarize(switches),
        }
    }
}

/// Render every switch and its interfaces for terminal output.
pub fn render_switches(switches: &[Switch]) -> String {
    let mut out = Vec::new();
    for switch in switches {
        out.push(render_switch_header(switch));
        if switch.interfaces.is_empty() {
            out.push("- none".to_string());
        }
        for iface in &switch.interfaces {
            out.push(render_interface(iface));
        }
        out.push(String::new());
    }
    out.join("\n")
}

/// Render the totals line plus the per-port breakdown.
pub fn render_summary(summary: &AuditSummary) -> String {
    format!(
        "{}\n{}",
        format_totals(summary).cyan(),
        format_breakdown(summary)
    )
}

fn render_switch_header(switch: &Switch) -> String {
    let hostname = switch.hostname.as_deref().unwrap_or("<no hostname>");
    format!(
        "switch={} vlans={} interfaces={}",
        hostname.bold(),
        switch.vlans.len(),
        switch.interfaces.len()
    )
}

fn render_interface(iface: &Interface) -> String {
    let mut fields = vec![format!("- {}", iface.name)];

    let mode = match (iface.is_access_port, iface.is_trunk_port) {
        (true, _) => "access",
        (false, true) => "trunk",
        (false, false) => "other",
    };
    fields.push(format!("mode={mode}"));
    fields.push(format!("vlan={}", vlan_label(iface.vlan_id, iface.vlan_name.as_deref())));
    if iface.voice_vlan_id.is_some() {
        fields.push(format!(
            "voice={}",
            vlan_label(iface.voice_vlan_id, iface.voice_vlan_name.as_deref())
        ));
    }
    if iface.admin_down {
        fields.push("admin_down".yellow().to_string());
    }
    match iface.ise_compliant {
        Some(true) => fields.push("ise=ok".green().to_string()),
        Some(false) if iface.is_access_port => fields.push("ise=missing".red().to_string()),
        Some(false) => fields.push("ise=missing".to_string()),
        None => {}
    }
    if let Some(description) = &iface.description {
        fields.push(format!("description=\"{description}\""));
    }

    fields.join(" ")
}

fn vlan_label(id: Option<u32>, name: Option<&str>) -> String {
    match (id, name) {
        (Some(id), Some(name)) => format!("{id}({name})"),
        (Some(id), None) => format!("{id}(?)"),
        (None, _) => "-".to_string(),
    }
}
