//! YANG model availability check over a `netconf-state/capabilities` response.

use ios_config_core::get_path;
use serde::Serialize;
use serde_json::Value;

const CAPABILITY_PATH: [&str; 2] = ["ietf-netconf-monitoring:capabilities", "capability"];

/// Which required models a device advertises.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CapabilityReport {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl CapabilityReport {
    pub fn is_supported(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Match each required model against the advertised capability URIs.
///
/// A model is matched when any capability string contains its name, which
/// covers both `urn:...?module=<model>&revision=...` and bare module entries.
/// A document without a capability list matches nothing.
pub fn check_yang_models<S: AsRef<str>>(doc: &Value, required: &[S]) -> CapabilityReport {
    let advertised: Vec<&str> = get_path(doc, &CAPABILITY_PATH)
        .and_then(Value::as_array)
        .map(|list| list.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut report = CapabilityReport::default();
    for model in required {
        let model = model.as_ref();
        if advertised.iter().any(|cap| cap.contains(model)) {
            report.matched.push(model.to_string());
        } else {
            report.missing.push(model.to_string());
        }
    }
    report
}

/// Render a one-line-per-field text summary.
pub fn render_capability_text(host: &str, report: &CapabilityReport) -> String {
    let status = if report.is_supported() { "supported" } else { "unsupported" };
    let mut out = vec![format!("host={host} status={status}")];
    out.push(format!("matched: {}", join_or_none(&report.matched)));
    out.push(format!("missing: {}", join_or_none(&report.missing)));
    out.join("\n")
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}
