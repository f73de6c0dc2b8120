use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ios_config_core::parse_json_file;
use serde_json::{Map, Value};
use switchport_audit::assemble::{assemble_restconf_switch, has_vlan_model, merge_restconf_documents};
use switchport_audit::capabilities::check_yang_models;
use switchport_audit::profile::{load_profile_with_source, AuditProfile};
use tracing::{debug, warn};

use crate::cli::RestconfArgs;
use crate::output::emit_audit;

const NATIVE_FILE: &str = "native.json";
const VLANS_FILE: &str = "vlans.json";
const CAPABILITIES_FILE: &str = "capabilities.json";

pub fn run_restconf(args: RestconfArgs) -> Result<()> {
    let (profile, profile_source) = load_profile_with_source(args.options.profile.as_deref())?;

    let mut switches = Vec::new();
    let mut inputs: Vec<PathBuf> = Vec::new();
    for path in &args.paths {
        debug!(path = %path.display(), "auditing restconf data");
        let doc = if path.is_dir() {
            match load_switch_dir(path, &profile, &mut inputs)? {
                Some(doc) => doc,
                None => continue,
            }
        } else {
            inputs.push(path.clone());
            parse_json_file(path).with_context(|| format!("failed to parse {}", path.display()))?
        };

        if !has_vlan_model(&doc) {
            warn!(path = %path.display(), "no vlan data found; vlan names will be absent");
        }
        switches.push(assemble_restconf_switch(&doc, &profile));
    }

    let inputs: Vec<&Path> = inputs.iter().map(PathBuf::as_path).collect();
    emit_audit(&switches, &profile_source, &args.options, &inputs)
}

/// Load one switch directory, or `None` when its capabilities rule it out.
fn load_switch_dir(
    dir: &Path,
    profile: &AuditProfile,
    inputs: &mut Vec<PathBuf>,
) -> Result<Option<Value>> {
    let capabilities_path = dir.join(CAPABILITIES_FILE);
    if capabilities_path.is_file() {
        let capabilities = parse_json_file(&capabilities_path)
            .with_context(|| format!("failed to parse {}", capabilities_path.display()))?;
        let report = check_yang_models(&capabilities, &profile.required_yang_models);
        if !report.is_supported() {
            warn!(
                dir = %dir.display(),
                missing = ?report.missing,
                "skipping switch: required YANG models are not advertised"
            );
            return Ok(None);
        }
    }

    let native = read_optional_json(&dir.join(NATIVE_FILE), inputs)?;
    let vlans = read_optional_json(&dir.join(VLANS_FILE), inputs)?;
    Ok(Some(merge_restconf_documents(native, vlans)))
}

fn read_optional_json(path: &Path, inputs: &mut Vec<PathBuf>) -> Result<Value> {
    if !path.is_file() {
        return Ok(Value::Object(Map::new()));
    }
    inputs.push(path.to_path_buf());
    parse_json_file(path).with_context(|| format!("failed to parse {}", path.display()))
}
