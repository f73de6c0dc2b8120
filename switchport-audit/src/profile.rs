use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Interface types audited when no profile overrides them.
pub const DEFAULT_INTERFACE_TYPES: [&str; 5] = [
    "FastEthernet",
    "GigabitEthernet",
    "TwoGigabitEthernet",
    "FiveGigabitEthernet",
    "TenGigabitEthernet",
];

/// Interface lines that together mark a port as ISE (802.1X + MAB) enabled.
pub const DEFAULT_ISE_REQUIRED_LINES: [&str; 3] = [
    " authentication priority dot1x mab",
    " authentication port-control auto",
    " mab",
];

/// YANG models a device must advertise before its RESTCONF data is audited.
pub const DEFAULT_REQUIRED_YANG_MODELS: [&str; 2] = ["Cisco-IOS-XE-native", "Cisco-IOS-XE-vlan-oper"];

/// Tunables of an audit run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuditProfile {
    /// Interface type names to audit; anything else is ignored.
    pub interface_types: Vec<String>,
    /// Exact interface lines (leading whitespace included) required for ISE compliance.
    pub ise_required_lines: Vec<String>,
    pub required_yang_models: Vec<String>,
}

impl Default for AuditProfile {
    fn default() -> Self {
        Self {
            interface_types: to_strings(&DEFAULT_INTERFACE_TYPES),
            ise_required_lines: to_strings(&DEFAULT_ISE_REQUIRED_LINES),
            required_yang_models: to_strings(&DEFAULT_REQUIRED_YANG_MODELS),
        }
    }
}

impl AuditProfile {
    /// Whether an interface type key is in the allow-list.
    pub fn audits_type(&self, interface_type: &str) -> bool {
        self.interface_types.iter().any(|t| t == interface_type)
    }

    /// Whether an interface name begins with an allow-listed type.
    pub fn audits_name(&self, name: &str) -> bool {
        self.interface_types
            .iter()
            .any(|t| name.starts_with(t.as_str()))
    }
}

/// Errors returned when loading profile files.
#[derive(Debug, Error)]
pub enum ProfileLoadError {
    #[error("failed to read profile {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse profile {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load a profile from a TOML file.
pub fn load_profile(path: &Path) -> Result<AuditProfile, ProfileLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| ProfileLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_profile(&raw, path.display().to_string())
}

/// Load the explicit profile if given, otherwise the embedded default.
///
/// Returns the profile and a description of where it came from.
pub fn load_profile_with_source(
    path: Option<&Path>,
) -> Result<(AuditProfile, String), ProfileLoadError> {
    match path {
        Some(path) => {
            let profile = load_profile(path)?;
            Ok((profile, format!("file:{}", path.display())))
        }
        None => Ok((default_profile(), "embedded".to_string())),
    }
}

/// Embedded default profile, falling back to the built-in constants.
pub fn default_profile() -> AuditProfile {
    let embedded = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/profiles/default.toml"));
    parse_profile(embedded, "embedded profile".to_string()).unwrap_or_default()
}

fn parse_profile(raw: &str, path: String) -> Result<AuditProfile, ProfileLoadError> {
    toml::from_str(raw).map_err(|source| ProfileLoadError::Parse { path, source })
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
