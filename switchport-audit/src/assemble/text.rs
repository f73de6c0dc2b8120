use std::sync::LazyLock as Lazy;

use ios_config_core::ConfigLineIndex;
use regex::Regex;
use tracing::{debug, warn};

use crate::extract::extract_text_interface;
use crate::model::{Switch, SwitchSource};
use crate::profile::AuditProfile;
use crate::vlans::vlans_from_config;

static HOSTNAME_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^hostname").unwrap());
static HOSTNAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^hostname\s+(\S+)").unwrap());
static INTERFACE_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^interface\s(\S+)").unwrap());

/// Assemble a switch record from running-config text.
///
/// `origin` names the config (usually its file name) in diagnostics. A config
/// without a usable `hostname` line still produces a record, with the hostname
/// left absent and a warning logged.
pub fn assemble_text_switch(config: &str, origin: Option<&str>, profile: &AuditProfile) -> Switch {
    let index = ConfigLineIndex::new(config);

    let hostname = find_hostname(&index);
    if hostname.is_none() {
        match origin {
            Some(origin) => warn!(origin, "could not find the hostname in config"),
            None => warn!("could not find the hostname in config"),
        }
    }

    let vlans = vlans_from_config(&index);

    let interfaces: Vec<_> = index
        .find_all(&INTERFACE_HEADER)
        .into_iter()
        .filter(|block| {
            block
                .header_capture(&INTERFACE_HEADER)
                .is_some_and(|name| profile.audits_name(name))
        })
        .map(|block| extract_text_interface(&block, hostname.as_deref(), &vlans, profile))
        .collect();

    debug!(
        hostname = hostname.as_deref().unwrap_or("-"),
        vlans = vlans.len(),
        interfaces = interfaces.len(),
        "assembled switch from running-config"
    );

    Switch {
        hostname,
        vlans,
        interfaces,
        source: SwitchSource::Text(config.to_string()),
    }
}

fn find_hostname(index: &ConfigLineIndex) -> Option<String> {
    index
        .find_first(&HOSTNAME_LINE)
        .and_then(|block| block.header_capture(&HOSTNAME))
        .map(ToOwned::to_owned)
}
