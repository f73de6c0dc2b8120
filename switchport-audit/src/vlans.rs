//! Per-switch VLAN tables and id-to-name correlation.
//!
//! A table keeps every definition in the order it was read; duplicate ids are
//! not merged. Lookups return the first matching entry, so the earliest
//! definition of a duplicated id wins.

use std::sync::LazyLock as Lazy;

use ios_config_core::{as_u32, get_path, ConfigLineIndex};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::model::Vlan;

/// Key of the VLAN operational model in a RESTCONF document.
pub const VLAN_OPER_MODEL: &str = "Cisco-IOS-XE-vlan-oper:vlans";

static VLAN_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^vlan\s+(\S+)$").unwrap());
static VLAN_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+name\s+(\S+)$").unwrap());

/// Ordered `(id, name)` pairs scoped to one switch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VlanTable {
    entries: Vec<Vlan>,
}

impl VlanTable {
    pub fn new(entries: Vec<Vlan>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Vlan] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vlan> {
        self.entries.iter()
    }

    /// Name of the first VLAN carrying `id`.
    pub fn name_of(&self, id: u32) -> Option<&str> {
        self.entries
            .iter()
            .find(|vlan| vlan.id == id)
            .map(|vlan| vlan.name.as_str())
    }

    /// Resolve an optional id; absent ids and unknown ids both yield `None`.
    pub fn resolve(&self, id: Option<u32>) -> Option<String> {
        id.and_then(|id| self.name_of(id)).map(ToOwned::to_owned)
    }
}

impl FromIterator<Vlan> for VlanTable {
    fn from_iter<I: IntoIterator<Item = Vlan>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Build a table from every top-level `vlan <id>` block that has a `name` child.
///
/// Blocks whose id is not an unsigned integer are skipped with a warning.
pub fn vlans_from_config(index: &ConfigLineIndex) -> VlanTable {
    index
        .find_with_child(&VLAN_HEADER, &VLAN_NAME)
        .into_iter()
        .filter_map(|block| {
            let raw_id = block.header_capture(&VLAN_HEADER)?;
            let name = block.child_capture(&VLAN_NAME)?;
            match raw_id.parse::<u32>() {
                Ok(id) => Some(Vlan::new(id, name)),
                Err(_) => {
                    warn!(line = block.header(), "skipping vlan with non-numeric id");
                    None
                }
            }
        })
        .collect()
}

/// Build a table from a `Cisco-IOS-XE-vlan-oper:vlans` document.
///
/// Accepts either the full document or the bare model object. Entries without
/// an integer `id` or a string `name` are skipped with a warning.
pub fn vlans_from_restconf(doc: &Value) -> VlanTable {
    let list = get_path(doc, &[VLAN_OPER_MODEL, "vlan"])
        .or_else(|| get_path(doc, &["vlan"]))
        .and_then(Value::as_array);

    let Some(list) = list else {
        return VlanTable::default();
    };

    list.iter()
        .filter_map(|entry| {
            let id = entry.get("id").and_then(as_u32);
            let name = entry.get("name").and_then(Value::as_str);
            match (id, name) {
                (Some(id), Some(name)) => Some(Vlan::new(id, name)),
                _ => {
                    warn!(entry = %entry, "skipping malformed vlan entry");
                    None
                }
            }
        })
        .collect()
}
