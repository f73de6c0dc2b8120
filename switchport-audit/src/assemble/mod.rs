//! Per-switch assembly: hostname, then the VLAN table, then every audited
//! interface, in that order. Interface extraction reads the finished table.

pub mod restconf;
pub mod text;

pub use restconf::{
    assemble_restconf_switch, has_vlan_model, merge_restconf_documents, NATIVE_MODEL,
    UNKNOWN_HOSTNAME,
};
pub use text::assemble_text_switch;
