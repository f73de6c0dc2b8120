//! Per-interface extraction from running-config blocks and RESTCONF subtrees.
//!
//! Both extractors are pure: they read one interface's configuration plus the
//! owning switch's already-built VLAN table and return a complete record.
//! Anything the source does not mention comes back as `None` or `false`.

pub mod restconf;
pub mod text;

pub use restconf::extract_restconf_interface;
pub use text::extract_text_interface;
