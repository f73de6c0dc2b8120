//! Cisco switchport auditing from running-configs and RESTCONF data.
//!
//! Two sources feed one model. A running-config is indexed by indentation and
//! mined with line regexes; a RESTCONF document is walked by YANG key paths.
//! Both produce [`model::Switch`] records holding the switch's VLAN table and
//! its audited [`model::Interface`]s, with VLAN ids correlated to names.
//!
//! # Architecture
//!
//! ## Model
//!
//! - [`model`] — Switch, interface and VLAN records
//! - [`vlans`] — Per-switch VLAN tables and id-to-name lookup
//!
//! ## Extraction
//!
//! - [`extract`] — Per-interface extraction (running-config block or RESTCONF subtree)
//! - [`assemble`] — Per-switch assembly: hostname, VLANs, then interfaces
//!
//! ## Configuration
//!
//! - [`profile`] — Audited interface types, ISE lines, required YANG models
//! - [`capabilities`] — YANG model availability check
//!
//! ## Reporting
//!
//! - [`summary`] — Totals across switches
//! - [`report`] — Terminal and JSON output
//! - [`export`] — Rows grouped into one sheet per hostname
//! - [`inspect`] — Config hierarchy rendering
//!
//! # Examples
//!
//! ```
//! use switchport_audit::assemble::assemble_text_switch;
//! use switchport_audit::profile::AuditProfile;
//!
//! let config = "hostname SW1\nvlan 10\n name DATA\ninterface GigabitEthernet1/0/1\n switchport access vlan 10\n";
//! let switch = assemble_text_switch(config, None, &AuditProfile::default());
//! assert_eq!(switch.interfaces[0].vlan_name.as_deref(), Some("DATA"));
//! ```
//!
//! Transport (SSH, RESTCONF over HTTPS) is not part of this crate: callers
//! hand in text or JSON they have already fetched.

pub mod assemble;
pub mod capabilities;
pub mod export;
pub mod extract;
pub mod inspect;
pub mod model;
pub mod profile;
pub mod report;
pub mod summary;
pub mod vlans;
