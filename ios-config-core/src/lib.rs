//! Generic primitives for IOS-style configuration text and YANG JSON documents.
//!
//! Nothing in this crate knows about switches or VLANs; it only indexes
//! indentation-scoped configuration and walks JSON key paths.

pub mod block;
pub mod index;
pub mod json;
pub mod parser;

pub use block::ConfigBlock;
pub use index::ConfigLineIndex;
pub use json::{as_u32, get_path, get_str, get_u32, has_key};
pub use parser::{parse, parse_file, parse_json, parse_json_file, read_config_file, ParseError};
