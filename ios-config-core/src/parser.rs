use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::index::ConfigLineIndex;

/// Errors that can occur while loading configuration input.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read input file.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// Input was not a valid JSON document.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Index configuration text.
pub fn parse(text: &str) -> ConfigLineIndex {
    ConfigLineIndex::new(text)
}

/// Read a configuration dump from disk.
///
/// Bytes that are not valid UTF-8 (banners and MOTDs sometimes carry them) are
/// replaced rather than rejected. A leading byte-order mark is dropped.
pub fn read_config_file(path: &Path) -> Result<String, ParseError> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.strip_prefix('\u{feff}').unwrap_or(&text).to_string())
}

/// Read and index a configuration dump from disk.
pub fn parse_file(path: &Path) -> Result<ConfigLineIndex, ParseError> {
    let text = read_config_file(path)?;
    Ok(parse(&text))
}

/// Parse a JSON document. Empty or whitespace-only input yields an empty object.
pub fn parse_json(bytes: &[u8]) -> Result<Value, ParseError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    Ok(serde_json::from_slice(bytes)?)
}

/// Read and parse a JSON document from disk.
pub fn parse_json_file(path: &Path) -> Result<Value, ParseError> {
    let bytes = fs::read(path)?;
    parse_json(&bytes)
}
