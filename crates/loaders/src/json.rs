//! Structured text decoding

use std::path::Path;

use contracts::ContractError;
use serde_json::Value;

/// Decode text as JSON
///
/// # Errors
/// Returns a decode error describing the malformed input.
pub fn decode(text: &str) -> Result<Value, ContractError> {
    serde_json::from_str(text).map_err(|e| ContractError::decode(e.to_string()))
}

/// Load and decode a JSON document
///
/// # Errors
/// Fails when the file cannot be read or does not decode.
pub fn load_path(path: impl AsRef<Path>) -> Result<Value, ContractError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    decode(&text)
}
