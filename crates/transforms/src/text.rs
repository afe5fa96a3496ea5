//! Text operations

use contracts::{ContractError, Operation};
use serde_json::{json, Value};

/// Apply one operation to text
///
/// `transform` uppercases, `parse` decodes structured text, `clean`
/// normalizes whitespace. Unrecognized operations return the input
/// unchanged.
pub fn apply(text: String, operation: &Operation) -> Result<Value, ContractError> {
    match operation {
        Operation::Transform => Ok(Value::String(text.to_uppercase())),
        Operation::Parse => Ok(parse(&text)),
        Operation::Clean => Ok(Value::String(clean(&text))),
        _ => Ok(Value::String(text)),
    }
}

/// Decode text as JSON
///
/// Malformed input degrades to a marker mapping instead of failing:
/// `{"raw": <input>, "parsed": false}`.
fn parse(text: &str) -> Value {
    match serde_json::from_str(text) {
        Ok(value) => value,
        Err(_) => json!({ "raw": text, "parsed": false }),
    }
}

/// Trim, then replace each newline and carriage return with one space
fn clean(text: &str) -> String {
    text.trim().replace('\n', " ").replace('\r', " ")
}
