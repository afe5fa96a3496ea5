//! Plan input resolution

use contracts::{ContractError, InputSpec};
use serde_json::Value;

/// Turn a step input into a processable value
///
/// CSV files load as a sequence of row mappings.
///
/// # Errors
/// Propagates loader failures; inline inputs cannot fail.
pub fn resolve_input(input: &InputSpec) -> Result<Value, ContractError> {
    match input {
        InputSpec::Inline { value } => Ok(value.clone()),
        InputSpec::Text { text } => Ok(Value::String(text.clone())),
        InputSpec::JsonFile { json_file } => crate::json::load_path(json_file),
        InputSpec::CsvFile { csv_file } => crate::csv::load_path(csv_file).map(Value::Array),
    }
}
