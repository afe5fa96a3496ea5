//! Mapping operations

use contracts::{ContractError, Operation};
use serde_json::{Map, Value};

use crate::flatten::{flatten, DEFAULT_SEPARATOR};

/// Apply one operation to a mapping
///
/// `transform` uppercases keys, `filter` drops null-valued entries,
/// `flatten` collapses nesting with the default separator. Unrecognized
/// operations return the input unchanged.
pub fn apply(entries: Map<String, Value>, operation: &Operation) -> Result<Value, ContractError> {
    match operation {
        Operation::Transform => Ok(Value::Object(transform(entries))),
        Operation::Filter => Ok(Value::Object(filter(entries))),
        Operation::Flatten => Ok(Value::Object(flatten(&entries, "", DEFAULT_SEPARATOR))),
        _ => Ok(Value::Object(entries)),
    }
}

/// Uppercase keys, values untouched
///
/// Keys colliding after uppercasing resolve last-write-wins in
/// iteration order.
fn transform(entries: Map<String, Value>) -> Map<String, Value> {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_uppercase(), value))
        .collect()
}

/// Drop entries whose value is null
fn filter(entries: Map<String, Value>) -> Map<String, Value> {
    entries
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(value: Value, operation: &Operation) -> Value {
        match value {
            Value::Object(entries) => apply(entries, operation).unwrap(),
            other => panic!("not a mapping: {other:?}"),
        }
    }

    #[test]
    fn test_transform_uppercases_keys() {
        assert_eq!(
            run(json!({"name": "alice", "age": 30}), &Operation::Transform),
            json!({"NAME": "alice", "AGE": 30})
        );
    }

    #[test]
    fn test_transform_collision_last_write_wins() {
        assert_eq!(
            run(json!({"A": 2, "a": 1}), &Operation::Transform),
            json!({"A": 1})
        );
    }

    #[test]
    fn test_filter_drops_null_values() {
        assert_eq!(
            run(json!({"keep": 1, "drop": null, "also": "x"}), &Operation::Filter),
            json!({"keep": 1, "also": "x"})
        );
    }

    #[test]
    fn test_flatten_uses_default_separator() {
        assert_eq!(
            run(json!({"user": {"name": "bob", "address": {"city": "rome"}}}), &Operation::Flatten),
            json!({"user_name": "bob", "user_address_city": "rome"})
        );
    }

    #[test]
    fn test_unknown_operation_passes_through() {
        assert_eq!(
            run(json!({"k": null}), &Operation::Sort),
            json!({"k": null})
        );
    }
}
