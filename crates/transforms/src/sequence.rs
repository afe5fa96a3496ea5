//! Sequence operations

use contracts::{ContractError, Operation, ValueKind};
use serde_json::Value;

/// Apply one operation to a sequence
///
/// `transform` uppercases string elements, `filter` drops nulls, `sort`
/// orders ascending, `unique` deduplicates keeping first occurrences.
/// Unrecognized operations return the input unchanged.
///
/// # Errors
/// Returns a comparison error when `sort` meets mixed or unorderable
/// element kinds.
pub fn apply(items: Vec<Value>, operation: &Operation) -> Result<Value, ContractError> {
    match operation {
        Operation::Transform => Ok(Value::Array(transform(items))),
        Operation::Filter => Ok(Value::Array(filter(items))),
        Operation::Sort => Ok(Value::Array(sort(items)?)),
        Operation::Unique => Ok(Value::Array(unique(items))),
        _ => Ok(Value::Array(items)),
    }
}

/// Uppercase string elements, pass everything else through
fn transform(items: Vec<Value>) -> Vec<Value> {
    items
        .into_iter()
        .map(|item| match item {
            Value::String(text) => Value::String(text.to_uppercase()),
            other => other,
        })
        .collect()
}

/// Drop null elements, preserving relative order
fn filter(items: Vec<Value>) -> Vec<Value> {
    items.into_iter().filter(|item| !item.is_null()).collect()
}

/// Sort ascending
///
/// Sequences shorter than two elements involve no comparisons and pass
/// through as-is. Otherwise all elements must share one orderable kind:
/// numbers order by value, strings lexicographically, booleans
/// false-before-true.
fn sort(mut items: Vec<Value>) -> Result<Vec<Value>, ContractError> {
    if items.len() < 2 {
        return Ok(items);
    }

    let first = ValueKind::of(&items[0]);
    if let Some(other) = items.iter().map(ValueKind::of).find(|kind| *kind != first) {
        return Err(ContractError::comparison(first.as_str(), other.as_str()));
    }

    match first {
        ValueKind::Number => {
            items.sort_by(|a, b| {
                let left = a.as_f64().unwrap_or(f64::NAN);
                let right = b.as_f64().unwrap_or(f64::NAN);
                left.total_cmp(&right)
            });
            Ok(items)
        }
        ValueKind::Text => {
            items.sort_by(|a, b| a.as_str().cmp(&b.as_str()));
            Ok(items)
        }
        ValueKind::Bool => {
            items.sort_by_key(|item| item.as_bool());
            Ok(items)
        }
        kind => Err(ContractError::comparison(kind.as_str(), kind.as_str())),
    }
}

/// Deduplicate by structural equality, keeping first occurrences
///
/// Equality is exact: numbers must match in value and representation,
/// containers compare element-wise.
fn unique(items: Vec<Value>) -> Vec<Value> {
    let mut kept: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        if !kept.contains(&item) {
            kept.push(item);
        }
    }
    kept
}
