//! Recursive key flattener
//!
//! Collapses arbitrarily nested mappings into a single level by joining
//! key paths with a separator. Only mapping values recurse; sequences
//! and scalars are carried as-is.

use serde_json::{Map, Value};

/// Separator used when none is specified
pub const DEFAULT_SEPARATOR: &str = "_";

/// Flatten a nested mapping into joined keys
///
/// `parent_key` prefixes every produced key; pass `""` for none. Keys
/// that collide after joining resolve last-write-wins in iteration
/// order. Values are trees, so recursion depth is bounded by input
/// nesting.
pub fn flatten(
    entries: &Map<String, Value>,
    parent_key: &str,
    separator: &str,
) -> Map<String, Value> {
    let mut flat = Map::new();
    collect(entries, parent_key, separator, &mut flat);
    flat
}

fn collect(
    entries: &Map<String, Value>,
    parent_key: &str,
    separator: &str,
    into: &mut Map<String, Value>,
) {
    for (key, value) in entries {
        let joined = if parent_key.is_empty() {
            key.clone()
        } else {
            format!("{parent_key}{separator}{key}")
        };
        match value {
            Value::Object(nested) => collect(nested, &joined, separator, into),
            other => {
                into.insert(joined, other.clone());
            }
        }
    }
}
