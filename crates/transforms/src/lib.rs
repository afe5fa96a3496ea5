//! # Shape Transforms
//!
//! Pure transformation functions, one module per input shape.
//!
//! Responsibilities:
//! - Interpret an [`Operation`] against a classified [`Payload`]
//! - Pass unrecognized operations through unchanged
//! - Report unorderable sort inputs as errors instead of panicking
//!
//! Every function is synchronous and side-effect free; all logging and
//! history bookkeeping happens in the processor layer.
//!
//! ## Usage Example
//!
//! ```ignore
//! use contracts::{Operation, Payload};
//!
//! let payload = Payload::classify(serde_json::json!([3, 1, 2]))?;
//! let sorted = transforms::apply(payload, &Operation::Sort)?;
//! assert_eq!(sorted, serde_json::json!([1, 2, 3]));
//! ```

pub mod flatten;
pub mod mapping;
pub mod sequence;
pub mod text;

use contracts::{ContractError, Operation, Payload};
use serde_json::Value;

pub use flatten::{flatten, DEFAULT_SEPARATOR};

/// Apply one operation to a classified payload
///
/// # Errors
/// Returns a comparison error when `sort` meets unorderable elements;
/// every other combination succeeds.
pub fn apply(payload: Payload, operation: &Operation) -> Result<Value, ContractError> {
    match payload {
        Payload::Text(text) => text::apply(text, operation),
        Payload::Sequence(items) => sequence::apply(items, operation),
        Payload::Mapping(entries) => mapping::apply(entries, operation),
    }
}
