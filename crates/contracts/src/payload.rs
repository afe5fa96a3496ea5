//! Payload - classified input values
//!
//! A value is classified exactly once at the processor boundary; every
//! downstream transform receives an already-shaped payload.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ContractError;

/// The three input shapes the processor accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Free-form text
    Text,

    /// Ordered list of values
    Sequence,

    /// Key/value mapping
    Mapping,
}

impl Shape {
    /// Wire/display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type tag for any value, supported or not
///
/// [`Shape`] names what the processor accepts; `ValueKind` tags what a
/// value actually is, including the kinds rejected at classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    Text,
    Sequence,
    Mapping,
}

impl ValueKind {
    /// Tag a value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::Text,
            Value::Array(_) => Self::Sequence,
            Value::Object(_) => Self::Mapping,
        }
    }

    /// Wire/display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::Text => "text",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified input value
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Free-form text
    Text(String),

    /// Ordered list of values
    Sequence(Vec<Value>),

    /// Key/value mapping (key-sorted iteration order)
    Mapping(Map<String, Value>),
}

impl Payload {
    /// Classify a raw value into a supported shape
    ///
    /// # Errors
    /// Returns a classification error for null, boolean and number
    /// inputs.
    pub fn classify(value: Value) -> Result<Self, ContractError> {
        match value {
            Value::String(text) => Ok(Self::Text(text)),
            Value::Array(items) => Ok(Self::Sequence(items)),
            Value::Object(entries) => Ok(Self::Mapping(entries)),
            other => Err(ContractError::classification(ValueKind::of(&other).as_str())),
        }
    }

    /// Shape tag of this payload
    pub fn shape(&self) -> Shape {
        match self {
            Self::Text(_) => Shape::Text,
            Self::Sequence(_) => Shape::Sequence,
            Self::Mapping(_) => Shape::Mapping,
        }
    }
}
