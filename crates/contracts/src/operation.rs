//! Operation - requested transformation names
//!
//! Operation names arrive as free-form strings from plans and callers.
//! Unrecognized names are preserved in [`Operation::Other`]; every
//! transform passes such inputs through unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A requested transformation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operation {
    /// Shape-specific default rewrite
    Transform,

    /// Decode text as structured data
    Parse,

    /// Normalize text whitespace
    Clean,

    /// Drop null entries
    Filter,

    /// Ascending order
    Sort,

    /// Structural deduplication
    Unique,

    /// Collapse nested mappings into joined keys
    Flatten,

    /// Unrecognized name, passed through untouched
    Other(String),
}

impl Operation {
    /// Wire/display name
    pub fn as_str(&self) -> &str {
        match self {
            Self::Transform => "transform",
            Self::Parse => "parse",
            Self::Clean => "clean",
            Self::Filter => "filter",
            Self::Sort => "sort",
            Self::Unique => "unique",
            Self::Flatten => "flatten",
            Self::Other(name) => name,
        }
    }

    /// Whether the name is one of the recognized operations
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Default for Operation {
    fn default() -> Self {
        Self::Transform
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Operation {
    fn from(name: &str) -> Self {
        match name {
            "transform" => Self::Transform,
            "parse" => Self::Parse,
            "clean" => Self::Clean,
            "filter" => Self::Filter,
            "sort" => Self::Sort,
            "unique" => Self::Unique,
            "flatten" => Self::Flatten,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Operation {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<Operation> for String {
    fn from(operation: Operation) -> Self {
        operation.as_str().to_string()
    }
}
