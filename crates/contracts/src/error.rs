//! Layered error definitions
//!
//! Categorized by source: classify / decode / compare / config / load

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum ContractError {
    // ===== Classification Errors =====
    /// Input value falls outside the supported shapes
    #[error("unsupported data type: {type_name}")]
    Classification { type_name: String },

    // ===== Decode Errors =====
    /// Structured text could not be decoded
    #[error("decode error: {message}")]
    Decode { message: String },

    // ===== Comparison Errors =====
    /// Sequence elements cannot be ordered against each other
    #[error("comparison error: cannot compare {left} with {right}")]
    Comparison { left: String, right: String },

    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== Load Errors =====
    /// CSV row could not be read
    #[error("csv load error at line {line}: {message}")]
    CsvLoad { line: u64, message: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl ContractError {
    /// Create classification error
    pub fn classification(type_name: impl Into<String>) -> Self {
        Self::Classification {
            type_name: type_name.into(),
        }
    }

    /// Create decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create comparison error
    pub fn comparison(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::Comparison {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create CSV load error
    pub fn csv_load(line: u64, message: impl Into<String>) -> Self {
        Self::CsvLoad {
            line,
            message: message.into(),
        }
    }
}
