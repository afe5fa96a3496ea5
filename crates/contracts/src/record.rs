//! ProcessingResult - per-call outcome record
//!
//! Exactly one of the two outcomes is present on every record: the
//! transformed value on success, an error description on failure.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Operation, Shape, ValueKind};

/// Outcome of one processing call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingResult {
    /// Whether the call produced a value
    pub success: bool,

    /// Transformed value, present exactly when `success` is true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Fields captured around the call
    pub meta: ProcessingMeta,

    /// Wall-clock capture time at invocation start (UTC)
    pub timestamp: DateTime<Utc>,
}

/// Descriptive fields for one processing call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingMeta {
    /// Requested operation
    pub operation: Operation,

    /// Classified input shape (absent when classification failed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<Shape>,

    /// Kind of the produced value (absent on failure)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_type: Option<ValueKind>,

    /// Error description, non-empty exactly when the call failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Elapsed processing time, measured on the monotonic clock
    pub processing_time: Duration,
}

impl ProcessingResult {
    /// Build a successful record
    pub fn ok(
        operation: Operation,
        input_type: Shape,
        data: Value,
        processing_time: Duration,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let output_type = ValueKind::of(&data);
        Self {
            success: true,
            data: Some(data),
            meta: ProcessingMeta {
                operation,
                input_type: Some(input_type),
                output_type: Some(output_type),
                error: None,
                processing_time,
            },
            timestamp,
        }
    }

    /// Build a failed record
    ///
    /// An empty error description is replaced with a fixed placeholder
    /// so failed records always explain themselves.
    pub fn failed(
        operation: Operation,
        input_type: Option<Shape>,
        error: impl Into<String>,
        processing_time: Duration,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let mut error = error.into();
        if error.is_empty() {
            error = "unspecified processing error".to_string();
        }
        Self {
            success: false,
            data: None,
            meta: ProcessingMeta {
                operation,
                input_type,
                output_type: None,
                error: Some(error),
                processing_time,
            },
            timestamp,
        }
    }

    /// Elapsed processing time in seconds
    pub fn processing_time_secs(&self) -> f64 {
        self.meta.processing_time.as_secs_f64()
    }

    /// Error description, if the call failed
    pub fn error(&self) -> Option<&str> {
        self.meta.error.as_deref()
    }
}
