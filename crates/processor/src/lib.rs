//! # Processor
//!
//! Dispatch layer: classify, transform, record.
//!
//! Responsibilities:
//! - Route classified payloads to the shape transforms
//! - Convert every failure into a failed result record, never a panic
//! - Keep the append-only processing history and its statistics
//! - Notify the configured event sink around each call
//!
//! ## Usage Example
//!
//! ```ignore
//! use contracts::Operation;
//! use processor::Processor;
//!
//! let mut processor = Processor::new();
//! let result = processor.process(serde_json::json!("hello"), Operation::Transform);
//! assert!(result.success);
//! assert_eq!(processor.statistics().total_operations, 1);
//! ```

mod history;
mod processor;
mod sinks;

pub use history::{History, Statistics};
pub use processor::Processor;
pub use sinks::TracingSink;
