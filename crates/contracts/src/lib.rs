//! # Contracts
//!
//! Frozen interface contracts, defining inter-module data structures and traits.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Time Model
//! - Wall-clock capture timestamps are UTC (`chrono`)
//! - Elapsed processing time is measured on the monotonic clock

mod error;
mod operation;
mod payload;
mod plan;
mod record;
mod sink;

pub use error::*;
pub use operation::Operation;
pub use payload::{Payload, Shape, ValueKind};
pub use plan::*;
pub use record::{ProcessingMeta, ProcessingResult};
pub use sink::{EventSink, NullSink};
