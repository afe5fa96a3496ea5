//! EventSink trait - processor notification interface
//!
//! Defines the abstract interface for processing-event receivers.

use crate::{ContractError, Operation, ValueKind};

/// Processing event receiver
///
/// Supplied to the processor at construction. Calls are
/// fire-and-forget: sinks cannot fail and never influence results.
pub trait EventSink: Send {
    /// A value was accepted for processing
    fn operation_started(&self, operation: &Operation, input_kind: ValueKind);

    /// A call could not produce a value
    fn operation_failed(&self, operation: &Operation, error: &ContractError);
}

/// Sink that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn operation_started(&self, _operation: &Operation, _input_kind: ValueKind) {}

    fn operation_failed(&self, _operation: &Operation, _error: &ContractError) {}
}
