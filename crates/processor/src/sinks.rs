//! Built-in event sinks

use contracts::{ContractError, EventSink, Operation, ValueKind};
use tracing::{error, info};

/// Sink forwarding processor events to `tracing`
///
/// The default sink; swap in any [`EventSink`] at construction to
/// observe the processor differently.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn operation_started(&self, operation: &Operation, input_kind: ValueKind) {
        info!(operation = %operation, input = %input_kind, "Processing data");
    }

    fn operation_failed(&self, operation: &Operation, error: &ContractError) {
        error!(operation = %operation, error = %error, "Error processing data");
    }
}
