//! Processor - classify, dispatch, record

use std::time::Instant;

use chrono::Utc;
use contracts::{
    EventSink, Operation, Payload, ProcessingResult, ProcessorConfig, ValueKind,
};
use serde_json::Value;

use crate::history::{History, Statistics};
use crate::sinks::TracingSink;

/// Shape-dispatching processor with an append-only history
///
/// One instance belongs to one logical caller; the `&mut self` surface
/// makes that a compile-time property. Wrap in a mutex externally to
/// share across threads.
pub struct Processor {
    config: ProcessorConfig,
    history: History,
    sink: Box<dyn EventSink>,
}

impl Processor {
    /// Processor with empty settings and the tracing sink
    pub fn new() -> Self {
        Self::with_config(ProcessorConfig::default())
    }

    /// Processor carrying the given settings
    pub fn with_config(config: ProcessorConfig) -> Self {
        Self::with_sink(config, Box::new(TracingSink))
    }

    /// Processor notifying a custom event sink
    pub fn with_sink(config: ProcessorConfig, sink: Box<dyn EventSink>) -> Self {
        Self {
            config,
            history: History::new(),
            sink,
        }
    }

    /// Settings handed over at construction
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Process one value
    ///
    /// Classifies the input, applies the operation, appends the outcome
    /// to the history and returns it. Failures become failed records;
    /// this call itself cannot fail.
    pub fn process(&mut self, data: Value, operation: Operation) -> ProcessingResult {
        let timestamp = Utc::now();
        let started = Instant::now();

        self.sink.operation_started(&operation, ValueKind::of(&data));

        let result = match Payload::classify(data) {
            Ok(payload) => {
                let input_type = payload.shape();
                match transforms::apply(payload, &operation) {
                    Ok(output) => ProcessingResult::ok(
                        operation,
                        input_type,
                        output,
                        started.elapsed(),
                        timestamp,
                    ),
                    Err(error) => {
                        self.sink.operation_failed(&operation, &error);
                        ProcessingResult::failed(
                            operation,
                            Some(input_type),
                            error.to_string(),
                            started.elapsed(),
                            timestamp,
                        )
                    }
                }
            }
            Err(error) => {
                self.sink.operation_failed(&operation, &error);
                ProcessingResult::failed(
                    operation,
                    None,
                    error.to_string(),
                    started.elapsed(),
                    timestamp,
                )
            }
        };

        self.history.push(result.clone());
        result
    }

    /// Copy of the full processing history, oldest first
    pub fn history(&self) -> Vec<ProcessingResult> {
        self.history.snapshot()
    }

    /// Number of recorded calls
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Drop all recorded history; safe to call repeatedly
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Aggregate statistics over the recorded history
    pub fn statistics(&self) -> Statistics {
        self.history.statistics()
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::ContractError;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    /// Sink capturing event descriptions for assertions
    #[derive(Default, Clone)]
    struct RecordingSink {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl EventSink for RecordingSink {
        fn operation_started(&self, operation: &Operation, input_kind: ValueKind) {
            self.events
                .lock()
                .unwrap()
                .push(format!("started {operation} on {input_kind}"));
        }

        fn operation_failed(&self, operation: &Operation, error: &ContractError) {
            self.events
                .lock()
                .unwrap()
                .push(format!("failed {operation}: {error}"));
        }
    }

    #[test]
    fn test_process_text_transform() {
        let mut processor = Processor::new();
        let result = processor.process(json!("hello"), Operation::Transform);

        assert!(result.success);
        assert_eq!(result.data, Some(json!("HELLO")));
        assert_eq!(result.meta.input_type, Some(contracts::Shape::Text));
        assert_eq!(processor.history_len(), 1);
    }

    #[test]
    fn test_unsupported_input_records_failure() {
        let mut processor = Processor::new();
        let result = processor.process(json!(42), Operation::Transform);

        assert!(!result.success);
        assert!(result.data.is_none());
        assert_eq!(result.meta.input_type, None);
        assert_eq!(result.error(), Some("unsupported data type: number"));
        assert_eq!(processor.history_len(), 1);
    }

    #[test]
    fn test_sort_failure_is_a_failed_record() {
        let mut processor = Processor::new();
        let result = processor.process(json!([1, "two"]), Operation::Sort);

        assert!(!result.success);
        assert_eq!(result.meta.input_type, Some(contracts::Shape::Sequence));
        assert_eq!(
            result.error(),
            Some("comparison error: cannot compare number with text")
        );
    }

    #[test]
    fn test_unknown_operation_is_successful_passthrough() {
        let mut processor = Processor::new();
        let input = json!({"k": [1, null]});
        let result = processor.process(input.clone(), Operation::from("mystery"));

        assert!(result.success);
        assert_eq!(result.data, Some(input));
    }

    #[test]
    fn test_history_snapshot_is_independent() {
        let mut processor = Processor::new();
        processor.process(json!("a"), Operation::Transform);
        processor.process(json!("b"), Operation::Transform);

        let mut copy = processor.history();
        copy.clear();

        assert_eq!(processor.history_len(), 2);
    }

    #[test]
    fn test_statistics_track_failures() {
        let mut processor = Processor::new();
        processor.process(json!("ok"), Operation::Transform);
        processor.process(json!(true), Operation::Transform);

        let stats = processor.statistics();
        assert_eq!(stats.total_operations, 2);
        assert_eq!(stats.successful_operations, 1);
        assert_eq!(stats.success_rate, 0.5);
        assert!(stats.total_processing_time >= 0.0);
    }

    #[test]
    fn test_clear_history_resets_statistics() {
        let mut processor = Processor::new();
        processor.process(json!("x"), Operation::Transform);
        processor.clear_history();
        processor.clear_history();

        assert_eq!(processor.history_len(), 0);
        assert_eq!(processor.statistics(), Statistics::default());
    }

    #[test]
    fn test_custom_sink_sees_start_and_failure() {
        let sink = RecordingSink::default();
        let events = sink.events.clone();
        let mut processor = Processor::with_sink(ProcessorConfig::default(), Box::new(sink));

        processor.process(json!("fine"), Operation::Clean);
        processor.process(json!(null), Operation::Clean);

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], "started clean on text");
        assert_eq!(events[1], "started clean on null");
        assert!(events[2].starts_with("failed clean:"));
    }

    #[test]
    fn test_config_is_carried_verbatim() {
        let config: ProcessorConfig =
            serde_json::from_value(json!({"mode": "strict"})).unwrap();
        let processor = Processor::with_config(config);
        assert_eq!(processor.config().get("mode"), Some(&json!("strict")));
    }
}
