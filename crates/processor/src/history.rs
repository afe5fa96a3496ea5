//! Processing history and aggregate statistics

use contracts::ProcessingResult;
use serde::Serialize;

/// Append-only record of every processing call
///
/// Grows without bound until cleared; insertion order is call order.
#[derive(Debug, Default)]
pub struct History {
    records: Vec<ProcessingResult>,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one outcome
    pub fn push(&mut self, record: ProcessingResult) {
        self.records.push(record);
    }

    /// Copy of all records, oldest first
    ///
    /// The copy is independent; mutating it cannot touch the recorded
    /// history.
    pub fn snapshot(&self) -> Vec<ProcessingResult> {
        self.records.clone()
    }

    /// Number of recorded calls
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Aggregate counters over the recorded calls
    pub fn statistics(&self) -> Statistics {
        if self.records.is_empty() {
            return Statistics::default();
        }

        let total_operations = self.records.len();
        let successful_operations = self.records.iter().filter(|r| r.success).count();
        let total_processing_time: f64 = self
            .records
            .iter()
            .map(ProcessingResult::processing_time_secs)
            .sum();

        Statistics {
            total_operations,
            successful_operations,
            success_rate: successful_operations as f64 / total_operations as f64,
            total_processing_time,
            average_processing_time: total_processing_time / total_operations as f64,
        }
    }
}

/// Aggregate statistics over a processing history
///
/// All counters are zero while the history is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Statistics {
    /// Recorded calls, failed ones included
    pub total_operations: usize,

    /// Calls that produced a value
    pub successful_operations: usize,

    /// `successful_operations / total_operations`
    pub success_rate: f64,

    /// Sum of per-call processing time, in seconds
    pub total_processing_time: f64,

    /// `total_processing_time / total_operations`, in seconds
    pub average_processing_time: f64,
}
