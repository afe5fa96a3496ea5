//! Processing metrics collection
//!
//! Records per-result metrics and aggregates them in memory for run
//! summaries.

use std::collections::HashMap;

use contracts::ProcessingResult;
use metrics::{counter, gauge, histogram};

/// Record metrics from one processing result
///
/// Call once per result, right after `process` returns.
///
/// # Example
///
/// ```ignore
/// use observability::metrics::record_operation;
///
/// let result = processor.process(value, operation);
/// record_operation(&result);
/// ```
pub fn record_operation(result: &ProcessingResult) {
    let status = if result.success { "success" } else { "failure" };

    counter!(
        "shapemill_operations_total",
        "operation" => result.meta.operation.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    if let Some(shape) = result.meta.input_type {
        counter!(
            "shapemill_inputs_total",
            "shape" => shape.to_string()
        )
        .increment(1);
    }

    if !result.success {
        counter!("shapemill_failures_total").increment(1);
    }

    histogram!("shapemill_processing_time_ms").record(result.processing_time_secs() * 1000.0);
}

/// Record the outcome of one plan step
pub fn record_step(step_name: &str, success: bool) {
    let status = if success { "success" } else { "failure" };
    counter!(
        "shapemill_steps_total",
        "step" => step_name.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record the history size after a run
pub fn record_history_len(len: usize) {
    gauge!("shapemill_history_records").set(len as f64);
}

/// Processing metrics aggregator
///
/// Aggregates results in memory for statistics and summary output.
#[derive(Debug, Clone, Default)]
pub struct OperationAggregator {
    /// Total processed calls
    pub total_operations: u64,

    /// Calls that produced no value
    pub total_failures: u64,

    /// Calls per operation name
    pub operation_counts: HashMap<String, u64>,

    /// Calls per classified input shape
    pub shape_counts: HashMap<String, u64>,

    /// Processing time statistics (milliseconds)
    pub time_stats: RunningStats,
}

impl OperationAggregator {
    /// Create a new aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one result into the aggregate
    pub fn update(&mut self, result: &ProcessingResult) {
        self.total_operations += 1;
        if !result.success {
            self.total_failures += 1;
        }

        *self
            .operation_counts
            .entry(result.meta.operation.to_string())
            .or_insert(0) += 1;

        if let Some(shape) = result.meta.input_type {
            *self.shape_counts.entry(shape.to_string()).or_insert(0) += 1;
        }

        self.time_stats.push(result.processing_time_secs() * 1000.0);
    }

    /// Produce a summary report
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            total_operations: self.total_operations,
            total_failures: self.total_failures,
            failure_rate: if self.total_operations > 0 {
                self.total_failures as f64 / self.total_operations as f64 * 100.0
            } else {
                0.0
            },
            processing_time_ms: StatsSummary::from(&self.time_stats),
            operation_counts: self.operation_counts.clone(),
        }
    }

    /// Reset all aggregates
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Metrics summary
#[derive(Debug, Clone, Default)]
pub struct MetricsSummary {
    pub total_operations: u64,
    pub total_failures: u64,
    pub failure_rate: f64,
    pub processing_time_ms: StatsSummary,
    pub operation_counts: HashMap<String, u64>,
}

impl std::fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Processing Metrics Summary ===")?;
        writeln!(f, "Total operations: {}", self.total_operations)?;
        writeln!(
            f,
            "Failures: {} ({:.2}%)",
            self.total_failures, self.failure_rate
        )?;
        writeln!(f, "Processing time (ms): {}", self.processing_time_ms)?;

        if !self.operation_counts.is_empty() {
            writeln!(f, "Operation counts:")?;
            let mut names: Vec<_> = self.operation_counts.iter().collect();
            names.sort();
            for (operation, count) in names {
                writeln!(f, "  {}: {}", operation, count)?;
            }
        }

        Ok(())
    }
}

/// Statistics summary
#[derive(Debug, Clone, Default)]
pub struct StatsSummary {
    pub count: u64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl From<&RunningStats> for StatsSummary {
    fn from(stats: &RunningStats) -> Self {
        Self {
            count: stats.count(),
            min: stats.min(),
            max: stats.max(),
            mean: stats.mean(),
            std_dev: stats.std_dev(),
        }
    }
}

impl std::fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.count == 0 {
            write!(f, "N/A")
        } else {
            write!(
                f,
                "min={:.3}, max={:.3}, mean={:.3}, std={:.3} (n={})",
                self.min, self.max, self.mean, self.std_dev, self.count
            )
        }
    }
}

/// Online statistics (Welford's algorithm)
#[derive(Debug, Clone, Default)]
pub struct RunningStats {
    count: u64,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl RunningStats {
    /// Fold in a new value
    pub fn push(&mut self, value: f64) {
        self.count += 1;

        if self.count == 1 {
            self.min = value;
            self.max = value;
            self.mean = value;
            self.m2 = 0.0;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);

            let delta = value - self.mean;
            self.mean += delta / self.count as f64;
            let delta2 = value - self.mean;
            self.m2 += delta * delta2;
        }
    }

    /// Sample count
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Mean
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.mean
        }
    }

    /// Sample variance
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    /// Standard deviation
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Minimum
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Maximum
    pub fn max(&self) -> f64 {
        self.max
    }
}
