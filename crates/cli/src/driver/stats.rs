//! Run statistics and summary output.

use std::time::Duration;

use observability::OperationAggregator;
use processor::Statistics;

/// Statistics from a plan run
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Steps that completed successfully
    pub steps_run: usize,

    /// Steps that failed or whose input could not be resolved
    pub steps_failed: usize,

    /// Total duration of the run
    pub duration: Duration,

    /// Per-operation metrics aggregator
    pub aggregator: OperationAggregator,

    /// Aggregate statistics over the processor history
    pub statistics: Statistics,
}

impl RunStats {
    /// Steps attempted in total
    pub fn steps_total(&self) -> usize {
        self.steps_run + self.steps_failed
    }

    /// Calculate step failure rate as percentage
    pub fn failure_rate(&self) -> f64 {
        let total = self.steps_total();
        if total > 0 {
            (self.steps_failed as f64 / total as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Print detailed summary
    pub fn print_summary(&self) {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║                        Run Statistics                        ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");

        println!("📊 Overview");
        println!("   ├─ Duration: {:.2}s", self.duration.as_secs_f64());
        println!("   ├─ Steps run: {}", self.steps_run);
        println!("   ├─ Steps failed: {}", self.steps_failed);
        println!("   └─ Failure rate: {:.2}%", self.failure_rate());

        println!("\n📈 Processing History");
        println!(
            "   ├─ Total operations: {}",
            self.statistics.total_operations
        );
        println!(
            "   ├─ Successful: {}",
            self.statistics.successful_operations
        );
        println!(
            "   ├─ Success rate: {:.2}%",
            self.statistics.success_rate * 100.0
        );
        println!(
            "   ├─ Total processing time: {:.4}s",
            self.statistics.total_processing_time
        );
        println!(
            "   └─ Average processing time: {:.4}s",
            self.statistics.average_processing_time
        );

        let summary = self.aggregator.summary();

        if !summary.operation_counts.is_empty() {
            let mut names: Vec<_> = summary.operation_counts.iter().collect();
            names.sort();

            println!("\n🧮 Operation Counts");
            for (i, (operation, count)) in names.iter().enumerate() {
                let prefix = if i == names.len() - 1 { "└─" } else { "├─" };
                println!("   {} {}: {}", prefix, operation, count);
            }
        }

        if summary.processing_time_ms.count > 0 {
            println!("\n⏱️  Processing Time (ms)");
            println!("   ├─ Min: {:.3}", summary.processing_time_ms.min);
            println!("   ├─ Max: {:.3}", summary.processing_time_ms.max);
            println!("   ├─ Mean: {:.3}", summary.processing_time_ms.mean);
            println!("   └─ Std dev: {:.3}", summary.processing_time_ms.std_dev);
        }

        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_rate_empty_run_is_zero() {
        let stats = RunStats::default();
        assert_eq!(stats.failure_rate(), 0.0);
        assert_eq!(stats.steps_total(), 0);
    }

    #[test]
    fn test_failure_rate() {
        let stats = RunStats {
            steps_run: 3,
            steps_failed: 1,
            ..Default::default()
        };
        assert_eq!(stats.steps_total(), 4);
        assert!((stats.failure_rate() - 25.0).abs() < f64::EPSILON);
    }
}
