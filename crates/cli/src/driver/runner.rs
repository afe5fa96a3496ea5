//! Plan runner - drives every step through one processor.

use std::time::Instant;

use anyhow::{Context, Result};
use contracts::JobPlan;
use observability::{record_history_len, record_operation, record_step, OperationAggregator};
use processor::Processor;
use tracing::{info, warn};

use super::RunStats;

/// Runner configuration
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// The job plan to execute
    pub plan: JobPlan,

    /// Abort the run on the first failed step
    pub fail_fast: bool,
}

/// Executes a job plan step by step
///
/// Input resolution happens here; classification and transformation are
/// the processor's business. Every produced result lands in the
/// processor history, failed steps included.
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    /// Create a new runner with the given configuration
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Run every step to completion
    pub fn run(self, processor: &mut Processor) -> Result<RunStats> {
        let started = Instant::now();
        let mut aggregator = OperationAggregator::new();
        let mut stats = RunStats::default();

        let step_count = self.config.plan.steps.len();
        for (index, step) in self.config.plan.steps.iter().enumerate() {
            info!(
                step = %step.name,
                operation = %step.operation,
                progress = format!("{}/{}", index + 1, step_count),
                "Running step"
            );

            let data = match loaders::resolve_input(&step.input) {
                Ok(data) => data,
                Err(error) => {
                    record_step(&step.name, false);
                    stats.steps_failed += 1;
                    if self.config.fail_fast {
                        return Err(error).with_context(|| {
                            format!("Failed to resolve input for step '{}'", step.name)
                        });
                    }
                    warn!(
                        step = %step.name,
                        error = %error,
                        "Skipping step, input could not be resolved"
                    );
                    continue;
                }
            };

            let result = processor.process(data, step.operation.clone());
            record_operation(&result);
            record_step(&step.name, result.success);
            aggregator.update(&result);

            if result.success {
                stats.steps_run += 1;
            } else {
                stats.steps_failed += 1;
                if self.config.fail_fast {
                    anyhow::bail!(
                        "Step '{}' failed: {}",
                        step.name,
                        result.error().unwrap_or("unspecified processing error")
                    );
                }
                warn!(step = %step.name, "Step failed, continuing");
            }
        }

        record_history_len(processor.history_len());

        stats.duration = started.elapsed();
        stats.aggregator = aggregator;
        stats.statistics = processor.statistics();

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::{InputSpec, JobMeta, Operation, ProcessorConfig, StepConfig};
    use serde_json::json;

    fn plan_with_steps(steps: Vec<StepConfig>) -> JobPlan {
        JobPlan {
            job: JobMeta::default(),
            steps,
            processor: ProcessorConfig::new(),
        }
    }

    fn step(name: &str, operation: Operation, input: InputSpec) -> StepConfig {
        StepConfig {
            name: name.to_string(),
            operation,
            input,
        }
    }

    #[test]
    fn test_run_counts_successes_and_failures() {
        let plan = plan_with_steps(vec![
            step(
                "upper",
                Operation::Transform,
                InputSpec::Text {
                    text: "hello".to_string(),
                },
            ),
            step(
                "bad_sort",
                Operation::Sort,
                InputSpec::Inline {
                    value: json!([1, "two"]),
                },
            ),
            step(
                "dedupe",
                Operation::Unique,
                InputSpec::Inline {
                    value: json!([1, 1, 2]),
                },
            ),
        ]);

        let mut processor = Processor::new();
        let runner = Runner::new(RunnerConfig {
            plan,
            fail_fast: false,
        });

        let result = runner.run(&mut processor);
        assert!(result.is_ok(), "Failed: {:?}", result.err());
        let stats = result.unwrap();

        assert_eq!(stats.steps_run, 2);
        assert_eq!(stats.steps_failed, 1);
        assert_eq!(stats.statistics.total_operations, 3);
        assert_eq!(stats.statistics.successful_operations, 2);
        assert_eq!(stats.aggregator.total_failures, 1);
        assert_eq!(processor.history_len(), 3);
    }

    #[test]
    fn test_fail_fast_aborts_on_first_failure() {
        let plan = plan_with_steps(vec![
            step(
                "bad_sort",
                Operation::Sort,
                InputSpec::Inline {
                    value: json!([1, "two"]),
                },
            ),
            step(
                "never_runs",
                Operation::Transform,
                InputSpec::Text {
                    text: "hello".to_string(),
                },
            ),
        ]);

        let mut processor = Processor::new();
        let runner = Runner::new(RunnerConfig {
            plan,
            fail_fast: true,
        });

        let result = runner.run(&mut processor);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("bad_sort"));
        // The failed record made it into the history before the abort
        assert_eq!(processor.history_len(), 1);
    }

    #[test]
    fn test_unresolvable_input_counts_as_failed_step() {
        let plan = plan_with_steps(vec![
            step(
                "missing",
                Operation::Parse,
                InputSpec::JsonFile {
                    json_file: "does/not/exist.json".into(),
                },
            ),
            step(
                "upper",
                Operation::Transform,
                InputSpec::Text {
                    text: "still runs".to_string(),
                },
            ),
        ]);

        let mut processor = Processor::new();
        let runner = Runner::new(RunnerConfig {
            plan,
            fail_fast: false,
        });

        let stats = runner.run(&mut processor).unwrap();
        assert_eq!(stats.steps_run, 1);
        assert_eq!(stats.steps_failed, 1);
        // No record for the unresolvable input, only the processed step
        assert_eq!(processor.history_len(), 1);
    }
}
