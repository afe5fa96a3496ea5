//! `run` command implementation.

use anyhow::{Context, Result};
use tracing::info;

use processor::Processor;

use crate::cli::RunArgs;
use crate::driver::{Runner, RunnerConfig};

/// Execute the `run` command
pub fn run_plan(args: &RunArgs) -> Result<()> {
    info!(plan = %args.plan.display(), "Loading job plan");

    // Validate plan path
    if !args.plan.exists() {
        anyhow::bail!("Job plan file not found: {}", args.plan.display());
    }

    // Load and validate the plan
    let plan = config_loader::PlanLoader::load_from_path(&args.plan)
        .with_context(|| format!("Failed to load plan from {}", args.plan.display()))?;

    info!(
        job = %plan.job.name,
        steps = plan.steps.len(),
        "Job plan loaded"
    );

    // Initialize Metrics (optional)
    if args.metrics_port != 0 {
        observability::init_metrics_only(args.metrics_port)?;
        info!("Metrics endpoint available on port {}", args.metrics_port);
    }

    // One processor carries the plan's settings and the full history
    let mut processor = Processor::with_config(plan.processor.clone());

    let runner = Runner::new(RunnerConfig {
        plan,
        fail_fast: args.fail_fast,
    });

    info!("Starting run...");

    let stats = runner.run(&mut processor)?;

    info!(
        steps_run = stats.steps_run,
        steps_failed = stats.steps_failed,
        duration_secs = stats.duration.as_secs_f64(),
        "Run completed"
    );

    if args.json {
        let json = serde_json::to_string_pretty(&processor.history())
            .context("Failed to serialize result history")?;
        println!("{}", json);
    } else {
        stats.print_summary();
    }

    info!("Shapemill finished");
    Ok(())
}
