//! `info` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use contracts::InputSpec;

use crate::cli::InfoArgs;

/// Plan info for JSON output
#[derive(Serialize)]
struct PlanInfo {
    job: JobInfo,
    step_count: usize,
    operations: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    steps: Vec<StepInfo>,
    processor_settings: usize,
}

#[derive(Serialize)]
struct JobInfo {
    name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    description: String,
}

#[derive(Serialize)]
struct StepInfo {
    name: String,
    operation: String,
    input: String,
}

/// Execute the `info` command
pub fn run_info(args: &InfoArgs) -> Result<()> {
    info!(plan = %args.plan.display(), "Loading job plan info");

    if !args.plan.exists() {
        anyhow::bail!("Job plan file not found: {}", args.plan.display());
    }

    let plan = config_loader::PlanLoader::load_from_path(&args.plan)
        .with_context(|| format!("Failed to load plan from {}", args.plan.display()))?;

    if args.json {
        let info = build_plan_info(&plan, args);
        let json = serde_json::to_string_pretty(&info).context("Failed to serialize plan info")?;
        println!("{}", json);
    } else {
        print_plan_info(&plan, args);
    }

    Ok(())
}

fn build_plan_info(plan: &contracts::JobPlan, args: &InfoArgs) -> PlanInfo {
    let steps = if args.steps {
        plan.steps
            .iter()
            .map(|step| StepInfo {
                name: step.name.clone(),
                operation: step.operation.to_string(),
                input: describe_input(&step.input),
            })
            .collect()
    } else {
        Vec::new()
    };

    PlanInfo {
        job: JobInfo {
            name: plan.job.name.clone(),
            description: plan.job.description.clone(),
        },
        step_count: plan.steps.len(),
        operations: distinct_operations(plan),
        steps,
        processor_settings: plan.processor.len(),
    }
}

/// Distinct operation names in step order
fn distinct_operations(plan: &contracts::JobPlan) -> Vec<String> {
    let mut operations: Vec<String> = Vec::new();
    for operation in plan.operations() {
        let name = operation.to_string();
        if !operations.contains(&name) {
            operations.push(name);
        }
    }
    operations
}

fn describe_input(input: &InputSpec) -> String {
    match input {
        InputSpec::Inline { .. } => "inline value".to_string(),
        InputSpec::Text { .. } => "inline text".to_string(),
        InputSpec::JsonFile { json_file } => format!("json file: {}", json_file.display()),
        InputSpec::CsvFile { csv_file } => format!("csv file: {}", csv_file.display()),
    }
}

fn print_plan_info(plan: &contracts::JobPlan, args: &InfoArgs) {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Shapemill Job Plan                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    // Job info
    println!("📋 Job");
    if plan.job.name.is_empty() {
        println!("   ├─ Name: (unnamed)");
    } else {
        println!("   ├─ Name: {}", plan.job.name);
    }
    if !plan.job.description.is_empty() {
        println!("   ├─ Description: {}", plan.job.description);
    }
    println!("   └─ Operations: {}", distinct_operations(plan).join(", "));

    // Steps
    println!("\n🧩 Steps ({})", plan.steps.len());
    for (i, step) in plan.steps.iter().enumerate() {
        let is_last = i == plan.steps.len() - 1;
        let prefix = if is_last { "└─" } else { "├─" };
        let child_prefix = if is_last { "   " } else { "│  " };

        println!("   {} {} ({})", prefix, step.name, step.operation);

        if args.steps {
            println!("   {}  └─ {}", child_prefix, describe_input(&step.input));
        }
    }

    // Processor settings
    if !plan.processor.is_empty() {
        println!("\n⚙️  Processor Settings ({})", plan.processor.len());
        for (i, (key, value)) in plan.processor.0.iter().enumerate() {
            let is_last = i == plan.processor.len() - 1;
            let prefix = if is_last { "└─" } else { "├─" };
            println!("   {} {}: {}", prefix, key, value);
        }
    }

    println!();
}
