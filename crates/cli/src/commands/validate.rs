//! `validate` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::ValidateArgs;

/// Validation result for JSON output
#[derive(Serialize)]
struct ValidationResult {
    valid: bool,
    plan_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<PlanSummary>,
}

#[derive(Serialize)]
struct PlanSummary {
    name: String,
    step_count: usize,
    operations: Vec<String>,
    inline_inputs: usize,
    file_inputs: usize,
}

/// Execute the `validate` command
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    info!(plan = %args.plan.display(), "Validating job plan");

    let result = validate_plan(args);

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize validation result")?;
        println!("{}", json);
    } else {
        print_validation_result(&result);
    }

    if result.valid {
        Ok(())
    } else {
        anyhow::bail!("Job plan validation failed")
    }
}

fn validate_plan(args: &ValidateArgs) -> ValidationResult {
    let plan_path = args.plan.display().to_string();

    // Check file exists
    if !args.plan.exists() {
        return ValidationResult {
            valid: false,
            plan_path,
            error: Some(format!("File not found: {}", args.plan.display())),
            warnings: None,
            summary: None,
        };
    }

    // Try to load and validate
    match config_loader::PlanLoader::load_from_path(&args.plan) {
        Ok(plan) => {
            let warnings = collect_warnings(&plan);
            let mut operations: Vec<String> = Vec::new();
            for operation in plan.operations() {
                let name = operation.to_string();
                if !operations.contains(&name) {
                    operations.push(name);
                }
            }
            let file_inputs = plan
                .steps
                .iter()
                .filter(|step| step.input.path().is_some())
                .count();

            ValidationResult {
                valid: true,
                plan_path,
                error: None,
                warnings: if warnings.is_empty() {
                    None
                } else {
                    Some(warnings)
                },
                summary: Some(PlanSummary {
                    name: plan.job.name.clone(),
                    step_count: plan.steps.len(),
                    operations,
                    inline_inputs: plan.steps.len() - file_inputs,
                    file_inputs,
                }),
            }
        }
        Err(e) => ValidationResult {
            valid: false,
            plan_path,
            error: Some(e.to_string()),
            warnings: None,
            summary: None,
        },
    }
}

/// Collect plan warnings (non-fatal issues)
fn collect_warnings(plan: &contracts::JobPlan) -> Vec<String> {
    let mut warnings = Vec::new();

    if plan.job.name.is_empty() {
        warnings.push("job.name is empty - run summaries will carry a blank name".to_string());
    }

    for step in &plan.steps {
        if !step.operation.is_known() {
            warnings.push(format!(
                "Step '{}' requests unknown operation '{}' - input will pass through unchanged",
                step.name, step.operation
            ));
        }

        if let Some(path) = step.input.path() {
            if !path.exists() {
                warnings.push(format!(
                    "Step '{}' input file not found: {}",
                    step.name,
                    path.display()
                ));
            }
        }
    }

    warnings
}

fn print_validation_result(result: &ValidationResult) {
    if result.valid {
        println!("✓ Job plan is valid: {}", result.plan_path);

        if let Some(ref summary) = result.summary {
            println!("\n  Name: {}", summary.name);
            println!("  Steps: {}", summary.step_count);
            println!("  Operations: {}", summary.operations.join(", "));
            println!("  Inline inputs: {}", summary.inline_inputs);
            println!("  File inputs: {}", summary.file_inputs);
        }

        if let Some(ref warnings) = result.warnings {
            println!("\n⚠ Warnings:");
            for warning in warnings {
                println!("  - {}", warning);
            }
        }
    } else {
        println!("✗ Job plan is invalid: {}", result.plan_path);
        if let Some(ref error) = result.error {
            println!("\n  Error: {}", error);
        }
    }
}
