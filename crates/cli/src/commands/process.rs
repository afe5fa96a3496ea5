//! `process` command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{info, warn};

use contracts::{Operation, ProcessingResult};
use processor::Processor;

use crate::cli::ProcessArgs;

/// Execute the `process` command
pub fn run_process(args: &ProcessArgs) -> Result<()> {
    let data = resolve_data(args)?;
    let operation = Operation::from(args.operation.as_str());

    if !operation.is_known() {
        warn!(
            operation = %operation,
            "Unknown operation, input will pass through unchanged"
        );
    }

    info!(operation = %operation, "Processing input");

    let mut processor = Processor::new();
    let result = processor.process(data, operation);

    if args.json {
        let json = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        println!("{}", json);
    } else {
        print_result(&result);
    }

    if args.stats {
        print_statistics(&processor);
    }

    if result.success {
        Ok(())
    } else {
        anyhow::bail!("Processing failed")
    }
}

/// Build the input value from whichever source the caller gave
fn resolve_data(args: &ProcessArgs) -> Result<Value> {
    if let Some(ref text) = args.text {
        return Ok(Value::String(text.clone()));
    }

    if let Some(ref raw) = args.json_input {
        return serde_json::from_str(raw).context("Failed to parse --json-input as JSON");
    }

    if let Some(ref path) = args.file {
        return load_file(path);
    }

    anyhow::bail!("No input provided: use --text, --json-input or --file")
}

fn load_file(path: &Path) -> Result<Value> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "json" => loaders::json::load_path(path)
            .with_context(|| format!("Failed to load JSON from {}", path.display())),
        "csv" => loaders::csv::load_path(path)
            .map(Value::Array)
            .with_context(|| format!("Failed to load CSV from {}", path.display())),
        other => anyhow::bail!(
            "Unsupported input file extension '{}' (expected .json or .csv): {}",
            other,
            path.display()
        ),
    }
}

fn print_result(result: &ProcessingResult) {
    let millis = result.processing_time_secs() * 1000.0;

    if result.success {
        let input = result
            .meta
            .input_type
            .map(|shape| shape.to_string())
            .unwrap_or_else(|| "?".to_string());
        let output = result
            .meta
            .output_type
            .map(|kind| kind.to_string())
            .unwrap_or_else(|| "?".to_string());

        println!(
            "✓ {} succeeded ({} → {}) in {:.3}ms",
            result.meta.operation, input, output, millis
        );

        if let Some(ref data) = result.data {
            match serde_json::to_string_pretty(data) {
                Ok(json) => println!("\n{}", json),
                Err(_) => println!("\n{}", data),
            }
        }
    } else {
        println!("✗ {} failed after {:.3}ms", result.meta.operation, millis);
        if let Some(error) = result.error() {
            println!("\n  Error: {}", error);
        }
    }
}

fn print_statistics(processor: &Processor) {
    let statistics = processor.statistics();

    println!("\n📈 Statistics");
    println!("   ├─ Total operations: {}", statistics.total_operations);
    println!("   ├─ Successful: {}", statistics.successful_operations);
    println!("   ├─ Success rate: {:.2}%", statistics.success_rate * 100.0);
    println!(
        "   ├─ Total processing time: {:.4}s",
        statistics.total_processing_time
    );
    println!(
        "   └─ Average processing time: {:.4}s",
        statistics.average_processing_time
    );
}
