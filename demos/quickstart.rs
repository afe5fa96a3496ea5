//! Quickstart Demo
//!
//! Drives the processor through every operation family using a small
//! nested document. Runs without any input files.
//!
//! Run with: cargo run --bin quickstart
//! With a plan file: cargo run --bin quickstart -- path/to/plan.toml

use contracts::Operation;
use processor::Processor;
use serde_json::{json, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Quickstart Demo");

    // ==== Stage 1: Run a plan file when one is given ====
    if let Some(path) = std::env::args().nth(1) {
        tracing::info!(path = %path, "Loading job plan");
        let plan = config_loader::PlanLoader::load_from_path(std::path::Path::new(&path))?;
        let mut processor = Processor::with_config(plan.processor.clone());

        for step in &plan.steps {
            let data = loaders::resolve_input(&step.input)?;
            let result = processor.process(data, step.operation.clone());
            tracing::info!(
                step = %step.name,
                operation = %result.meta.operation,
                success = result.success,
                "Step finished"
            );
        }

        report(&processor);
        return Ok(());
    }

    // ==== Stage 2: Build the demo document ====
    let document = create_demo_document();
    let mut processor = Processor::new();

    // ==== Stage 3: Mapping operations ====
    let result = processor.process(document.clone(), Operation::Transform);
    tracing::info!(success = result.success, "Uppercased top-level keys");
    if let Some(data) = result.data {
        tracing::info!(keys = ?mapping_keys(&data), "Transformed document");
    }

    let result = processor.process(document["metadata"].clone(), Operation::Flatten);
    tracing::info!(
        success = result.success,
        data = %result.data.unwrap_or(serde_json::Value::Null),
        "Flattened metadata"
    );

    // ==== Stage 4: Text and sequence operations ====
    let note = json!("  first line\nsecond line  ");
    let result = processor.process(note, Operation::Clean);
    tracing::info!(
        success = result.success,
        data = %result.data.unwrap_or(serde_json::Value::Null),
        "Cleaned note"
    );

    let ages = json!([35, 25, 30]);
    let result = processor.process(ages, Operation::Sort);
    tracing::info!(
        success = result.success,
        data = %result.data.unwrap_or(serde_json::Value::Null),
        "Sorted ages"
    );

    let tags = json!(["news", null, "sports", null]);
    let result = processor.process(tags, Operation::Filter);
    tracing::info!(
        success = result.success,
        data = %result.data.unwrap_or(serde_json::Value::Null),
        "Filtered tags"
    );

    // ==== Stage 5: A failing call stays in the history ====
    let result = processor.process(json!(42), Operation::Transform);
    tracing::warn!(
        success = result.success,
        error = result.error().unwrap_or("-"),
        "Numbers are not a processable shape"
    );

    // ==== Stage 6: History and statistics ====
    report(&processor);

    Ok(())
}

/// The nested users/metadata document the demo operates on
fn create_demo_document() -> Value {
    json!({
        "users": [
            {"name": "John", "age": 30, "city": "New York"},
            {"name": "Jane", "age": 25, "city": "Los Angeles"},
            {"name": "Bob", "age": 35, "city": "Chicago"}
        ],
        "metadata": {
            "total": 3,
            "created_at": "2024-01-01T00:00:00Z"
        }
    })
}

fn mapping_keys(value: &Value) -> Vec<&String> {
    match value {
        Value::Object(map) => map.keys().collect(),
        _ => Vec::new(),
    }
}

fn report(processor: &Processor) {
    for (index, record) in processor.history().iter().enumerate() {
        tracing::info!(
            index,
            operation = %record.meta.operation,
            success = record.success,
            processing_ms = format!("{:.3}", record.processing_time_secs() * 1000.0),
            "History record"
        );
    }

    let statistics = processor.statistics();
    tracing::info!(
        total_operations = statistics.total_operations,
        successful_operations = statistics.successful_operations,
        success_rate = format!("{:.2}", statistics.success_rate),
        average_processing_time = format!("{:.6}", statistics.average_processing_time),
        "Final statistics"
    );
}
