//! # Integration Tests
//!
//! Cross-crate integration and end-to-end tests.
//!
//! Responsibilities:
//! - Contract snapshot tests
//! - Plan-to-history e2e tests
//! - Statistics consistency checks

#[cfg(test)]
mod contract_tests {
    use contracts::{Operation, ProcessingResult, Shape, ValueKind};
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn test_operation_names_round_trip() {
        let operation: Operation = serde_json::from_value(json!("sort")).unwrap();
        assert_eq!(operation, Operation::Sort);

        let custom = Operation::from("frobnicate");
        assert!(!custom.is_known());
        assert_eq!(serde_json::to_value(&custom).unwrap(), json!("frobnicate"));
    }

    #[test]
    fn test_failed_result_serializes_without_data() {
        let result = ProcessingResult::failed(
            Operation::Sort,
            Some(Shape::Sequence),
            "cannot compare number with text".to_string(),
            Duration::from_millis(1),
            chrono::Utc::now(),
        );

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], json!(false));
        assert!(json.get("data").is_none(), "failed results carry no data");
        assert!(json["meta"]["error"]
            .as_str()
            .unwrap()
            .contains("cannot compare"));
    }

    #[test]
    fn test_successful_result_tags_output_kind() {
        let result = ProcessingResult::ok(
            Operation::Flatten,
            Shape::Mapping,
            json!({"a_b": 1}),
            Duration::from_millis(1),
            chrono::Utc::now(),
        );

        assert!(result.success);
        assert_eq!(result.meta.input_type, Some(Shape::Mapping));
        assert_eq!(result.meta.output_type, Some(ValueKind::Mapping));
        assert!(result.error().is_none());
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::io::Write;

    use config_loader::{ConfigFormat, PlanLoader};
    use contracts::{Operation, ValueKind};
    use loaders::resolve_input;
    use observability::OperationAggregator;
    use processor::Processor;
    use serde_json::json;

    const DEMO_PLAN: &str = r#"
[job]
name = "demo_fixtures"
description = "exercise every operation against inline inputs"

[[steps]]
name = "tidy_note"
operation = "clean"
input = { text = "  line one\nline two  " }

[[steps]]
name = "sorted_scores"
operation = "sort"
input = { value = [3, 1, 2] }

[[steps]]
name = "flat_profile"
operation = "flatten"
input = { value = { user = { name = "alice", age = 30 } } }

[[steps]]
name = "mystery"
operation = "frobnicate"
input = { text = "untouched" }

[[steps]]
name = "bad_sort"
operation = "sort"
input = { value = [1, "two"] }
"#;

    /// End-to-end test: plan file -> input resolution -> processor -> history
    #[test]
    fn test_e2e_plan_through_processor() {
        let plan = PlanLoader::load_from_str(DEMO_PLAN, ConfigFormat::Toml).unwrap();
        let mut processor = Processor::with_config(plan.processor.clone());

        for step in &plan.steps {
            let data = resolve_input(&step.input).unwrap();
            processor.process(data, step.operation.clone());
        }

        let history = processor.history();
        assert_eq!(history.len(), 5);

        assert_eq!(history[0].data, Some(json!("line one line two")));
        assert_eq!(history[1].data, Some(json!([1, 2, 3])));
        assert_eq!(
            history[2].data,
            Some(json!({"user_age": 30, "user_name": "alice"}))
        );
        // Unknown operations pass the input through unchanged
        assert_eq!(history[3].data, Some(json!("untouched")));

        assert!(!history[4].success);
        assert!(history[4]
            .error()
            .unwrap()
            .contains("cannot compare number with text"));

        let statistics = processor.statistics();
        assert_eq!(statistics.total_operations, 5);
        assert_eq!(statistics.successful_operations, 4);
        assert!((statistics.success_rate - 0.8).abs() < f64::EPSILON);
    }

    /// End-to-end test: CSV file -> loader cleanup -> unique -> history
    #[test]
    fn test_e2e_csv_file_to_processor() {
        let mut csv_file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        csv_file
            .write_all(b"name,age\nalice,30\nbob,25\nalice,30\ncarol,\n")
            .unwrap();
        csv_file.flush().unwrap();

        let plan_toml = format!(
            r#"
[job]
name = "users"

[[steps]]
name = "dedupe_users"
operation = "unique"
input = {{ csv_file = "{}" }}
"#,
            csv_file.path().display()
        );

        let plan = PlanLoader::load_from_str(&plan_toml, ConfigFormat::Toml).unwrap();
        let mut processor = Processor::new();

        for step in &plan.steps {
            let data = resolve_input(&step.input).unwrap();
            processor.process(data, step.operation.clone());
        }

        let history = processor.history();
        assert_eq!(history.len(), 1);
        assert!(history[0].success, "Failed: {:?}", history[0].error());

        // Duplicate and incomplete rows never reach the processor
        assert_eq!(
            history[0].data,
            Some(json!([
                {"age": "30", "name": "alice"},
                {"age": "25", "name": "bob"}
            ]))
        );
        assert_eq!(history[0].meta.output_type, Some(ValueKind::Sequence));
    }

    /// Aggregated metrics stay consistent with the processor history
    #[test]
    fn test_aggregator_matches_history() {
        let mut processor = Processor::new();
        let mut aggregator = OperationAggregator::new();

        let inputs = vec![
            (json!("hello"), Operation::Transform),
            (json!([1, 1, 2]), Operation::Unique),
            (json!(null), Operation::Clean),
            (json!({"a": {"b": 1}}), Operation::Flatten),
        ];

        for (data, operation) in inputs {
            let result = processor.process(data, operation);
            aggregator.update(&result);
        }

        let statistics = processor.statistics();
        assert_eq!(aggregator.total_operations, statistics.total_operations as u64);
        assert_eq!(
            aggregator.total_failures,
            (statistics.total_operations - statistics.successful_operations) as u64
        );
        assert_eq!(aggregator.time_stats.count(), 4);

        let summary = aggregator.summary();
        assert_eq!(summary.operation_counts.get("transform"), Some(&1));
        assert!((summary.failure_rate - 25.0).abs() < 1e-9);
    }

    /// Chained steps: flatten feeds into unique via the previous output
    #[test]
    fn test_chained_outputs_stay_processable() {
        let mut processor = Processor::new();

        let flattened = processor
            .process(
                json!({"user": {"tags": ["a", "a", "b"]}}),
                Operation::Flatten,
            )
            .data
            .unwrap();
        assert_eq!(flattened, json!({"user_tags": ["a", "a", "b"]}));

        let tags = flattened["user_tags"].clone();
        let deduped = processor.process(tags, Operation::Unique).data.unwrap();
        assert_eq!(deduped, json!(["a", "b"]));

        assert_eq!(processor.history_len(), 2);
        assert_eq!(processor.statistics().successful_operations, 2);
    }
}
