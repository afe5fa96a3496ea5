//! JobPlan - declarative processing runs
//!
//! A plan names an ordered list of steps, each pairing an input source
//! with an operation, all driven through one processor instance.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Operation;

/// Top-level plan document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPlan {
    /// Job-level metadata
    #[serde(default)]
    pub job: JobMeta,

    /// Ordered processing steps
    pub steps: Vec<StepConfig>,

    /// Settings handed to the processor as-is
    #[serde(default)]
    pub processor: ProcessorConfig,
}

impl JobPlan {
    /// Names of all operations requested by the plan, in step order
    pub fn operations(&self) -> Vec<&Operation> {
        self.steps.iter().map(|step| &step.operation).collect()
    }
}

/// Job-level metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobMeta {
    /// Display name for logs and summaries
    #[serde(default)]
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,
}

/// One named processing step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepConfig {
    /// Unique step name
    pub name: String,

    /// Operation to request
    #[serde(default)]
    pub operation: Operation,

    /// Where the step input comes from
    pub input: InputSpec,
}

/// Input source for a step
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputSpec {
    /// Inline value of any shape
    Inline { value: Value },

    /// Inline text
    Text { text: String },

    /// JSON document on disk
    JsonFile { json_file: PathBuf },

    /// CSV table on disk; rows load as a sequence of mappings
    CsvFile { csv_file: PathBuf },
}

impl InputSpec {
    /// Path referenced by this input, if it reads from disk
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::JsonFile { json_file } => Some(json_file),
            Self::CsvFile { csv_file } => Some(csv_file),
            Self::Inline { .. } | Self::Text { .. } => None,
        }
    }
}

/// Opaque processor settings
///
/// Carried by the processor and exposed for inspection; no transform
/// reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessorConfig(pub Map<String, Value>);

impl ProcessorConfig {
    /// Empty settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up one setting
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plan_from_json() {
        let plan: JobPlan = serde_json::from_value(json!({
            "job": {"name": "demo"},
            "steps": [
                {"name": "upper", "operation": "transform", "input": {"text": "hello"}},
                {"name": "dedupe", "operation": "unique", "input": {"value": [1, 1, 2]}},
                {"name": "rows", "operation": "filter", "input": {"csv_file": "data/users.csv"}}
            ]
        }))
        .unwrap();

        assert_eq!(plan.job.name, "demo");
        assert_eq!(plan.steps.len(), 3);
        assert_eq!(plan.steps[1].operation, Operation::Unique);
        assert!(matches!(plan.steps[0].input, InputSpec::Text { .. }));
        assert_eq!(
            plan.steps[2].input.path(),
            Some(&PathBuf::from("data/users.csv"))
        );
        assert!(plan.processor.is_empty());
    }

    #[test]
    fn test_step_operation_defaults_to_transform() {
        let step: StepConfig = serde_json::from_value(json!({
            "name": "s",
            "input": {"value": {}}
        }))
        .unwrap();
        assert_eq!(step.operation, Operation::Transform);
    }

    #[test]
    fn test_processor_config_is_carried_verbatim() {
        let plan: JobPlan = serde_json::from_value(json!({
            "steps": [],
            "processor": {"mode": "strict", "retries": 3}
        }))
        .unwrap();
        assert_eq!(plan.processor.get("mode"), Some(&json!("strict")));
        assert_eq!(plan.processor.len(), 2);
    }

    #[test]
    fn test_inline_value_accepts_any_shape() {
        let step: StepConfig = serde_json::from_value(json!({
            "name": "s",
            "operation": "flatten",
            "input": {"value": {"a": {"b": 1}}}
        }))
        .unwrap();
        match step.input {
            InputSpec::Inline { value } => assert_eq!(value, json!({"a": {"b": 1}})),
            other => panic!("unexpected input: {other:?}"),
        }
    }
}
