//! Plan validation
//!
//! Rules:
//! - plan has at least one step
//! - step names are non-empty
//! - step names are unique
//! - file inputs carry a non-empty path

use std::collections::HashSet;

use contracts::{ContractError, JobPlan};

/// Validate a parsed plan
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(plan: &JobPlan) -> Result<(), ContractError> {
    validate_has_steps(plan)?;
    validate_step_names(plan)?;
    validate_input_paths(plan)?;
    Ok(())
}

fn validate_has_steps(plan: &JobPlan) -> Result<(), ContractError> {
    if plan.steps.is_empty() {
        return Err(ContractError::config_validation(
            "steps",
            "plan defines no steps",
        ));
    }
    Ok(())
}

/// Step names must be unique and non-empty
fn validate_step_names(plan: &JobPlan) -> Result<(), ContractError> {
    let mut seen = HashSet::new();
    for (idx, step) in plan.steps.iter().enumerate() {
        if step.name.is_empty() {
            return Err(ContractError::config_validation(
                format!("steps[{idx}].name"),
                "step name cannot be empty",
            ));
        }
        if !seen.insert(&step.name) {
            return Err(ContractError::config_validation(
                format!("steps[name={}]", step.name),
                "duplicate step name",
            ));
        }
    }
    Ok(())
}

/// File-backed inputs must name a file
fn validate_input_paths(plan: &JobPlan) -> Result<(), ContractError> {
    for step in &plan.steps {
        if let Some(path) = step.input.path() {
            if path.as_os_str().is_empty() {
                return Err(ContractError::config_validation(
                    format!("steps[name={}].input", step.name),
                    "input file path cannot be empty",
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::{InputSpec, JobMeta, Operation, ProcessorConfig, StepConfig};
    use serde_json::json;

    fn minimal_plan() -> JobPlan {
        JobPlan {
            job: JobMeta {
                name: "demo".into(),
                description: String::new(),
            },
            steps: vec![
                StepConfig {
                    name: "upper".into(),
                    operation: Operation::Transform,
                    input: InputSpec::Text {
                        text: "hello".into(),
                    },
                },
                StepConfig {
                    name: "dedupe".into(),
                    operation: Operation::Unique,
                    input: InputSpec::Inline {
                        value: json!([1, 1, 2]),
                    },
                },
            ],
            processor: ProcessorConfig::default(),
        }
    }

    #[test]
    fn test_valid_plan() {
        assert!(validate(&minimal_plan()).is_ok());
    }

    #[test]
    fn test_empty_plan_rejected() {
        let mut plan = minimal_plan();
        plan.steps.clear();
        let err = validate(&plan).unwrap_err().to_string();
        assert!(err.contains("no steps"), "got: {err}");
    }

    #[test]
    fn test_duplicate_step_name() {
        let mut plan = minimal_plan();
        plan.steps.push(plan.steps[0].clone());
        let err = validate(&plan).unwrap_err().to_string();
        assert!(err.contains("duplicate step name"), "got: {err}");
    }

    #[test]
    fn test_empty_step_name() {
        let mut plan = minimal_plan();
        plan.steps[0].name.clear();
        let err = validate(&plan).unwrap_err().to_string();
        assert!(err.contains("cannot be empty"), "got: {err}");
    }

    #[test]
    fn test_empty_input_path() {
        let mut plan = minimal_plan();
        plan.steps[0].input = InputSpec::CsvFile {
            csv_file: "".into(),
        };
        let err = validate(&plan).unwrap_err().to_string();
        assert!(err.contains("file path cannot be empty"), "got: {err}");
    }
}
