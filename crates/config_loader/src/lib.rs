//! # Config Loader
//!
//! Plan loading and parsing module.
//!
//! Responsibilities:
//! - Parse TOML/JSON plan files
//! - Validate plan legality
//! - Produce a [`JobPlan`]
//!
//! # Example
//!
//! ```no_run
//! use config_loader::PlanLoader;
//! use std::path::Path;
//!
//! let plan = PlanLoader::load_from_path(Path::new("plan.toml")).unwrap();
//! println!("Steps: {}", plan.steps.len());
//! ```

mod parser;
mod validator;

pub use contracts::JobPlan;
pub use parser::ConfigFormat;
pub use validator::validate;

use contracts::ContractError;
use std::path::Path;

/// Plan loader
///
/// Provides static methods to load plans from files or strings.
pub struct PlanLoader;

impl PlanLoader {
    /// Load a plan from a file path
    ///
    /// Automatically detects format from file extension (.toml / .json).
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_path(path: &Path) -> Result<JobPlan, ContractError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        Self::load_from_str(&content, format)
    }

    /// Load a plan from a string
    ///
    /// # Errors
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_str(content: &str, format: ConfigFormat) -> Result<JobPlan, ContractError> {
        Self::parse_and_validate(content, format)
    }

    /// Serialize a plan to a TOML string
    pub fn to_toml(plan: &JobPlan) -> Result<String, ContractError> {
        toml::to_string_pretty(plan)
            .map_err(|e| ContractError::config_parse(format!("TOML serialize error: {e}")))
    }

    /// Serialize a plan to a JSON string
    pub fn to_json(plan: &JobPlan) -> Result<String, ContractError> {
        serde_json::to_string_pretty(plan)
            .map_err(|e| ContractError::config_parse(format!("JSON serialize error: {e}")))
    }
}

impl PlanLoader {
    /// Infer plan format from file extension
    fn detect_format(path: &Path) -> Result<ConfigFormat, ContractError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            ContractError::config_parse("cannot determine file format from extension")
        })?;

        ConfigFormat::from_extension(ext).ok_or_else(|| {
            ContractError::config_parse(format!("unsupported plan format: .{ext}"))
        })
    }

    /// Read plan file content
    fn read_file(path: &Path) -> Result<String, ContractError> {
        Ok(std::fs::read_to_string(path)?)
    }

    /// Parse and validate plan content
    fn parse_and_validate(content: &str, format: ConfigFormat) -> Result<JobPlan, ContractError> {
        let plan = parser::parse(content, format)?;
        validator::validate(&plan)?;
        Ok(plan)
    }
}
