//! Lab report category validation.
//!
//! One dependency for callers that want the whole pipeline: the category
//! registry, both validators, the user-facing rejection payload and the
//! `labcheck` command-line front end.
//!
//! ```
//! use labcheck::{assess_parsed_values, Category, ParsedValues};
//!
//! let values: ParsedValues =
//!     serde_json::from_str(r#"{"hemoglobin": 14.5, "wbc": 7.5, "rbc": 5.0}"#).unwrap();
//! assert!(assess_parsed_values(&values, Category::Cbc).is_ok());
//! ```

pub mod cli;

pub use labcheck_registry::{
    keywords_for, parameter, parameters_for, supported_categories, Category, ParameterDef,
    RegistryError,
};
pub use labcheck_report::{
    assess_parsed_values, assess_text, Assessor, ConfidenceTier, ErrorCode, ErrorDetails,
    LabValidationError, TierCutoffs,
};
pub use labcheck_validate::{
    default_config, load_config_from_file, load_config_from_str, validate_lab_type,
    validate_parsed_values, ConfigError, LabValue, ParsedValues, ScoringConfig,
    ValidationResult,
};
