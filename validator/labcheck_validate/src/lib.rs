//! Lab report validators.
//!
//! Two pure entry points score an input against a declared
//! [`Category`](labcheck_registry::Category):
//!
//! - [`validate_lab_type`] for raw document text (OCR output),
//! - [`validate_parsed_values`] for a field-name to value mapping.
//!
//! Both read the same registry dictionaries but score independently. Neither
//! keeps state between calls, so they are safe to call from any number of
//! threads at once.
//!
//! ```
//! use labcheck_registry::Category;
//! use labcheck_validate::{validate_lab_type, validate_parsed_values, ParsedValues};
//!
//! let text = "Lipid Profile\nTotal Cholesterol: 180 mg/dL\nHDL: 55\nLDL: 100\nTriglycerides: 125";
//! let r = validate_lab_type(text, Category::Lipid);
//! assert!(r.is_valid);
//!
//! let values: ParsedValues = serde_json::from_str(r#"{"hemoglobin": 14.5}"#).unwrap();
//! assert!(!validate_parsed_values(&values, Category::Cbc).is_valid);
//! ```

pub mod config;
pub mod dictionary;
pub mod normalize;
pub mod rank;
pub mod result;
pub mod structured;
pub mod text;

use labcheck_registry::Category;
use lazy_static::lazy_static;

pub use config::{
    load_config_from_file, load_config_from_str, ConfigError, Coverage, CoverageTable,
    ScoringConfig, TextScoring,
};
pub use rank::{best_alternative, rank_parsed_values, rank_text, Ranking};
pub use result::ValidationResult;
pub use structured::{LabValue, ParsedValues, StructuredValidator};
pub use text::TextValidator;

lazy_static! {
    static ref DEFAULT_CONFIG: ScoringConfig = ScoringConfig::default();
}

/// The configuration the free functions below use.
pub fn default_config() -> &'static ScoringConfig {
    &DEFAULT_CONFIG
}

/// Score raw report text against `category` with the default configuration.
pub fn validate_lab_type(text: &str, category: Category) -> ValidationResult {
    TextValidator::new(default_config()).validate(text, category)
}

/// Score parsed values against `category` with the default configuration.
pub fn validate_parsed_values(values: &ParsedValues, category: Category) -> ValidationResult {
    StructuredValidator::new(default_config()).validate(values, category)
}
