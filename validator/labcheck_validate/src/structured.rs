// Validation of already-parsed lab values against a declared category.

use std::collections::BTreeMap;
use std::fmt;

use labcheck_registry::Category;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::dictionary::compiled;
use crate::normalize::compact;
use crate::result::ValidationResult;

/// A value produced by the extraction stage. Only its key matters here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabValue {
    Number(f64),
    Text(String),
    /// Anything else extraction emitted, such as `null` for an unreadable cell.
    Other(serde_json::Value),
}

impl From<f64> for LabValue {
    fn from(v: f64) -> Self {
        LabValue::Number(v)
    }
}

impl From<&str> for LabValue {
    fn from(v: &str) -> Self {
        LabValue::Text(v.to_string())
    }
}

impl fmt::Display for LabValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabValue::Number(n) => write!(f, "{n}"),
            LabValue::Text(s) => f.write_str(s),
            LabValue::Other(v) => write!(f, "{v}"),
        }
    }
}

/// Parsed field name to value, as handed over by extraction.
pub type ParsedValues = BTreeMap<String, LabValue>;

/// Scores parsed values by how many known parameters their keys name.
#[derive(Debug, Clone, Copy)]
pub struct StructuredValidator<'a> {
    config: &'a ScoringConfig,
}

impl<'a> StructuredValidator<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    pub fn validate(&self, values: &ParsedValues, category: Category) -> ValidationResult {
        self.validate_keys(values.keys().map(String::as_str), category)
    }

    /// Validate field names alone; order of `keys` decides the order of
    /// `matched_parameters`.
    pub fn validate_keys<'k, I>(&self, keys: I, category: Category) -> ValidationResult
    where
        I: IntoIterator<Item = &'k str>,
    {
        let dict = compiled(category);
        let mut matched_parameters: Vec<String> = Vec::new();
        for key in keys {
            let key = compact(key);
            if key.is_empty() {
                continue;
            }
            match dict.parameters.iter().find(|p| p.matches_key(&key)) {
                Some(p) if !matched_parameters.iter().any(|m| m == p.canonical) => {
                    trace!("{category}: key '{key}' -> {}", p.canonical);
                    matched_parameters.push(p.canonical.to_string());
                }
                Some(_) => {}
                None => trace!("{category}: key '{key}' not recognized"),
            }
        }

        let coverage = self.config.coverage.get(category);
        let matched = matched_parameters.len();
        let confidence = if coverage.complete_panel == 0 {
            0.0
        } else {
            (matched as f64 / coverage.complete_panel as f64).min(1.0)
        };
        let is_valid = matched > 0 && matched >= coverage.min_parameters;
        debug!(
            "structured validation for {category}: valid={is_valid} confidence={confidence:.3} parameters={matched}/{}",
            coverage.complete_panel
        );

        ValidationResult {
            is_valid,
            confidence,
            matched_keywords: Vec::new(),
            matched_parameters,
        }
    }
}
