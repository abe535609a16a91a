//! Scoring weights and acceptance thresholds.
//!
//! Every constant the validators decide with lives here so it can be audited
//! and tuned per deployment. Configuration is plain JSON; any field left out
//! keeps its default:
//!
//! ```
//! use labcheck_registry::Category;
//! use labcheck_validate::config::load_config_from_str;
//!
//! let cfg = load_config_from_str(r#"{ "coverage": { "cbc": { "min_parameters": 4 } } }"#).unwrap();
//! assert_eq!(cfg.coverage.get(Category::Cbc).min_parameters, 4);
//! assert_eq!(cfg.coverage.get(Category::Cbc).complete_panel, 5);
//! ```

use std::fs;
use std::path::Path;

use labcheck_registry::Category;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_KEYWORD_WEIGHT: f64 = 0.35;
pub const DEFAULT_PARAMETER_WEIGHT: f64 = 0.65;
/// Keyword hits beyond this count add nothing; headers rarely repeat.
pub const DEFAULT_KEYWORD_SATURATION: usize = 2;
pub const DEFAULT_KEYWORD_ONLY_DAMPING: f64 = 0.5;
pub const DEFAULT_ACCEPTANCE_THRESHOLD: f64 = 0.5;
pub const DEFAULT_MIN_REPORTED_FRACTION: f64 = 0.5;
pub const DEFAULT_VALUE_WINDOW: usize = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for {field}: {reason}")]
    OutOfRange { field: String, reason: String },
}

impl ConfigError {
    fn out_of_range(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::OutOfRange {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Free-text scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextScoring {
    pub keyword_weight: f64,
    pub parameter_weight: f64,
    pub keyword_saturation: usize,
    /// Multiplier on the keyword term when no parameter matched at all.
    pub keyword_only_damping: f64,
    /// Confidence must be strictly above this to accept.
    pub acceptance_threshold: f64,
    /// Share of matched parameters that must be followed by a result value
    /// (a number or a word such as `negative`) for the text to be accepted.
    pub min_reported_fraction: f64,
    /// Tokens after a parameter name searched for its value.
    pub value_window: usize,
}

impl Default for TextScoring {
    fn default() -> Self {
        Self {
            keyword_weight: DEFAULT_KEYWORD_WEIGHT,
            parameter_weight: DEFAULT_PARAMETER_WEIGHT,
            keyword_saturation: DEFAULT_KEYWORD_SATURATION,
            keyword_only_damping: DEFAULT_KEYWORD_ONLY_DAMPING,
            acceptance_threshold: DEFAULT_ACCEPTANCE_THRESHOLD,
            min_reported_fraction: DEFAULT_MIN_REPORTED_FRACTION,
            value_window: DEFAULT_VALUE_WINDOW,
        }
    }
}

/// How many parameters make a report of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Coverage {
    /// Distinct parameters at which confidence saturates.
    pub complete_panel: usize,
    /// Distinct parameters structured input needs to be accepted.
    pub min_parameters: usize,
}

impl Coverage {
    pub const fn new(complete_panel: usize, min_parameters: usize) -> Self {
        Self {
            complete_panel,
            min_parameters,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoverageTable {
    #[serde(deserialize_with = "partial_coverage::cbc")]
    pub cbc: Coverage,
    #[serde(deserialize_with = "partial_coverage::urinalysis")]
    pub urinalysis: Coverage,
    #[serde(deserialize_with = "partial_coverage::lipid")]
    pub lipid: Coverage,
}

impl Default for CoverageTable {
    fn default() -> Self {
        Self {
            cbc: Coverage::new(5, 3),
            urinalysis: Coverage::new(6, 4),
            lipid: Coverage::new(4, 3),
        }
    }
}

impl CoverageTable {
    pub fn get(&self, category: Category) -> &Coverage {
        match category {
            Category::Cbc => &self.cbc,
            Category::Urinalysis => &self.urinalysis,
            Category::Lipid => &self.lipid,
        }
    }
}

// A coverage entry in JSON may set only one of its two fields; the other is
// taken from that category's default rather than from a global default.
mod partial_coverage {
    use super::{Coverage, CoverageTable};
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Partial {
        complete_panel: Option<usize>,
        min_parameters: Option<usize>,
    }

    fn merge<'de, D: Deserializer<'de>>(d: D, base: Coverage) -> Result<Coverage, D::Error> {
        let p = Partial::deserialize(d)?;
        Ok(Coverage {
            complete_panel: p.complete_panel.unwrap_or(base.complete_panel),
            min_parameters: p.min_parameters.unwrap_or(base.min_parameters),
        })
    }

    pub fn cbc<'de, D: Deserializer<'de>>(d: D) -> Result<Coverage, D::Error> {
        merge(d, CoverageTable::default().cbc)
    }

    pub fn urinalysis<'de, D: Deserializer<'de>>(d: D) -> Result<Coverage, D::Error> {
        merge(d, CoverageTable::default().urinalysis)
    }

    pub fn lipid<'de, D: Deserializer<'de>>(d: D) -> Result<Coverage, D::Error> {
        merge(d, CoverageTable::default().lipid)
    }
}

/// All tunables for both validators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    pub text: TextScoring,
    pub coverage: CoverageTable,
}

impl ScoringConfig {
    /// Check every value is within the range the scoring formulas assume.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.text;
        for (field, v) in [
            ("text.keyword_weight", t.keyword_weight),
            ("text.parameter_weight", t.parameter_weight),
            ("text.keyword_only_damping", t.keyword_only_damping),
            ("text.acceptance_threshold", t.acceptance_threshold),
            ("text.min_reported_fraction", t.min_reported_fraction),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(ConfigError::out_of_range(field, format!("{v} is outside [0, 1]")));
            }
        }
        if t.keyword_weight + t.parameter_weight > 1.0 + f64::EPSILON {
            return Err(ConfigError::out_of_range(
                "text",
                "keyword_weight + parameter_weight must not exceed 1",
            ));
        }
        if t.keyword_saturation == 0 {
            return Err(ConfigError::out_of_range("text.keyword_saturation", "must be at least 1"));
        }
        if t.value_window == 0 {
            return Err(ConfigError::out_of_range("text.value_window", "must be at least 1"));
        }
        for &category in labcheck_registry::supported_categories() {
            let c = self.coverage.get(category);
            if c.complete_panel == 0 {
                return Err(ConfigError::out_of_range(
                    format!("coverage.{category}.complete_panel"),
                    "must be at least 1",
                ));
            }
            if c.min_parameters == 0 || c.min_parameters > c.complete_panel {
                return Err(ConfigError::out_of_range(
                    format!("coverage.{category}.min_parameters"),
                    format!("must be between 1 and complete_panel ({})", c.complete_panel),
                ));
            }
        }
        Ok(())
    }
}

/// Parse and validate a JSON config.
pub fn load_config_from_str(json: &str) -> Result<ScoringConfig, ConfigError> {
    let cfg: ScoringConfig = serde_json::from_str(json)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Read, parse and validate a JSON config file.
pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<ScoringConfig, ConfigError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::debug!("loaded scoring config from {}", path.display());
    load_config_from_str(&data)
}
