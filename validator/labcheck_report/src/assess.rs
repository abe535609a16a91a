// Turning a failed validation into a user-facing error.
// Everything here is derived from ValidationResult fields and the scoring
// config; no dictionary lookups happen at this layer.

use labcheck_registry::Category;
use labcheck_validate::{
    best_alternative, default_config, rank_parsed_values, rank_text, ParsedValues, Ranking,
    ScoringConfig, ValidationResult,
};
use log::debug;

use crate::error::{ErrorCode, ErrorDetails, LabValidationError};
use crate::tier::{confidence_percent, TierCutoffs};

/// What kind of input a result was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    ParsedValues,
}

/// Validates uploads and explains rejections.
#[derive(Debug, Clone, Copy)]
pub struct Assessor<'a> {
    config: &'a ScoringConfig,
    cutoffs: TierCutoffs,
}

impl<'a> Assessor<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self {
            config,
            cutoffs: TierCutoffs::default(),
        }
    }

    pub fn with_cutoffs(mut self, cutoffs: TierCutoffs) -> Self {
        self.cutoffs = cutoffs;
        self
    }

    pub fn assess_text(
        &self,
        text: &str,
        category: Category,
    ) -> Result<ValidationResult, LabValidationError> {
        let ranking = rank_text(text, self.config);
        self.decide(InputKind::Text, category, ranking)
    }

    pub fn assess_parsed_values(
        &self,
        values: &ParsedValues,
        category: Category,
    ) -> Result<ValidationResult, LabValidationError> {
        let ranking = rank_parsed_values(values, self.config);
        self.decide(InputKind::ParsedValues, category, ranking)
    }

    fn decide(
        &self,
        kind: InputKind,
        category: Category,
        ranking: Ranking,
    ) -> Result<ValidationResult, LabValidationError> {
        let alternative = best_alternative(&ranking, category);
        let result = ranking
            .into_iter()
            .find_map(|(c, r)| (c == category).then_some(r))
            .unwrap_or_else(ValidationResult::empty);
        if result.is_valid {
            return Ok(result);
        }
        Err(self.explain(kind, category, &result, alternative))
    }

    /// Build the error for a result that failed validation.
    ///
    /// `alternative` is a different category that accepted the same input,
    /// if the caller found one.
    pub fn explain(
        &self,
        kind: InputKind,
        category: Category,
        result: &ValidationResult,
        alternative: Option<Category>,
    ) -> LabValidationError {
        let code = if alternative.is_some() || !result.matched_parameters.is_empty() {
            ErrorCode::MismatchedLabType
        } else {
            ErrorCode::InvalidLabImage
        };
        let details = ErrorDetails {
            selected_lab_type: category.display_name().to_string(),
            confidence_tier: self.cutoffs.tier(result.confidence),
            confidence: confidence_percent(result.confidence),
            reasons: self.reasons(kind, category, result, alternative),
            suggestions: suggestions(code, alternative),
        };
        debug!(
            "rejecting {category} upload: {code:?}, confidence {}%, alternative {alternative:?}",
            details.confidence
        );
        LabValidationError::new(code, details)
    }

    fn reasons(
        &self,
        kind: InputKind,
        category: Category,
        result: &ValidationResult,
        alternative: Option<Category>,
    ) -> Vec<String> {
        let display = category.display_name();
        let coverage = self.config.coverage.get(category);
        let found = result.matched_parameters.len();
        let mut reasons = Vec::new();

        if kind == InputKind::Text && result.matched_keywords.is_empty() {
            reasons.push(format!("Missing required keywords for {display}"));
        }
        if found == 0 {
            reasons.push(format!("No {display} parameters were recognized"));
        } else {
            match kind {
                InputKind::Text if found < coverage.complete_panel => reasons.push(format!(
                    "Only {found} of the {} expected {display} parameters were recognized",
                    coverage.complete_panel
                )),
                InputKind::ParsedValues if found < coverage.min_parameters => {
                    reasons.push(format!(
                        "Only {found} of the {} required {display} parameters were recognized",
                        coverage.min_parameters
                    ))
                }
                _ => {}
            }
        }
        if let Some(alt) = alternative {
            reasons.push(format!(
                "Parameters match {} rather than {display}",
                alt.display_name()
            ));
        }
        if kind == InputKind::Text && found > 0 {
            let threshold = self.config.text.acceptance_threshold;
            if result.confidence <= threshold {
                reasons.push(format!(
                    "Confidence {}% is below the {}% acceptance threshold",
                    confidence_percent(result.confidence),
                    confidence_percent(threshold)
                ));
            } else {
                // only the value requirement rejects text above the threshold
                reasons.push(format!(
                    "{display} parameters are mentioned but too few have result values"
                ));
            }
        }
        reasons
    }
}

fn suggestions(code: ErrorCode, alternative: Option<Category>) -> Vec<String> {
    match code {
        ErrorCode::InvalidLabImage => vec![
            "Upload a clearer image".to_string(),
            "Make sure the whole report is visible".to_string(),
        ],
        ErrorCode::MismatchedLabType => {
            let mut out = vec!["Verify you selected the correct lab type".to_string()];
            match alternative {
                Some(alt) => out.push(format!("This looks like a {} report", alt.display_name())),
                None => out.push("Upload a clearer image so every parameter can be read".to_string()),
            }
            out
        }
    }
}

/// [`Assessor::assess_text`] with the default configuration.
pub fn assess_text(text: &str, category: Category) -> Result<ValidationResult, LabValidationError> {
    Assessor::new(default_config()).assess_text(text, category)
}

/// [`Assessor::assess_parsed_values`] with the default configuration.
pub fn assess_parsed_values(
    values: &ParsedValues,
    category: Category,
) -> Result<ValidationResult, LabValidationError> {
    Assessor::new(default_config()).assess_parsed_values(values, category)
}
