// Validation of raw (OCR) report text against a declared category.

use labcheck_registry::Category;
use log::{debug, trace};

use crate::config::ScoringConfig;
use crate::dictionary::compiled;
use crate::normalize::normalize_text;
use crate::result::ValidationResult;

/// Scores free text by keyword and parameter-name hits.
///
/// Parameter hits carry most of the weight: OCR of a real report often loses
/// the header but keeps the table, while prose that merely mentions "blood"
/// has no table at all.
#[derive(Debug, Clone, Copy)]
pub struct TextValidator<'a> {
    config: &'a ScoringConfig,
}

impl<'a> TextValidator<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    pub fn validate(&self, text: &str, category: Category) -> ValidationResult {
        let normalized = normalize_text(text);
        if normalized.is_empty() {
            debug!("text validation for {category}: empty input");
            return ValidationResult::empty();
        }

        let dict = compiled(category);
        let matched_keywords: Vec<String> = dict
            .keywords
            .iter()
            .filter(|k| k.term.found_in(&normalized))
            .map(|k| k.keyword.to_string())
            .collect();
        let window = self.config.text.value_window;
        let mut matched_parameters: Vec<String> = Vec::new();
        let mut reported = 0;
        for p in dict.parameters.iter().filter(|p| p.found_in(&normalized)) {
            if p.reported_in(&normalized, window) {
                reported += 1;
            }
            matched_parameters.push(p.canonical.to_string());
        }
        trace!("{category}: keywords {matched_keywords:?}, parameters {matched_parameters:?}, {reported} with values");

        let confidence = self.confidence(
            category,
            matched_keywords.len(),
            dict.keywords.len(),
            matched_parameters.len(),
            dict.parameters.len(),
        );
        let is_valid = confidence > self.config.text.acceptance_threshold
            && !matched_parameters.is_empty()
            && self.has_values(reported, matched_parameters.len());
        debug!(
            "text validation for {category}: valid={is_valid} confidence={confidence:.3} keywords={} parameters={} reported={reported}",
            matched_keywords.len(),
            matched_parameters.len()
        );

        ValidationResult {
            is_valid,
            confidence,
            matched_keywords,
            matched_parameters,
        }
    }

    /// Whether at least `min_reported_fraction` of the matched parameters
    /// are followed by a value.
    fn has_values(&self, reported: usize, matched: usize) -> bool {
        reported as f64 >= self.config.text.min_reported_fraction * matched as f64
    }

    /// Weighted keyword and parameter ratios. Each ratio is taken against the
    /// dictionary size, capped so a complete report does not need every
    /// synonym in the dictionary.
    fn confidence(
        &self,
        category: Category,
        keyword_hits: usize,
        keyword_count: usize,
        parameter_hits: usize,
        parameter_count: usize,
    ) -> f64 {
        let t = &self.config.text;
        let keyword_ratio = saturating_ratio(keyword_hits, keyword_count.min(t.keyword_saturation));
        let panel = self.config.coverage.get(category).complete_panel;
        let parameter_ratio = saturating_ratio(parameter_hits, parameter_count.min(panel));

        let mut keyword_term = t.keyword_weight * keyword_ratio;
        if parameter_hits == 0 {
            keyword_term *= t.keyword_only_damping;
        }
        (keyword_term + t.parameter_weight * parameter_ratio).clamp(0.0, 1.0)
    }
}

fn saturating_ratio(hits: usize, expected: usize) -> f64 {
    if expected == 0 {
        return 0.0;
    }
    (hits as f64 / expected as f64).min(1.0)
}
