// Scoring one input against every category, to tell a wrong declared
// category apart from a document that is not a lab report at all.

use labcheck_registry::{supported_categories, Category};

use crate::config::ScoringConfig;
use crate::result::ValidationResult;
use crate::structured::{ParsedValues, StructuredValidator};
use crate::text::TextValidator;

pub type Ranking = Vec<(Category, ValidationResult)>;

/// Text scored against each category, highest confidence first. Ties keep
/// registry order.
pub fn rank_text(text: &str, config: &ScoringConfig) -> Ranking {
    let validator = TextValidator::new(config);
    sorted(
        supported_categories()
            .iter()
            .map(|&c| (c, validator.validate(text, c)))
            .collect(),
    )
}

/// Parsed values scored against each category, highest confidence first.
pub fn rank_parsed_values(values: &ParsedValues, config: &ScoringConfig) -> Ranking {
    let validator = StructuredValidator::new(config);
    sorted(
        supported_categories()
            .iter()
            .map(|&c| (c, validator.validate(values, c)))
            .collect(),
    )
}

/// The best-ranked category other than `declared` that accepts the input.
pub fn best_alternative(
    ranking: &[(Category, ValidationResult)],
    declared: Category,
) -> Option<Category> {
    ranking
        .iter()
        .find(|(c, r)| *c != declared && r.is_valid)
        .map(|(c, _)| *c)
}

fn sorted(mut ranking: Ranking) -> Ranking {
    // stable sort keeps registry order for equal confidence
    ranking.sort_by(|a, b| b.1.confidence.total_cmp(&a.1.confidence));
    ranking
}
