use serde::{Deserialize, Serialize};

/// Outcome of validating one input against one category.
///
/// Recomputed on every call; nothing here is cached or persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    /// In `[0, 1]`.
    pub confidence: f64,
    /// Registry keywords found in the text, in dictionary order. Always empty
    /// for structured input.
    pub matched_keywords: Vec<String>,
    /// Canonical parameter names, deduplicated, in first-encountered order.
    pub matched_parameters: Vec<String>,
}

impl ValidationResult {
    /// The result for input with nothing recognizable in it.
    pub fn empty() -> Self {
        Self {
            is_valid: false,
            confidence: 0.0,
            matched_keywords: Vec::new(),
            matched_parameters: Vec::new(),
        }
    }

    pub fn has_matches(&self) -> bool {
        !self.matched_keywords.is_empty() || !self.matched_parameters.is_empty()
    }
}
