use serde::{Deserialize, Serialize};

/// Coarse confidence bucket shown to users instead of the raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

/// Lower bounds of the medium and high tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierCutoffs {
    pub medium: f64,
    pub high: f64,
}

impl Default for TierCutoffs {
    fn default() -> Self {
        Self {
            medium: 0.4,
            high: 0.7,
        }
    }
}

impl TierCutoffs {
    pub fn tier(&self, confidence: f64) -> ConfidenceTier {
        if confidence >= self.high {
            ConfidenceTier::High
        } else if confidence >= self.medium {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }
}

/// Confidence as a whole percentage, `0..=100`.
pub fn confidence_percent(confidence: f64) -> u8 {
    (confidence.clamp(0.0, 1.0) * 100.0).round() as u8
}
