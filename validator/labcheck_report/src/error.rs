use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tier::ConfidenceTier;

/// Why an upload was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Nothing in the input looks like a lab report of any supported kind.
    InvalidLabImage,
    /// The input has lab content, but not enough of the declared category.
    MismatchedLabType,
}

impl ErrorCode {
    /// Wire name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidLabImage => "INVALID_LAB_IMAGE",
            ErrorCode::MismatchedLabType => "MISMATCHED_LAB_TYPE",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::InvalidLabImage => {
                "The uploaded image does not appear to be a valid lab report"
            }
            ErrorCode::MismatchedLabType => {
                "The extracted values do not match the selected lab type"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    /// Display name of the declared category, e.g. `CBC`.
    pub selected_lab_type: String,
    pub confidence_tier: ConfidenceTier,
    /// Whole percent, `0..=100`.
    pub confidence: u8,
    pub reasons: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Payload handed back to the uploading user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct LabValidationError {
    pub code: ErrorCode,
    pub message: String,
    pub details: ErrorDetails,
}

impl LabValidationError {
    pub fn new(code: ErrorCode, details: ErrorDetails) -> Self {
        Self {
            code,
            message: code.message().to_string(),
            details,
        }
    }
}
