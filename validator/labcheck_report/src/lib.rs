//! User-facing outcome of a lab report upload.
//!
//! Wraps the validators in `labcheck_validate` and, when the declared
//! category is rejected, builds a [`LabValidationError`] that says whether
//! the upload is not a lab report at all or a report of a different kind.
//!
//! ```
//! use labcheck_registry::Category;
//! use labcheck_report::{assess_text, ErrorCode};
//!
//! let err = assess_text("Lipid Profile\nHDL 50\nLDL 110\nTriglycerides 140", Category::Cbc)
//!     .unwrap_err();
//! assert_eq!(err.code, ErrorCode::MismatchedLabType);
//! ```

pub mod assess;
pub mod error;
pub mod tier;

pub use assess::{assess_parsed_values, assess_text, Assessor, InputKind};
pub use error::{ErrorCode, ErrorDetails, LabValidationError};
pub use tier::{confidence_percent, ConfidenceTier, TierCutoffs};
