use thiserror::Error;

/// Errors raised by registry lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The caller asked for a category outside the supported set.
    #[error("unknown lab category '{0}' (expected one of: cbc, urinalysis, lipid)")]
    UnknownCategory(String),
}
