// Lab report categories and their identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// A lab report category the validators know how to score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Complete blood count.
    #[serde(alias = "complete-blood-count")]
    Cbc,
    /// Routine urine analysis.
    #[serde(alias = "urine-analysis")]
    Urinalysis,
    /// Lipid panel / lipid profile.
    #[serde(alias = "lipid-panel", alias = "lipid-profile")]
    Lipid,
}

const SUPPORTED: [Category; 3] = [Category::Cbc, Category::Urinalysis, Category::Lipid];

/// All supported categories, in registry order.
pub fn supported_categories() -> &'static [Category] {
    &SUPPORTED
}

impl Category {
    /// Stable lowercase identifier (`cbc`, `urinalysis`, `lipid`).
    pub fn id(self) -> &'static str {
        match self {
            Category::Cbc => "cbc",
            Category::Urinalysis => "urinalysis",
            Category::Lipid => "lipid",
        }
    }

    /// Name shown to users in messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Cbc => "CBC",
            Category::Urinalysis => "Urinalysis",
            Category::Lipid => "Lipid Profile",
        }
    }

    /// Parse a user-declared category.
    ///
    /// Matching ignores case and separators, so `Complete Blood Count`,
    /// `complete-blood-count` and `CBC` all resolve to [`Category::Cbc`].
    /// Anything else is rejected; there is no default category.
    pub fn parse(input: &str) -> Result<Self, RegistryError> {
        let squashed: String = input
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        match squashed.as_str() {
            "cbc" | "completebloodcount" | "fullbloodcount" | "fbc" | "hemogram" => {
                Ok(Category::Cbc)
            }
            "urinalysis" | "urineanalysis" | "ua" | "routineurine" => Ok(Category::Urinalysis),
            "lipid" | "lipids" | "lipidpanel" | "lipidprofile" => Ok(Category::Lipid),
            _ => Err(RegistryError::UnknownCategory(input.trim().to_string())),
        }
    }
}

impl FromStr for Category {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::parse(s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
