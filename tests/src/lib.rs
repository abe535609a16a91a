//! Report fixtures shared by the scenario tests.
//!
//! The texts mimic OCR output: uneven spacing, units glued to values, header
//! lines in capitals and the odd stray symbol.

use labcheck_registry::Category;
use labcheck_validate::ParsedValues;

pub const CBC_TEXT: &str = "\
CITY GENERAL HOSPITAL - LABORATORY
COMPLETE BLOOD COUNT (CBC)
Patient: J. Doe        Collected: 2024-03-02 08:15
Test                 Result     Units        Ref. Range
Hemoglobin           14.5       g/dL         13.5-17.5
WBC                  7.5        x10^9/L      4.5-11.0
RBC                  5.0        x10^12/L     4.5-5.9
Platelet Count       250        x10^9/L      150-400
Hematocrit           42         %            41-53
MCV                  88 fL
";

pub const URINALYSIS_TEXT: &str = "\
ROUTINE URINALYSIS
Physical examination
  Color: Yellow      Appearance: Clear
Chemical examination
  pH 6.0   Specific Gravity 1.020   Protein: Negative   Glucose: Negative
  Ketones: Negative  Blood: Negative  Nitrite: Negative
Microscopic
  WBC 0-2 /hpf   RBC 0-1 /hpf   Bacteria: None seen
";

pub const LIPID_TEXT: &str = "\
Lipid Profile (fasting)
Total Cholesterol ..... 190 mg/dL
HDL Cholesterol ....... 50 mg/dL
LDL Cholesterol ....... 110 mg/dL
Triglycerides ......... 140 mg/dL
";

pub const SHOPPING_LIST: &str = "This is just a random shopping list with no medical data.";

/// Sample report text for `category`.
pub fn sample_text(category: Category) -> &'static str {
    match category {
        Category::Cbc => CBC_TEXT,
        Category::Urinalysis => URINALYSIS_TEXT,
        Category::Lipid => LIPID_TEXT,
    }
}

/// Extracted values as an upstream parser would hand them over for `category`.
pub fn sample_values(category: Category) -> ParsedValues {
    let json = match category {
        Category::Cbc => {
            r#"{"hemoglobin": 14.5, "wbc": 7.5, "rbc": 5.0, "platelet": 250, "hematocrit": 42}"#
        }
        Category::Urinalysis => {
            r#"{"color": "yellow", "appearance": "clear", "ph": 6.0,
                "specific_gravity": 1.020, "protein": "negative", "glucose": "negative"}"#
        }
        Category::Lipid => {
            r#"{"total_cholesterol": 190, "hdl": 50, "ldl": 110, "triglycerides": 140}"#
        }
    };
    serde_json::from_str(json).expect("fixture JSON")
}
