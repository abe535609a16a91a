// Keyword and parameter dictionaries per category.
// All terms are lowercase; matching code normalizes separators itself.

use crate::category::Category;

/// A recognized lab parameter and the names it goes by on reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterDef {
    /// snake_case name reported in `matched_parameters`.
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
}

impl ParameterDef {
    /// The canonical name followed by every alias.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.canonical).chain(self.aliases.iter().copied())
    }
}

const CBC_KEYWORDS: &[&str] = &[
    "complete blood count",
    "cbc",
    "full blood count",
    "blood count",
    "hematology",
    "haematology",
    "hemogram",
];

const CBC_PARAMETERS: &[ParameterDef] = &[
    ParameterDef {
        canonical: "hemoglobin",
        aliases: &["haemoglobin", "hgb", "hb"],
    },
    ParameterDef {
        canonical: "wbc",
        aliases: &[
            "white blood cell",
            "white blood cells",
            "white cell count",
            "wbc count",
            "leukocytes",
            "leucocytes",
            "wcc",
            "tlc",
        ],
    },
    ParameterDef {
        canonical: "rbc",
        aliases: &[
            "red blood cell",
            "red blood cells",
            "red cell count",
            "rbc count",
            "erythrocytes",
            "rcc",
        ],
    },
    ParameterDef {
        canonical: "platelet",
        aliases: &["platelets", "platelet count", "plt", "thrombocytes"],
    },
    ParameterDef {
        canonical: "hematocrit",
        aliases: &["haematocrit", "hct", "pcv", "packed cell volume"],
    },
    ParameterDef {
        canonical: "mcv",
        aliases: &["mean corpuscular volume", "mean cell volume"],
    },
    ParameterDef {
        canonical: "mch",
        aliases: &["mean corpuscular hemoglobin", "mean cell hemoglobin"],
    },
    ParameterDef {
        canonical: "mchc",
        aliases: &["mean corpuscular hemoglobin concentration"],
    },
    ParameterDef {
        canonical: "rdw",
        aliases: &["red cell distribution width"],
    },
];

const URINALYSIS_KEYWORDS: &[&str] = &[
    "urinalysis",
    "urine analysis",
    "urine examination",
    "urine test",
    "routine urine",
    "urine",
];

const URINALYSIS_PARAMETERS: &[ParameterDef] = &[
    ParameterDef {
        canonical: "color",
        aliases: &["colour"],
    },
    ParameterDef {
        canonical: "appearance",
        aliases: &["clarity", "turbidity", "transparency"],
    },
    ParameterDef {
        canonical: "ph",
        aliases: &["ph value", "urine ph"],
    },
    ParameterDef {
        canonical: "specific_gravity",
        aliases: &["sg", "spec grav", "sp gr"],
    },
    ParameterDef {
        canonical: "protein",
        aliases: &["albumin"],
    },
    ParameterDef {
        canonical: "glucose",
        aliases: &["urine glucose", "urine sugar"],
    },
    ParameterDef {
        canonical: "ketones",
        aliases: &["ketone", "ketone bodies"],
    },
    ParameterDef {
        canonical: "blood",
        aliases: &["occult blood"],
    },
    ParameterDef {
        canonical: "nitrite",
        aliases: &["nitrites"],
    },
    ParameterDef {
        canonical: "leukocyte_esterase",
        aliases: &["leucocyte esterase"],
    },
    ParameterDef {
        canonical: "wbc",
        aliases: &[
            "white blood cells",
            "white blood cell",
            "pus cells",
            "pus cell",
        ],
    },
    ParameterDef {
        canonical: "rbc",
        aliases: &["red blood cells", "red blood cell"],
    },
    ParameterDef {
        canonical: "bacteria",
        aliases: &["bacterium"],
    },
    ParameterDef {
        canonical: "epithelial_cells",
        aliases: &["epithelial", "epi cells"],
    },
];

const LIPID_KEYWORDS: &[&str] = &[
    "lipid profile",
    "lipid panel",
    "lipid",
    "cholesterol",
    "lipogram",
];

const LIPID_PARAMETERS: &[ParameterDef] = &[
    ParameterDef {
        canonical: "total_cholesterol",
        aliases: &["cholesterol total", "serum cholesterol", "tchol"],
    },
    ParameterDef {
        canonical: "hdl",
        aliases: &["hdl cholesterol", "hdl c", "high density lipoprotein"],
    },
    ParameterDef {
        canonical: "ldl",
        aliases: &["ldl cholesterol", "ldl c", "low density lipoprotein"],
    },
    ParameterDef {
        canonical: "triglycerides",
        aliases: &["triglyceride", "tg", "trig", "trigs"],
    },
    ParameterDef {
        canonical: "vldl",
        aliases: &["vldl cholesterol", "very low density lipoprotein"],
    },
];

// Qualitative results printed in place of a number.
const RESULT_WORDS: &[&str] = &[
    "negative",
    "positive",
    "trace",
    "nil",
    "absent",
    "reactive",
    "nonreactive",
    "none",
    "occasional",
    "moderate",
    "normal",
    "abnormal",
    "borderline",
    "detected",
    "yellow",
    "amber",
    "straw",
    "pale",
    "colorless",
    "clear",
    "cloudy",
    "hazy",
    "turbid",
];

/// Words a report prints as a parameter's result when it has no number.
pub fn result_words() -> &'static [&'static str] {
    RESULT_WORDS
}

/// Keywords expected somewhere in a report's text.
pub fn keywords_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Cbc => CBC_KEYWORDS,
        Category::Urinalysis => URINALYSIS_KEYWORDS,
        Category::Lipid => LIPID_KEYWORDS,
    }
}

/// Parameters a report of this category is made of.
pub fn parameters_for(category: Category) -> &'static [ParameterDef] {
    match category {
        Category::Cbc => CBC_PARAMETERS,
        Category::Urinalysis => URINALYSIS_PARAMETERS,
        Category::Lipid => LIPID_PARAMETERS,
    }
}

/// Look up one parameter by canonical name.
pub fn parameter(category: Category, canonical: &str) -> Option<&'static ParameterDef> {
    parameters_for(category)
        .iter()
        .find(|p| p.canonical == canonical)
}
