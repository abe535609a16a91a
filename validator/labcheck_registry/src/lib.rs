//! Reference data for the lab report categories labcheck can validate.
//!
//! The set of categories is closed: adding one means adding a [`Category`]
//! variant and its dictionary tables here, never registering it at runtime.
//!
//! ```
//! use labcheck_registry::{keywords_for, parameters_for, Category};
//!
//! let cbc: Category = "complete-blood-count".parse().unwrap();
//! assert_eq!(cbc, Category::Cbc);
//! assert!(keywords_for(cbc).contains(&"complete blood count"));
//! assert!(parameters_for(cbc).iter().any(|p| p.canonical == "hemoglobin"));
//! ```

pub mod category;
pub mod dictionary;
pub mod error;

pub use category::{supported_categories, Category};
pub use dictionary::{keywords_for, parameter, parameters_for, result_words, ParameterDef};
pub use error::RegistryError;
