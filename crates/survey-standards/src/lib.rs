//! Questionnaire codebook for the environmental-attitudes / attached-cap survey.
//!
//! - **questionnaire**: the raw question and value-label tables
//! - **registry**: the process-wide [`LabelCatalog`] built from those tables
//!
//! [`LabelCatalog`]: survey_model::LabelCatalog

pub mod questionnaire;
pub mod registry;

pub use registry::{build_catalog, default_catalog, translated_labels, variable_labels};
