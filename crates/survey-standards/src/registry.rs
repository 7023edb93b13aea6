//! Process-wide label catalog.
//!
//! The catalog is built from [`crate::questionnaire`] on first access and
//! cached in a [`OnceLock`]; it is never modified afterwards.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use survey_model::{LabelCatalog, Result, ValueLabels};

use crate::questionnaire::{QUESTIONS, VALUE_LABELS};

/// Cached catalog built from the compiled-in questionnaire.
static DEFAULT_CATALOG: OnceLock<LabelCatalog> = OnceLock::new();

/// Returns the questionnaire catalog.
///
/// # Panics
///
/// Panics if the compiled-in tables are inconsistent (duplicate variables or
/// codes). The tables are static and covered by this crate's tests.
pub fn default_catalog() -> &'static LabelCatalog {
    DEFAULT_CATALOG.get_or_init(|| {
        build_catalog().expect("compiled-in questionnaire tables are consistent")
    })
}

/// Variable identifier → question text.
pub fn variable_labels() -> &'static BTreeMap<String, String> {
    default_catalog().variable_labels()
}

/// Variable identifier → value labels.
pub fn translated_labels() -> &'static BTreeMap<String, ValueLabels> {
    default_catalog().translated_labels()
}

/// Builds a fresh catalog from the questionnaire tables.
pub fn build_catalog() -> Result<LabelCatalog> {
    let mut catalog = LabelCatalog::new();
    for (variable, question) in QUESTIONS {
        catalog.add_variable(*variable, *question)?;
    }
    for (variable, labels) in VALUE_LABELS {
        let labels = ValueLabels::with_labels(*variable, labels.iter().copied())?;
        catalog.add_value_labels(labels)?;
    }
    Ok(catalog)
}
