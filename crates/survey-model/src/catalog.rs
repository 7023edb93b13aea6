//! The label catalog: question text and value labels per variable.
//!
//! Both tables are keyed by variable identifier in a `BTreeMap`, so iteration
//! follows identifier order (`D01` … `D22`, `GEN`, `RETA`, `regione`).

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{CatalogError, Result};
use crate::labels::ValueLabels;

/// Questionnaire schema: variable → question text, variable → value labels.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LabelCatalog {
    variable_labels: BTreeMap<String, String>,
    translated_labels: BTreeMap<String, ValueLabels>,
}

impl LabelCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the question text for a variable.
    pub fn add_variable(
        &mut self,
        variable: impl Into<String>,
        question: impl Into<String>,
    ) -> Result<()> {
        let variable = variable.into();
        if self.variable_labels.contains_key(&variable) {
            return Err(CatalogError::DuplicateVariable { variable });
        }
        self.variable_labels.insert(variable, question.into());
        Ok(())
    }

    /// Register the value labels for a variable.
    pub fn add_value_labels(&mut self, labels: ValueLabels) -> Result<()> {
        if self.translated_labels.contains_key(&labels.variable) {
            return Err(CatalogError::DuplicateVariable {
                variable: labels.variable,
            });
        }
        self.translated_labels
            .insert(labels.variable.clone(), labels);
        Ok(())
    }

    /// Variable identifier → question text.
    pub fn variable_labels(&self) -> &BTreeMap<String, String> {
        &self.variable_labels
    }

    /// Variable identifier → value labels.
    pub fn translated_labels(&self) -> &BTreeMap<String, ValueLabels> {
        &self.translated_labels
    }

    pub fn question(&self, variable: &str) -> Option<&str> {
        self.variable_labels.get(variable).map(String::as_str)
    }

    pub fn value_labels(&self, variable: &str) -> Option<&ValueLabels> {
        self.translated_labels.get(variable)
    }

    /// Whether a column with this name gets translated.
    pub fn is_coded(&self, variable: &str) -> bool {
        self.translated_labels.contains_key(variable)
    }

    pub fn len(&self) -> usize {
        self.variable_labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_labels.is_empty()
    }

    /// Check schema symmetry and that every mapping has at least one entry.
    ///
    /// Returns the first problem found, in identifier order.
    pub fn validate(&self) -> Result<()> {
        for variable in self.variable_labels.keys() {
            if !self.translated_labels.contains_key(variable) {
                return Err(CatalogError::MissingValueLabels {
                    variable: variable.clone(),
                });
            }
        }
        for (variable, labels) in &self.translated_labels {
            if !self.variable_labels.contains_key(variable) {
                return Err(CatalogError::MissingQuestion {
                    variable: variable.clone(),
                });
            }
            if labels.is_empty() {
                return Err(CatalogError::EmptyValueLabels {
                    variable: variable.clone(),
                });
            }
            if let Some(code) = labels.codes().find(|code| !code.is_finite()) {
                return Err(CatalogError::InvalidCode {
                    variable: variable.clone(),
                    code,
                });
            }
        }
        Ok(())
    }
}
