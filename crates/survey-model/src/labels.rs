//! Per-variable value labels (code → label).
//!
//! Codes are stored as `f64`, the most permissive representation a survey
//! export can produce. Three lookups are offered, one per representation the
//! translation chain tries:
//!
//! - [`ValueLabels::get`]: native float equality
//! - [`ValueLabels::get_integer`]: integer compared numerically with each code
//! - [`ValueLabels::get_text`]: trimmed text compared with each code's string
//!   forms (`"1"` and `"1.0"` for code `1.0`)

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{CatalogError, Result};

/// A single code/label pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelEntry {
    pub code: f64,
    pub label: String,
}

/// Code → label mapping for one survey variable.
#[derive(Debug, Clone, Serialize)]
pub struct ValueLabels {
    /// Variable identifier (e.g. `D01`).
    pub variable: String,

    /// Entries in declaration order.
    entries: Vec<LabelEntry>,

    /// String forms of each code → index into `entries`.
    #[serde(skip)]
    text_index: BTreeMap<String, usize>,
}

impl ValueLabels {
    /// Create an empty mapping for a variable.
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            entries: Vec::new(),
            text_index: BTreeMap::new(),
        }
    }

    /// Build a mapping from `(code, label)` pairs.
    pub fn with_labels<I, S>(variable: impl Into<String>, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, S)>,
        S: Into<String>,
    {
        let mut value_labels = Self::new(variable);
        for (code, label) in labels {
            value_labels.insert(code, label)?;
        }
        Ok(value_labels)
    }

    /// Add a code/label pair.
    ///
    /// Rejects non-finite codes and codes already present.
    pub fn insert(&mut self, code: f64, label: impl Into<String>) -> Result<()> {
        if !code.is_finite() {
            return Err(CatalogError::InvalidCode {
                variable: self.variable.clone(),
                code,
            });
        }
        if self.get(code).is_some() {
            return Err(CatalogError::DuplicateCode {
                variable: self.variable.clone(),
                code,
            });
        }
        let index = self.entries.len();
        for form in code_text_forms(code) {
            self.text_index.entry(form).or_insert(index);
        }
        self.entries.push(LabelEntry {
            code,
            label: label.into(),
        });
        Ok(())
    }

    /// Label for a code under native float equality.
    pub fn get(&self, code: f64) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.label.as_str())
    }

    /// Label for an integer code compared numerically.
    pub fn get_integer(&self, code: i64) -> Option<&str> {
        self.get(code as f64)
    }

    /// Label for a textual code, matched against the codes' string forms.
    pub fn get_text(&self, text: &str) -> Option<&str> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.text_index
            .get(trimmed)
            .and_then(|index| self.entries.get(*index))
            .map(|entry| entry.label.as_str())
    }

    /// Returns the stored label when `text` is exactly one of this
    /// variable's labels.
    pub fn find_label(&self, text: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.label == text)
            .map(|entry| entry.label.as_str())
    }

    /// Whether `text` is exactly one of this variable's labels.
    pub fn has_label(&self, text: &str) -> bool {
        self.find_label(text).is_some()
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[LabelEntry] {
        &self.entries
    }

    /// Codes in declaration order.
    pub fn codes(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|entry| entry.code)
    }

    /// Labels in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }

    /// Number of code/label pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// String forms a code can take in an export: `"1"` and `"1.0"` for `1.0`,
/// just `"2.5"` for `2.5`.
fn code_text_forms(code: f64) -> Vec<String> {
    let mut forms = Vec::with_capacity(2);
    if code.fract() == 0.0 && code.abs() < i64::MAX as f64 {
        forms.push((code as i64).to_string());
    }
    forms.push(format!("{code:?}"));
    forms
}
