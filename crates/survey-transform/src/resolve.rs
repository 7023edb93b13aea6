//! Coded-value resolution.
//!
//! Each cell is tried against a variable's [`ValueLabels`] in a fixed order,
//! stopping at the first hit:
//!
//! 1. missing sentinel (null, `NaN`) → missing
//! 2. direct numeric equality with a code
//! 3. integer coercion (float truncation or integer parse) → code
//! 4. trimmed text against the codes' string forms
//! 5. text that already is one of the variable's labels
//! 6. otherwise unmatched, which also becomes a missing cell

use survey_common::parse_i64;
use survey_model::{CodedValue, ValueLabels};

/// Outcome of resolving one coded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The source cell was missing.
    Missing,
    /// Matched a code by numeric equality.
    Direct(&'a str),
    /// Matched after coercing to an integer.
    Integral(&'a str),
    /// Matched a code's string form.
    Textual(&'a str),
    /// The cell already held one of the variable's labels.
    Label(&'a str),
    /// Nothing matched.
    Unmatched,
}

impl<'a> Resolution<'a> {
    /// The translated label, `None` for missing and unmatched cells.
    pub fn label(self) -> Option<&'a str> {
        match self {
            Resolution::Direct(label)
            | Resolution::Integral(label)
            | Resolution::Textual(label)
            | Resolution::Label(label) => Some(label),
            Resolution::Missing | Resolution::Unmatched => None,
        }
    }

    /// Whether the cell ends up holding a label.
    pub fn is_translated(self) -> bool {
        self.label().is_some()
    }
}

/// Resolve a single coded value against a variable's labels.
pub fn resolve_code<'a>(labels: &'a ValueLabels, value: &CodedValue) -> Resolution<'a> {
    if value.is_missing() {
        return Resolution::Missing;
    }
    if let Some(label) = direct_match(labels, value) {
        return Resolution::Direct(label);
    }
    if let Some(label) = integral_code(value).and_then(|code| labels.get_integer(code)) {
        return Resolution::Integral(label);
    }
    if let Some(label) = value.render().and_then(|text| labels.get_text(&text)) {
        return Resolution::Textual(label);
    }
    if let Some(text) = value.as_text()
        && let Some(label) = labels.find_label(text.trim())
    {
        return Resolution::Label(label);
    }
    Resolution::Unmatched
}

fn direct_match<'a>(labels: &'a ValueLabels, value: &CodedValue) -> Option<&'a str> {
    match value {
        CodedValue::Float(code) => labels.get(*code),
        CodedValue::Integer(code) => labels.get_integer(*code),
        CodedValue::Text(_) | CodedValue::Missing => None,
    }
}

/// Interpret a value as an integer code.
///
/// Floats truncate toward zero, text must parse as a whole integer after
/// trimming (`"2"` yes, `"2.0"` no). Non-finite floats and missing values
/// give `None`.
pub fn integral_code(value: &CodedValue) -> Option<i64> {
    match value {
        CodedValue::Integer(code) => Some(*code),
        CodedValue::Float(code) if code.is_finite() => Some(code.trunc() as i64),
        CodedValue::Float(_) | CodedValue::Missing => None,
        CodedValue::Text(text) => parse_i64(text),
    }
}
