//! Coded survey cell values.
//!
//! Survey exports go through several spreadsheet/statistics round trips, so
//! the same answer code can arrive as `1`, `1.0` or `"1"`. [`CodedValue`]
//! makes each of those representations explicit so the resolution chain can
//! try them in a fixed order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single coded cell as read from a survey table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CodedValue {
    /// Missing-value sentinel (null in the source table).
    #[default]
    Missing,
    /// Integer-typed code, e.g. `1`.
    Integer(i64),
    /// Floating-point code, e.g. `1.0`. `NaN` counts as missing.
    Float(f64),
    /// Textual cell, e.g. `"1"` or an already translated label.
    Text(String),
}

impl CodedValue {
    /// Returns true for the missing sentinel and for `NaN` floats.
    pub fn is_missing(&self) -> bool {
        match self {
            CodedValue::Missing => true,
            CodedValue::Float(value) => value.is_nan(),
            CodedValue::Integer(_) | CodedValue::Text(_) => false,
        }
    }

    /// Returns the text payload for [`CodedValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CodedValue::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Renders the value as a trimmed string, `None` when missing.
    ///
    /// Floats keep their decimal point (`1.0` renders as `"1.0"`).
    pub fn render(&self) -> Option<String> {
        if self.is_missing() {
            return None;
        }
        match self {
            CodedValue::Missing => None,
            CodedValue::Integer(value) => Some(value.to_string()),
            CodedValue::Float(value) => Some(format!("{value:?}")),
            CodedValue::Text(text) => Some(text.trim().to_string()),
        }
    }
}

impl fmt::Display for CodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render() {
            Some(text) => f.write_str(&text),
            None => f.write_str("<missing>"),
        }
    }
}

impl From<i64> for CodedValue {
    fn from(value: i64) -> Self {
        CodedValue::Integer(value)
    }
}

impl From<i32> for CodedValue {
    fn from(value: i32) -> Self {
        CodedValue::Integer(i64::from(value))
    }
}

impl From<f64> for CodedValue {
    fn from(value: f64) -> Self {
        CodedValue::Float(value)
    }
}

impl From<&str> for CodedValue {
    fn from(value: &str) -> Self {
        CodedValue::Text(value.to_string())
    }
}

impl From<String> for CodedValue {
    fn from(value: String) -> Self {
        CodedValue::Text(value)
    }
}

impl<T: Into<CodedValue>> From<Option<T>> for CodedValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CodedValue::Missing, Into::into)
    }
}
