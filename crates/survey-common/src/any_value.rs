//! Polars AnyValue utility functions.
//!
//! This module converts Polars `AnyValue` cells into [`CodedValue`]s for the
//! translation chain and renders cells back as text for CSV output.

use polars::prelude::{AnyValue, Series};
use survey_model::CodedValue;

/// Converts a Polars `AnyValue` into a [`CodedValue`].
///
/// Nulls and `NaN` floats become [`CodedValue::Missing`]. Integer widths
/// collapse to `Integer`, float widths to `Float`, booleans to `0`/`1`.
/// Anything else keeps its display form as `Text`.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use survey_common::any_to_coded;
/// use survey_model::CodedValue;
///
/// assert_eq!(any_to_coded(AnyValue::Null), CodedValue::Missing);
/// assert_eq!(any_to_coded(AnyValue::Int32(1)), CodedValue::Integer(1));
/// assert_eq!(any_to_coded(AnyValue::String("1")), CodedValue::Text("1".into()));
/// ```
pub fn any_to_coded(value: AnyValue<'_>) -> CodedValue {
    match value {
        AnyValue::Null => CodedValue::Missing,
        AnyValue::Boolean(b) => CodedValue::Integer(i64::from(b)),
        AnyValue::Int8(v) => CodedValue::Integer(i64::from(v)),
        AnyValue::Int16(v) => CodedValue::Integer(i64::from(v)),
        AnyValue::Int32(v) => CodedValue::Integer(i64::from(v)),
        AnyValue::Int64(v) => CodedValue::Integer(v),
        AnyValue::UInt8(v) => CodedValue::Integer(i64::from(v)),
        AnyValue::UInt16(v) => CodedValue::Integer(i64::from(v)),
        AnyValue::UInt32(v) => CodedValue::Integer(i64::from(v)),
        AnyValue::UInt64(v) => match i64::try_from(v) {
            Ok(v) => CodedValue::Integer(v),
            Err(_) => CodedValue::Float(v as f64),
        },
        AnyValue::Float32(v) => float_or_missing(f64::from(v)),
        AnyValue::Float64(v) => float_or_missing(v),
        AnyValue::String(s) => CodedValue::Text(s.to_string()),
        AnyValue::StringOwned(s) => CodedValue::Text(s.to_string()),
        other => CodedValue::Text(other.to_string()),
    }
}

fn float_or_missing(value: f64) -> CodedValue {
    if value.is_nan() {
        CodedValue::Missing
    } else {
        CodedValue::Float(value)
    }
}

/// Reads every cell of a series as a [`CodedValue`].
pub fn series_to_coded(series: &Series) -> Vec<CodedValue> {
    (0..series.len())
        .map(|idx| any_to_coded(series.get(idx).unwrap_or(AnyValue::Null)))
        .collect()
}

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`, properly formats numeric types without
/// unnecessary trailing zeros.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use survey_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
/// assert_eq!(any_to_string(AnyValue::Float64(2.0)), "2");
/// assert_eq!(any_to_string(AnyValue::String("Sì")), "Sì");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) if v.is_nan() => String::new(),
        AnyValue::Float64(v) if v.is_nan() => String::new(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use survey_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parses a string as `i64`, returning `None` for invalid or empty strings.
///
/// Surrounding whitespace and a leading sign are accepted; decimal points are
/// not (`"1.0"` is not an integer).
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use polars::prelude::NamedFrom;

    use super::*;

    #[test]
    fn test_any_to_coded_numeric_widths() {
        assert_eq!(any_to_coded(AnyValue::Int8(1)), CodedValue::Integer(1));
        assert_eq!(any_to_coded(AnyValue::UInt32(7)), CodedValue::Integer(7));
        assert_eq!(any_to_coded(AnyValue::Float32(2.0)), CodedValue::Float(2.0));
        assert_eq!(any_to_coded(AnyValue::Float64(2.5)), CodedValue::Float(2.5));
        assert_eq!(
            any_to_coded(AnyValue::UInt64(u64::MAX)),
            CodedValue::Float(u64::MAX as f64)
        );
    }

    #[test]
    fn test_any_to_coded_missing() {
        assert_eq!(any_to_coded(AnyValue::Null), CodedValue::Missing);
        assert_eq!(any_to_coded(AnyValue::Float64(f64::NAN)), CodedValue::Missing);
        assert_eq!(any_to_coded(AnyValue::Float32(f32::NAN)), CodedValue::Missing);
    }

    #[test]
    fn test_any_to_coded_boolean_and_text() {
        assert_eq!(any_to_coded(AnyValue::Boolean(true)), CodedValue::Integer(1));
        assert_eq!(
            any_to_coded(AnyValue::String(" 3 ")),
            CodedValue::Text(" 3 ".to_string())
        );
    }

    #[test]
    fn test_series_to_coded() {
        let series = Series::new("D01".into(), vec![Some(1.0), None, Some(2.0)]);
        assert_eq!(
            series_to_coded(&series),
            vec![
                CodedValue::Float(1.0),
                CodedValue::Missing,
                CodedValue::Float(2.0)
            ]
        );
    }

    #[test]
    fn test_any_to_string() {
        assert_eq!(any_to_string(AnyValue::Null), "");
        assert_eq!(any_to_string(AnyValue::Int64(-100)), "-100");
        assert_eq!(any_to_string(AnyValue::Float64(1.0)), "1");
        assert_eq!(any_to_string(AnyValue::Float64(1.50)), "1.5");
        assert_eq!(any_to_string(AnyValue::Float64(f64::NAN)), "");
        assert_eq!(any_to_string(AnyValue::Boolean(false)), "false");
    }

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(1.0), "1");
        assert_eq!(format_numeric(10.0), "10");
        assert_eq!(format_numeric(20.0), "20");
        assert_eq!(format_numeric(0.05), "0.05");
    }

    #[test]
    fn test_parse_i64() {
        assert_eq!(parse_i64(""), None);
        assert_eq!(parse_i64("  "), None);
        assert_eq!(parse_i64("42"), Some(42));
        assert_eq!(parse_i64("  +7  "), Some(7));
        assert_eq!(parse_i64("1.0"), None);
        assert_eq!(parse_i64("abc"), None);
    }
}
