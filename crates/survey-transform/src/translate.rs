//! Column and table translation.
//!
//! [`map_codes`] translates one column for one variable; [`translate`] does
//! that for every column whose name is a coded variable and copies the rest
//! unchanged. Inputs are only borrowed, so the caller's frame never changes.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};
use survey_common::series_to_coded;
use survey_model::{CodedValue, LabelCatalog, ValueLabels};
use survey_standards::default_catalog;
use tracing::debug;

use crate::report::{ColumnReport, TranslationReport};
use crate::resolve::resolve_code;

/// Translate one column using the questionnaire catalog.
///
/// Columns for variables without value labels are returned unchanged.
pub fn map_codes(series: &Series, variable: &str) -> Series {
    map_codes_with(default_catalog(), series, variable)
}

/// Translate one column using the given catalog.
pub fn map_codes_with(catalog: &LabelCatalog, series: &Series, variable: &str) -> Series {
    match catalog.value_labels(variable) {
        Some(labels) => translate_series(labels, series).0,
        None => series.clone(),
    }
}

/// Translate a slice of coded values using the questionnaire catalog.
///
/// Labels come back as [`CodedValue::Text`], unresolved cells as
/// [`CodedValue::Missing`].
pub fn map_values(values: &[CodedValue], variable: &str) -> Vec<CodedValue> {
    map_values_with(default_catalog(), values, variable)
}

/// Translate a slice of coded values using the given catalog.
pub fn map_values_with(
    catalog: &LabelCatalog,
    values: &[CodedValue],
    variable: &str,
) -> Vec<CodedValue> {
    let Some(labels) = catalog.value_labels(variable) else {
        return values.to_vec();
    };
    values
        .iter()
        .map(|value| match resolve_code(labels, value).label() {
            Some(label) => CodedValue::Text(label.to_string()),
            None => CodedValue::Missing,
        })
        .collect()
}

/// Translate every coded column of a table using the questionnaire catalog.
///
/// # Errors
///
/// Only frame construction can fail; cell values never cause an error.
pub fn translate(df: &DataFrame) -> PolarsResult<DataFrame> {
    translate_with(default_catalog(), df)
}

/// Translate every coded column of a table using the given catalog.
pub fn translate_with(catalog: &LabelCatalog, df: &DataFrame) -> PolarsResult<DataFrame> {
    translate_with_report(catalog, df).map(|(translated, _)| translated)
}

/// Translate a table and return per-column diagnostics alongside it.
pub fn translate_with_report(
    catalog: &LabelCatalog,
    df: &DataFrame,
) -> PolarsResult<(DataFrame, TranslationReport)> {
    let mut columns: Vec<Column> = Vec::with_capacity(df.width());
    let mut report = TranslationReport::new(df.height());
    for column in df.get_columns() {
        let name = column.name().as_str();
        match catalog.value_labels(name) {
            Some(labels) => {
                let (series, column_report) =
                    translate_series(labels, column.as_materialized_series());
                columns.push(series.into_column());
                report.columns.push(column_report);
            }
            None => {
                columns.push(column.clone());
                report.columns.push(ColumnReport::passthrough(name));
            }
        }
    }
    let translated = DataFrame::new(columns)?;
    Ok((translated, report))
}

/// Copy of the table with coded column names replaced by their question text.
///
/// # Errors
///
/// Fails when a question text collides with an existing column name.
pub fn rename_to_questions(catalog: &LabelCatalog, df: &DataFrame) -> PolarsResult<DataFrame> {
    let mut renamed = df.clone();
    for name in df.get_column_names() {
        if let Some(question) = catalog.question(name.as_str()) {
            renamed.rename(name.as_str(), question.into())?;
        }
    }
    Ok(renamed)
}

fn translate_series(labels: &ValueLabels, series: &Series) -> (Series, ColumnReport) {
    let mut report = ColumnReport::coded(series.name().as_str());
    let translated: Vec<Option<String>> = series_to_coded(series)
        .iter()
        .map(|value| {
            let resolution = resolve_code(labels, value);
            report.record(resolution);
            resolution.label().map(str::to_string)
        })
        .collect();
    debug!(
        column = %series.name(),
        translated = report.translated,
        missing = report.missing,
        unmatched = report.unmatched,
        "translated coded column"
    );
    (Series::new(series.name().clone(), translated), report)
}
