//! CSV reading and writing for survey tables.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use polars::prelude::{AnyValue, CsvReadOptions, DataFrame, SerReader};
use survey_common::any_to_string;
use tracing::info;

use crate::error::{IngestError, Result};

/// Reads a survey CSV export into a DataFrame.
///
/// The first row is the header. Every column is read as text, so columns
/// that are not translated keep their exact spelling (`007`, `1.50`) when
/// written back. Coded columns resolve `"1"` and `"1.0"` like numbers.
pub fn read_survey_csv(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded survey table"
    );
    Ok(df)
}

/// Writes a DataFrame as CSV to any writer.
///
/// Nulls become empty fields and text is written verbatim. Numeric columns,
/// which only occur in frames built in code, lose a trailing `.0`.
pub fn write_csv<W: Write>(df: &DataFrame, writer: W) -> csv::Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(df.get_column_names().iter().map(|name| name.as_str()))?;
    let columns = df.get_columns();
    for idx in 0..df.height() {
        let record: Vec<String> = columns
            .iter()
            .map(|column| any_to_string(column.get(idx).unwrap_or(AnyValue::Null)))
            .collect();
        out.write_record(&record)?;
    }
    out.flush()?;
    Ok(())
}

/// Writes a DataFrame to a CSV file, replacing any existing file.
pub fn write_survey_csv(df: &DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(df, BufWriter::new(file)).map_err(|source| IngestError::CsvWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), rows = df.height(), "wrote survey table");
    Ok(())
}

/// Output path used when none is given: `<stem>_translated.csv` next to the
/// input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "survey".to_string());
    input.with_file_name(format!("{stem}_translated.csv"))
}
