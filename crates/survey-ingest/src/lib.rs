//! Survey table ingestion and output.
//!
//! Survey exports arrive as CSV with one column per questionnaire variable.
//! Reading infers column types, so a coded column may come back as integers,
//! floats or strings depending on how the export was produced.

pub mod error;
pub mod table;

pub use error::{IngestError, Result};
pub use table::{default_output_path, read_survey_csv, write_csv, write_survey_csv};
