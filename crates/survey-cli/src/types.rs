use std::path::PathBuf;

use serde::Serialize;
use survey_transform::TranslationReport;

#[derive(Debug)]
pub struct TranslateResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub report: TranslationReport,
    pub question_headers: bool,
}

/// One row of the `variables` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableSummary {
    pub variable: String,
    pub question: String,
    pub codes: usize,
}
