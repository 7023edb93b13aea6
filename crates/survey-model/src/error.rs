use thiserror::Error;

/// Errors raised while building or checking a label catalog.
///
/// These never occur during translation; they guard the compiled-in
/// codebook and are surfaced by tests and the `check` command.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("variable {variable} has value labels but no question text")]
    MissingQuestion { variable: String },
    #[error("variable {variable} has question text but no value labels")]
    MissingValueLabels { variable: String },
    #[error("variable {variable} has an empty value-label mapping")]
    EmptyValueLabels { variable: String },
    #[error("variable {variable} declares code {code} more than once")]
    DuplicateCode { variable: String, code: f64 },
    #[error("variable {variable} has non-finite code {code}")]
    InvalidCode { variable: String, code: f64 },
    #[error("variable {variable} is declared more than once")]
    DuplicateVariable { variable: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
