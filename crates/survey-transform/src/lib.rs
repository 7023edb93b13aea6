//! Survey value-label translation.
//!
//! This crate turns coded survey responses into their labels:
//!
//! - **resolve**: the per-value resolution chain (missing → direct →
//!   integral → textual → known label → unmatched)
//! - **translate**: column-level [`map_codes`] and table-level [`translate`]
//! - **report**: per-column diagnostics for a translation pass
//!
//! Translation never fails on data: anything that cannot be resolved becomes
//! a null cell.

pub mod report;
pub mod resolve;
pub mod translate;

pub use report::{ColumnReport, TranslationReport};
pub use resolve::{Resolution, integral_code, resolve_code};
pub use translate::{
    map_codes, map_codes_with, map_values, map_values_with, rename_to_questions, translate,
    translate_with, translate_with_report,
};
