//! Shared utilities for survey crates.
//!
//! This crate provides the Polars `AnyValue` helpers used to read coded cells
//! out of a DataFrame and to render them back as text.

pub mod any_value;

// Re-export commonly used functions at crate root for convenience
pub use any_value::{any_to_coded, any_to_string, format_numeric, parse_i64, series_to_coded};
