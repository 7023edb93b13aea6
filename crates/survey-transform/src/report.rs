//! Translation diagnostics.
//!
//! The translated table itself uses one null marker for both "missing in the
//! source" and "no matching code". The report keeps those apart per column.

use serde::Serialize;

use crate::resolve::Resolution;

/// Counts for one column of a translation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnReport {
    /// Column name as found in the input table.
    pub column: String,
    /// Whether the column is a coded survey variable.
    pub coded: bool,
    /// Cells replaced by a label.
    pub translated: usize,
    /// Cells missing in the source.
    pub missing: usize,
    /// Non-missing cells with no matching code.
    pub unmatched: usize,
}

impl ColumnReport {
    pub(crate) fn coded(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            coded: true,
            translated: 0,
            missing: 0,
            unmatched: 0,
        }
    }

    pub(crate) fn passthrough(column: impl Into<String>) -> Self {
        Self {
            coded: false,
            ..Self::coded(column)
        }
    }

    pub(crate) fn record(&mut self, resolution: Resolution<'_>) {
        match resolution {
            Resolution::Missing => self.missing += 1,
            Resolution::Unmatched => self.unmatched += 1,
            _ => self.translated += 1,
        }
    }

    /// Number of cells counted.
    pub fn total(&self) -> usize {
        self.translated + self.missing + self.unmatched
    }
}

/// Per-column diagnostics for a whole table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranslationReport {
    /// Row count of the translated table.
    pub rows: usize,
    /// One entry per input column, in column order.
    pub columns: Vec<ColumnReport>,
}

impl TranslationReport {
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            columns: Vec::new(),
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnReport> {
        self.columns.iter().find(|column| column.column == name)
    }

    pub fn coded_columns(&self) -> impl Iterator<Item = &ColumnReport> {
        self.columns.iter().filter(|column| column.coded)
    }

    pub fn total_unmatched(&self) -> usize {
        self.columns.iter().map(|column| column.unmatched).sum()
    }

    pub fn has_unmatched(&self) -> bool {
        self.total_unmatched() > 0
    }
}
