//! Survey codebook model.
//!
//! - **value**: [`CodedValue`], the tagged union of cell representations
//! - **labels**: [`ValueLabels`], the code → label mapping of one variable
//! - **catalog**: [`LabelCatalog`], question text and value labels per variable
//! - **error**: [`CatalogError`] for catalog construction and self-checks

pub mod catalog;
pub mod error;
pub mod labels;
pub mod value;

pub use catalog::LabelCatalog;
pub use error::{CatalogError, Result};
pub use labels::{LabelEntry, ValueLabels};
pub use value::CodedValue;
