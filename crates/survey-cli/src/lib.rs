//! CLI library components for the survey label translator.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
