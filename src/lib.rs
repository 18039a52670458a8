//! Column Summary - load a headerless single-column CSV, trim its values,
//! and report descriptive statistics plus a distinct-value count.

pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod stats;

pub use config::ReportConfig;
pub use error::TableError;
pub use pipeline::{run, RunOutcome};
